//! Tile values and their compact string encoding
//!
//! A tile is stored on disk as `sprite_x-sprite_y-type_id`, where the sprite
//! fields address a cell of the level's sprite sheet and the type id is a short
//! alphanumeric code. One type id is reserved to mark a tile as empty; the
//! sprite fields of an empty tile carry no meaning.

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{TILE_FIELD_COUNT, TILE_FIELD_SEPARATOR};
use crate::io::error::{EditorError, Result, invalid_parameter};

/// One field of an encoded tile, in key order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileField {
    /// Column of the tile's sprite in the sprite sheet
    SpriteX,
    /// Row of the tile's sprite in the sprite sheet
    SpriteY,
    /// Gameplay type code
    TypeId,
}

impl TileField {
    /// All fields in key order
    pub const ALL: [Self; TILE_FIELD_COUNT] = [Self::SpriteX, Self::SpriteY, Self::TypeId];

    /// Position of the field within an encoded key
    pub const fn position(self) -> usize {
        match self {
            Self::SpriteX => 0,
            Self::SpriteY => 1,
            Self::TypeId => 2,
        }
    }
}

/// Decoded tile value
///
/// Tiles are plain values: they are copied into and out of a grid and never
/// shared. The `Display` form is the encoded key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    sprite_x: u32,
    sprite_y: u32,
    type_id: String,
}

impl Tile {
    /// Create a tile, validating the type id
    ///
    /// # Errors
    ///
    /// Returns `MalformedTileKey` if the type id is empty or not ASCII alphanumeric
    pub fn new(sprite_x: u32, sprite_y: u32, type_id: impl Into<String>) -> Result<Self> {
        let type_id = type_id.into();
        validate_type_id(&type_id, || format!("{sprite_x}-{sprite_y}-{type_id}"))?;
        Ok(Self {
            sprite_x,
            sprite_y,
            type_id,
        })
    }

    /// Column of the sprite in the sprite sheet
    pub const fn sprite_x(&self) -> u32 {
        self.sprite_x
    }

    /// Row of the sprite in the sprite sheet
    pub const fn sprite_y(&self) -> u32 {
        self.sprite_y
    }

    /// Sprite sheet cell as `(x, y)`
    pub const fn sprite_index(&self) -> (u32, u32) {
        (self.sprite_x, self.sprite_y)
    }

    /// Gameplay type code
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Encoded key for this tile
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Test whether a single field is equal between two tiles
    pub fn field_matches(&self, other: &Self, field: TileField) -> bool {
        match field {
            TileField::SpriteX => self.sprite_x == other.sprite_x,
            TileField::SpriteY => self.sprite_y == other.sprite_y,
            TileField::TypeId => self.type_id == other.type_id,
        }
    }

    /// Overwrite a single field with the value from another tile
    pub fn copy_field(&mut self, other: &Self, field: TileField) {
        match field {
            TileField::SpriteX => self.sprite_x = other.sprite_x,
            TileField::SpriteY => self.sprite_y = other.sprite_y,
            TileField::TypeId => self.type_id.clone_from(&other.type_id),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{TILE_FIELD_SEPARATOR}{}{TILE_FIELD_SEPARATOR}{}",
            self.sprite_x, self.sprite_y, self.type_id
        )
    }
}

impl FromStr for Tile {
    type Err = EditorError;

    fn from_str(key: &str) -> Result<Self> {
        let malformed = |reason| EditorError::MalformedTileKey {
            key: key.to_string(),
            reason,
        };

        let mut fields = key.split(TILE_FIELD_SEPARATOR);
        let (Some(sprite_x), Some(sprite_y), Some(type_id), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed("expected exactly 3 dash-separated fields"));
        };

        let sprite_x = parse_sprite_field(sprite_x)
            .ok_or_else(|| malformed("sprite_x is not a canonical non-negative integer"))?;
        let sprite_y = parse_sprite_field(sprite_y)
            .ok_or_else(|| malformed("sprite_y is not a canonical non-negative integer"))?;
        validate_type_id(type_id, || key.to_string())?;

        Ok(Self {
            sprite_x,
            sprite_y,
            type_id: type_id.to_string(),
        })
    }
}

/// Parse a sprite coordinate written without sign or leading zeros
fn parse_sprite_field(field: &str) -> Option<u32> {
    let value = field.parse::<u32>().ok()?;
    (value.to_string() == field).then_some(value)
}

fn validate_type_id(type_id: &str, key: impl FnOnce() -> String) -> Result<()> {
    if type_id.is_empty() {
        return Err(EditorError::MalformedTileKey {
            key: key(),
            reason: "type_id is empty",
        });
    }
    if !type_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(EditorError::MalformedTileKey {
            key: key(),
            reason: "type_id is not alphanumeric",
        });
    }
    Ok(())
}

/// Encoder and decoder for tile keys with a configured empty type id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCodec {
    empty_type_id: String,
}

impl TileCodec {
    /// Create a codec treating `empty_type_id` as the empty tile marker
    pub fn new(empty_type_id: impl Into<String>) -> Self {
        Self {
            empty_type_id: empty_type_id.into(),
        }
    }

    /// The reserved empty type id
    pub fn empty_type_id(&self) -> &str {
        &self.empty_type_id
    }

    /// Join three fields into a key
    ///
    /// Inputs are not validated.
    pub fn encode(&self, sprite_x: u32, sprite_y: u32, type_id: &str) -> String {
        format!("{sprite_x}{TILE_FIELD_SEPARATOR}{sprite_y}{TILE_FIELD_SEPARATOR}{type_id}")
    }

    /// Split a key into its fields
    ///
    /// # Errors
    ///
    /// Returns `MalformedTileKey` if the key does not have exactly three fields,
    /// a sprite field is not a canonical non-negative integer, or the type id is invalid
    pub fn decode(&self, key: &str) -> Result<Tile> {
        key.parse()
    }

    /// Test whether a key's type id is the empty marker, ignoring sprite fields
    pub fn is_empty_key(&self, key: &str) -> bool {
        key.splitn(TILE_FIELD_COUNT, TILE_FIELD_SEPARATOR)
            .nth(TileField::TypeId.position())
            .is_some_and(|type_id| type_id == self.empty_type_id)
    }

    /// Test whether a tile is logically empty
    pub fn is_empty(&self, tile: &Tile) -> bool {
        tile.type_id == self.empty_type_id
    }

    /// Canonical empty key, `0-0-<empty>`
    pub fn empty_key(&self) -> String {
        self.encode(0, 0, &self.empty_type_id)
    }

    /// Canonical empty tile
    pub fn empty_tile(&self) -> Tile {
        Tile {
            sprite_x: 0,
            sprite_y: 0,
            type_id: self.empty_type_id.clone(),
        }
    }
}

/// Contiguous range of tile fields `[start, end)` used to compare and copy tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldRange {
    start: usize,
    end: usize,
}

impl FieldRange {
    /// Every field
    pub const ALL: Self = Self {
        start: 0,
        end: TILE_FIELD_COUNT,
    };

    /// Sprite coordinates only
    pub const SPRITE: Self = Self { start: 0, end: 2 };

    /// Type id only
    pub const TYPE: Self = Self {
        start: 2,
        end: TILE_FIELD_COUNT,
    };

    /// Create a range over field positions `[start, end)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the range is empty or extends past the last field
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start >= end || end > TILE_FIELD_COUNT {
            return Err(invalid_parameter(
                "field_range",
                &format!("({start}, {end})"),
                &format!("must satisfy start < end <= {TILE_FIELD_COUNT}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// First field position (inclusive)
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last field position (exclusive)
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Test whether a field lies inside the range
    pub const fn contains(&self, field: TileField) -> bool {
        let position = field.position();
        self.start <= position && position < self.end
    }

    /// Fields inside the range, in key order
    pub fn fields(&self) -> impl Iterator<Item = TileField> + '_ {
        TileField::ALL
            .into_iter()
            .filter(move |&field| self.contains(field))
    }

    /// Test whether two tiles agree on every field in the range
    pub fn matches(&self, a: &Tile, b: &Tile) -> bool {
        self.fields().all(|field| a.field_matches(b, field))
    }

    /// Copy the fields in the range from `source` into `target`
    pub fn apply(&self, target: &mut Tile, source: &Tile) {
        for field in self.fields() {
            target.copy_field(source, field);
        }
    }
}
