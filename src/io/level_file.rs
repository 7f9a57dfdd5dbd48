//! JSON level documents
//!
//! A document maps level names to level records under a top-level `levels`
//! key (`levelData` in older files):
//!
//! ```json
//! { "levels": { "intro": { "width": 2, "height": 1, "spriteSheet": "dungeon",
//!                          "tileData": ["0-0-00", "1-2-FL"] } } }
//! ```
//!
//! Level order is preserved in both directions.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Map, Value};

use crate::editor::collection::LevelCollection;
use crate::io::configuration::{LEGACY_LEVELS_KEY, LEVELS_KEY, PRETTY_INDENT};
use crate::io::error::{EditorError, Result, level_file_error};
use crate::spatial::grid::LevelGrid;
use crate::spatial::tiles::Tile;

/// Serialized form of one level
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Sprite sheet id
    #[serde(rename = "spriteSheet")]
    pub sprite_sheet: String,
    /// Encoded tiles in row-major order
    #[serde(rename = "tileData")]
    pub tile_data: Vec<String>,
}

impl LevelRecord {
    /// Capture a grid in serialized form
    pub fn from_grid(grid: &LevelGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            sprite_sheet: grid.sprite_sheet().to_string(),
            tile_data: grid.tiles().iter().map(Tile::key).collect(),
        }
    }

    /// Decode every tile and build the grid
    ///
    /// # Errors
    ///
    /// Returns `MalformedTileKey` for the first undecodable tile,
    /// `InvalidDimensions` for a zero dimension, or `SizeMismatch` if
    /// `tileData` does not hold `width * height` entries
    pub fn into_grid(self) -> Result<LevelGrid> {
        let tiles = self
            .tile_data
            .iter()
            .map(|key| key.parse::<Tile>())
            .collect::<Result<Vec<_>>>()?;
        LevelGrid::from_tiles(self.width, self.height, self.sprite_sheet, tiles)
    }
}

/// Parse a level document into a collection; the first level becomes current
///
/// # Errors
///
/// Returns `LevelFile` if the text is not a JSON object with a level mapping
/// or a record has the wrong shape, and any grid construction error for the
/// records themselves
pub fn parse_level_document(json: &str) -> Result<LevelCollection> {
    let mut document: Map<String, Value> = serde_json::from_str(json)
        .map_err(|source| level_file_error(&"parsing level document", source))?;

    let levels = if let Some(levels) = document.remove(LEVELS_KEY) {
        levels
    } else if let Some(levels) = document.remove(LEGACY_LEVELS_KEY) {
        warn!("level document uses legacy '{LEGACY_LEVELS_KEY}' key");
        levels
    } else {
        return Err(level_file_error(
            &"reading level mapping",
            <serde_json::Error as serde::de::Error>::missing_field(LEVELS_KEY),
        ));
    };

    let levels: Map<String, Value> = serde_json::from_value(levels)
        .map_err(|source| level_file_error(&"reading level mapping", source))?;

    let mut collection = LevelCollection::new();
    for (name, value) in levels {
        let record: LevelRecord = serde_json::from_value(value)
            .map_err(|source| level_file_error(&format!("reading level '{name}'"), source))?;
        collection.add_level(name, record.into_grid()?, false)?;
    }

    debug!("parsed level document with {} level(s)", collection.len());
    Ok(collection)
}

/// Serialized form of a whole level collection
///
/// Levels are written as a JSON object in collection order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelDocument {
    /// Named levels in collection order
    #[serde(serialize_with = "serialize_in_order")]
    pub levels: Vec<(String, LevelRecord)>,
}

impl LevelDocument {
    /// Capture every level of a collection
    pub fn from_collection(collection: &LevelCollection) -> Self {
        Self {
            levels: collection
                .iter()
                .map(|(name, grid)| (name.to_string(), LevelRecord::from_grid(grid)))
                .collect(),
        }
    }

    /// Row width of each level's `tileData`, in document order
    fn row_widths(&self) -> Vec<usize> {
        self.levels.iter().map(|(_, record)| record.width).collect()
    }
}

fn serialize_in_order<S: Serializer>(
    levels: &[(String, LevelRecord)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(levels.iter().map(|(name, record)| (name, record)))
}

/// Build the JSON value of a level document
///
/// # Errors
///
/// Returns `LevelFile` if serialization fails
pub fn to_level_document(collection: &LevelCollection) -> Result<Value> {
    serde_json::to_value(LevelDocument::from_collection(collection))
        .map_err(|source| level_file_error(&"serializing level document", source))
}

/// Serialize a collection as compact JSON
///
/// # Errors
///
/// Returns `LevelFile` if serialization fails
pub fn to_json(collection: &LevelCollection) -> Result<String> {
    serde_json::to_string(&LevelDocument::from_collection(collection))
        .map_err(|source| level_file_error(&"serializing level document", source))
}

/// Serialize a collection as indented JSON with one grid row per line
///
/// # Errors
///
/// Returns `LevelFile` if serialization fails
pub fn to_json_pretty(collection: &LevelCollection) -> Result<String> {
    let document = LevelDocument::from_collection(collection);
    let formatter = RowFormatter::new(document.row_widths());

    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|source| level_file_error(&"serializing level document", source))?;
    out.push(b'\n');

    String::from_utf8(out).map_err(|source| {
        level_file_error(
            &"serializing level document",
            <serde_json::Error as serde::ser::Error>::custom(source),
        )
    })
}

/// Pretty formatter that lays out `tileData` arrays one grid row per line
///
/// The only arrays in a level document are the `tileData` arrays, one per
/// level, so each array opened takes the next width from `row_widths`.
struct RowFormatter<'a> {
    pretty: PrettyFormatter<'a>,
    row_widths: std::vec::IntoIter<usize>,
    // (row width, values written) of the array being written
    row: Option<(usize, usize)>,
}

impl RowFormatter<'_> {
    fn new(row_widths: Vec<usize>) -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(PRETTY_INDENT.as_bytes()),
            row_widths: row_widths.into_iter(),
            row: None,
        }
    }
}

impl Formatter for RowFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        let width = self.row_widths.next().unwrap_or(usize::MAX).max(1);
        self.row = Some((width, 0));
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.row = None;
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        let row_start = match &mut self.row {
            Some((width, written)) => {
                let row_start = *written % *width == 0;
                *written += 1;
                row_start
            }
            None => true,
        };
        if row_start {
            self.pretty.begin_array_value(writer, first)
        } else {
            writer.write_all(b", ")
        }
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

/// Read and parse a level document from disk
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or any error of
/// [`parse_level_document`]
pub fn load_level_file(path: &Path) -> Result<LevelCollection> {
    let json = fs::read_to_string(path).map_err(|source| EditorError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    debug!("loading level file '{}'", path.display());
    parse_level_document(&json)
}

/// Write a collection to disk in the row-aligned pretty form
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written, or `LevelFile` if
/// serialization fails
pub fn save_level_file(path: &Path, collection: &LevelCollection) -> Result<()> {
    let json = to_json_pretty(collection)?;
    fs::write(path, json).map_err(|source| EditorError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })?;
    debug!("saved level file '{}'", path.display());
    Ok(())
}
