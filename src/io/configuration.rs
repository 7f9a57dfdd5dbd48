//! Editor constants and runtime configuration defaults

use std::path::{Path, PathBuf};

use crate::spatial::tiles::TileCodec;

/// Edge length of one tile in pixels, both on screen and in the sprite sheet
pub const TILE_SIZE: usize = 32;

// Reserved type code; sprite fields of a tile carrying it are meaningless
/// Type id marking a tile as logically empty
pub const EMPTY_TYPE_ID: &str = "00";

/// Separator between the fields of an encoded tile key
pub const TILE_FIELD_SEPARATOR: char = '-';

/// Number of fields in an encoded tile key (`sprite_x`, `sprite_y`, `type_id`)
pub const TILE_FIELD_COUNT: usize = 3;

/// Top-level key holding the level mapping in a level document
pub const LEVELS_KEY: &str = "levels";

/// Key used for the level mapping by older level documents
pub const LEGACY_LEVELS_KEY: &str = "levelData";

// Bounds memory held by snapshots of large grids
/// Maximum number of undo snapshots kept per level
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// File extension of sprite sheet images
pub const SPRITE_SHEET_EXTENSION: &str = "png";

/// Directory sprite sheets are resolved against by default
pub const DEFAULT_SPRITE_DIR: &str = "img";

/// Indentation unit used when pretty-printing level documents
pub const PRETTY_INDENT: &str = "  ";

/// Runtime configuration handed to the editor and the engines it drives
///
/// Replaces ambient tables of paths and codes with one explicit value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Tile edge length in pixels
    pub tile_size: usize,
    /// Type id reserved for empty tiles
    pub empty_type_id: String,
    /// Maximum number of undo snapshots retained
    pub history_limit: usize,
    /// Directory containing sprite sheet images
    pub sprite_dir: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            empty_type_id: EMPTY_TYPE_ID.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            sprite_dir: PathBuf::from(DEFAULT_SPRITE_DIR),
        }
    }
}

impl EditorConfig {
    /// Replace the tile size
    #[must_use]
    pub const fn with_tile_size(mut self, tile_size: usize) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Replace the reserved empty type id
    #[must_use]
    pub fn with_empty_type_id(mut self, empty_type_id: impl Into<String>) -> Self {
        self.empty_type_id = empty_type_id.into();
        self
    }

    /// Replace the undo history limit
    #[must_use]
    pub const fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    /// Replace the sprite sheet directory
    #[must_use]
    pub fn with_sprite_dir(mut self, sprite_dir: impl AsRef<Path>) -> Self {
        self.sprite_dir = sprite_dir.as_ref().to_path_buf();
        self
    }

    /// Build the tile codec matching this configuration
    pub fn codec(&self) -> TileCodec {
        TileCodec::new(self.empty_type_id.clone())
    }

    /// Resolve a sprite sheet id to the image path it names
    pub fn sprite_sheet_path(&self, sprite_sheet: &str) -> PathBuf {
        self.sprite_dir
            .join(format!("{sprite_sheet}.{SPRITE_SHEET_EXTENSION}"))
    }
}
