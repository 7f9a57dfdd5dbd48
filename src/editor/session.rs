//! Editing session tying levels, engines and history together
//!
//! This is the surface a GUI shell drives: one user gesture maps to one call,
//! and every call that changes tiles of the current level records one undo
//! step.

use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::algorithm::fill::FloodFillEngine;
use crate::editor::collection::LevelCollection;
use crate::editor::history::EditHistory;
use crate::io::configuration::EditorConfig;
use crate::io::error::Result;
use crate::io::level_file;
use crate::spatial::grid::{LevelGrid, TileSnapshot};
use crate::spatial::resize::{Anchor, GridResizer};
use crate::spatial::tiles::{FieldRange, Tile, TileCodec};

/// Level editor state for one open level document
#[derive(Clone, Debug)]
pub struct LevelEditor {
    config: EditorConfig,
    codec: TileCodec,
    fill: FloodFillEngine,
    resizer: GridResizer,
    levels: LevelCollection,
    history: EditHistory,
}

impl Default for LevelEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl LevelEditor {
    /// Create an editor with no levels loaded
    pub fn new(config: EditorConfig) -> Self {
        let codec = config.codec();
        Self {
            fill: FloodFillEngine::new(codec.clone()),
            resizer: GridResizer::new(&codec),
            history: EditHistory::new(config.history_limit),
            levels: LevelCollection::new(),
            codec,
            config,
        }
    }

    /// Active configuration
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Tile codec built from the configuration
    pub const fn codec(&self) -> &TileCodec {
        &self.codec
    }

    /// Loaded levels
    pub const fn levels(&self) -> &LevelCollection {
        &self.levels
    }

    /// Undo history of the current level
    pub const fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Replace the loaded levels with a parsed level document
    ///
    /// # Errors
    ///
    /// Returns any error of [`level_file::parse_level_document`]; the editor
    /// is unchanged in that case
    pub fn load_level_file(&mut self, json: &str) -> Result<&LevelCollection> {
        let levels = level_file::parse_level_document(json)?;
        Ok(self.open(levels))
    }

    /// Read a level document from disk and load it
    ///
    /// # Errors
    ///
    /// Returns any error of [`level_file::load_level_file`]; the editor is
    /// unchanged in that case
    pub fn open_path(&mut self, path: &Path) -> Result<&LevelCollection> {
        let levels = level_file::load_level_file(path)?;
        Ok(self.open(levels))
    }

    /// Replace the loaded levels; history is cleared
    pub fn open(&mut self, levels: LevelCollection) -> &LevelCollection {
        self.levels = levels;
        self.history.clear();
        debug!("opened {} level(s)", self.levels.len());
        &self.levels
    }

    /// Author a new level filled with empty tiles and make it current
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero dimension, or `DuplicateLevel` if
    /// the name exists and `overwrite` is false
    pub fn new_level(
        &mut self,
        name: &str,
        sprite_sheet: &str,
        width: usize,
        height: usize,
        overwrite: bool,
    ) -> Result<&LevelGrid> {
        let grid = LevelGrid::new_empty(width, height, sprite_sheet, &self.codec)?;
        self.levels.add_level(name, grid, overwrite)?;
        self.select_level(name)?;
        self.levels.level(Some(name))
    }

    /// Make another level current; history is cleared
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel` if no level has this name
    pub fn select_level(&mut self, name: &str) -> Result<()> {
        self.levels.set_current_level(name)?;
        self.history.clear();
        Ok(())
    }

    /// Flood fill from `start` in the named or current level
    ///
    /// Returns the number of cells changed.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel`/`EmptyCollection` if the level cannot be
    /// resolved, or `IndexOutOfBounds` for an invalid start index
    pub fn flood_fill(
        &mut self,
        level: Option<&str>,
        start: usize,
        tile: &Tile,
        range: FieldRange,
    ) -> Result<usize> {
        let records_history = self.records_history(level);
        let fill = &self.fill;
        let grid = self.levels.level_mut(level)?;
        let before = grid.snapshot();
        let changed = fill.fill(grid, start, tile, range)?;
        if changed > 0 && records_history {
            self.history.commit(before);
        }
        Ok(changed)
    }

    /// Set one tile in the named or current level
    ///
    /// Returns whether the tile changed.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel`/`EmptyCollection` if the level cannot be
    /// resolved, or `IndexOutOfBounds` for an invalid index
    pub fn paint_tile(&mut self, level: Option<&str>, index: usize, tile: Tile) -> Result<bool> {
        let records_history = self.records_history(level);
        let grid = self.levels.level_mut(level)?;
        if grid.get(index)? == &tile {
            return Ok(false);
        }
        let before = grid.snapshot();
        trace!("painting {tile} at {index}");
        grid.set(index, tile)?;
        if records_history {
            self.history.commit(before);
        }
        Ok(true)
    }

    /// Reset one tile of the named or current level to the empty tile
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel`/`EmptyCollection` if the level cannot be
    /// resolved, or `IndexOutOfBounds` for an invalid index
    pub fn erase_tile(&mut self, level: Option<&str>, index: usize) -> Result<bool> {
        let empty = self.codec.empty_tile();
        self.paint_tile(level, index, empty)
    }

    /// Pixel position of a tile of the named or current level
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel`/`EmptyCollection` if the level cannot be
    /// resolved, or `IndexOutOfBounds` for an invalid index
    pub fn tile_position(&self, level: Option<&str>, index: usize) -> Result<(usize, usize)> {
        self.levels
            .level(level)?
            .tile_position(index, self.config.tile_size)
    }

    /// Resize the current level around an anchor
    ///
    /// Snapshots are tied to the array shape, so history is cleared.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` with no current level, or `InvalidDimensions`
    /// for a zero dimension; the level is unchanged in either case
    pub fn resize_level(&mut self, anchor: Anchor, width: usize, height: usize) -> Result<()> {
        let resizer = &self.resizer;
        let grid = self.levels.level_mut(None)?;
        resizer.resize_in_place(grid, anchor, width, height)?;
        self.history.clear();
        Ok(())
    }

    /// Undo the last edit of the current level
    ///
    /// Returns whether anything was undone.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` with no current level, or `SizeMismatch` if
    /// the snapshot no longer fits the level
    pub fn undo(&mut self) -> Result<bool> {
        self.step(EditHistory::undo)
    }

    /// Redo the last undone edit of the current level
    ///
    /// Returns whether anything was redone.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` with no current level, or `SizeMismatch` if
    /// the snapshot no longer fits the level
    pub fn redo(&mut self) -> Result<bool> {
        self.step(EditHistory::redo)
    }

    /// Image path of the named or current level's sprite sheet
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel`/`EmptyCollection` if the level cannot be resolved
    pub fn sprite_sheet_path(&self, level: Option<&str>) -> Result<PathBuf> {
        let grid = self.levels.level(level)?;
        Ok(self.config.sprite_sheet_path(grid.sprite_sheet()))
    }

    /// Serialize the loaded levels as compact JSON
    ///
    /// # Errors
    ///
    /// Returns `LevelFile` if serialization fails
    pub fn to_json(&self) -> Result<String> {
        level_file::to_json(&self.levels)
    }

    /// Serialize the loaded levels with one grid row per line
    ///
    /// # Errors
    ///
    /// Returns `LevelFile` if serialization fails
    pub fn to_json_pretty(&self) -> Result<String> {
        level_file::to_json_pretty(&self.levels)
    }

    /// Write the loaded levels to disk
    ///
    /// # Errors
    ///
    /// Returns any error of [`level_file::save_level_file`]
    pub fn save_path(&self, path: &Path) -> Result<()> {
        level_file::save_level_file(path, &self.levels)
    }

    // History belongs to the current level; edits addressed elsewhere are not recorded
    fn records_history(&self, level: Option<&str>) -> bool {
        match level {
            None => true,
            Some(name) => self.levels.current_level() == Some(name),
        }
    }

    fn step(
        &mut self,
        pop: fn(&mut EditHistory, TileSnapshot) -> Option<TileSnapshot>,
    ) -> Result<bool> {
        let grid = self.levels.level_mut(None)?;
        let Some(snapshot) = pop(&mut self.history, grid.snapshot()) else {
            return Ok(false);
        };
        grid.restore(snapshot)?;
        Ok(true)
    }
}
