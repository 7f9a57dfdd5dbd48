//! Tile-grid data engine for 2D level editing
//!
//! Levels are flat, row-major arrays of encoded tiles. The crate provides the
//! tile codec, coordinate mapping, an iterative flood fill, anchored resizing,
//! a named level collection and snapshot-based undo, with no rendering or
//! input handling of its own.

#![forbid(unsafe_code)]

/// Region fill and its supporting cell set
pub mod algorithm;
/// Level collection, undo history and the editing session
pub mod editor;
/// Errors, configuration and level documents
pub mod io;
/// Tiles, coordinate mapping, grids and resizing
pub mod spatial;

pub use editor::session::LevelEditor;
pub use io::error::{EditorError, Result};
