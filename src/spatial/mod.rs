//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Tile values and their string encoding
//! - Flat index and coordinate conversion
//! - Level grid storage and snapshots
//! - Anchored grid resizing

/// Level grid storage and snapshots
pub mod grid;
/// Coordinate conversion and neighbor lookup
pub mod index;
/// Anchored grid resizing
pub mod resize;
/// Tile values, codec and field ranges
pub mod tiles;

pub use grid::LevelGrid;
pub use tiles::{Tile, TileCodec};
