//! Level grid storage with bounds-checked access and snapshots
//!
//! A level is a `width` x `height` array of tiles stored row-major, plus the
//! id of the sprite sheet its sprite coordinates refer to. The array length is
//! kept equal to `width * height` by every operation.

use crate::io::error::{EditorError, Result};
use crate::spatial::index::{column_indices, row_span, to_xy};
use crate::spatial::tiles::{Tile, TileCodec};

/// Deep copy of a grid's tile array
///
/// Snapshots are independent of the grid they came from, so restoring one
/// never observes a partially edited state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSnapshot {
    tiles: Vec<Tile>,
}

impl TileSnapshot {
    /// Wrap an owned tile array
    pub const fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Captured tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of captured cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test whether the snapshot holds no cells
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// One level's tile array and dimensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelGrid {
    width: usize,
    height: usize,
    sprite_sheet: String,
    tiles: Vec<Tile>,
}

impl LevelGrid {
    /// Create a grid with every cell set to `fill`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or the cell
    /// count overflows
    pub fn new(
        width: usize,
        height: usize,
        sprite_sheet: impl Into<String>,
        fill: &Tile,
    ) -> Result<Self> {
        let cell_count = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            sprite_sheet: sprite_sheet.into(),
            tiles: vec![fill.clone(); cell_count],
        })
    }

    /// Create a grid filled with the codec's canonical empty tile
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or the cell
    /// count overflows
    pub fn new_empty(
        width: usize,
        height: usize,
        sprite_sheet: impl Into<String>,
        codec: &TileCodec,
    ) -> Result<Self> {
        Self::new(width, height, sprite_sheet, &codec.empty_tile())
    }

    /// Create a grid from an existing row-major tile array
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or the cell
    /// count overflows, or `SizeMismatch` if `tiles` does not hold exactly `width * height` cells
    pub fn from_tiles(
        width: usize,
        height: usize,
        sprite_sheet: impl Into<String>,
        tiles: Vec<Tile>,
    ) -> Result<Self> {
        check_length(check_dimensions(width, height)?, tiles.len())?;
        Ok(Self {
            width,
            height,
            sprite_sheet: sprite_sheet.into(),
            tiles,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, always `width * height`
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Id of the sprite sheet the sprite coordinates refer to
    pub fn sprite_sheet(&self) -> &str {
        &self.sprite_sheet
    }

    /// Point the level at a different sprite sheet
    pub fn set_sprite_sheet(&mut self, sprite_sheet: impl Into<String>) {
        self.sprite_sheet = sprite_sheet.into();
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a flat index
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= width * height`
    pub fn get(&self, index: usize) -> Result<&Tile> {
        self.tiles.get(index).ok_or(EditorError::IndexOutOfBounds {
            index,
            len: self.tiles.len(),
        })
    }

    /// Replace the tile at a flat index
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= width * height`
    pub fn set(&mut self, index: usize, tile: Tile) -> Result<()> {
        let len = self.tiles.len();
        let cell = self
            .tiles
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfBounds { index, len })?;
        *cell = tile;
        Ok(())
    }

    /// Tile at `(x, y)`, if inside the grid
    pub fn tile_at(&self, x: usize, y: usize) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get(y * self.width + x)
    }

    /// Tiles of one row, left to right
    pub fn row(&self, y: usize) -> Option<&[Tile]> {
        if y >= self.height {
            return None;
        }
        self.tiles.get(row_span(y, self.width))
    }

    /// Tiles of one column, top to bottom
    pub fn column(&self, x: usize) -> Vec<&Tile> {
        column_indices(x, self.width, self.height)
            .filter_map(|index| self.tiles.get(index))
            .collect()
    }

    /// Pixel position of the top-left corner of a tile
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= width * height`
    pub fn tile_position(&self, index: usize, tile_size: usize) -> Result<(usize, usize)> {
        let len = self.tiles.len();
        let out_of_bounds = || EditorError::IndexOutOfBounds { index, len };
        if index >= len {
            return Err(out_of_bounds());
        }
        let signed = i64::try_from(index).map_err(|_conversion_error| out_of_bounds())?;
        let (x, y) = to_xy(signed, self.width)?;
        Ok((x * tile_size, y * tile_size))
    }

    /// Size of the whole map in pixels
    pub const fn map_size_pixels(&self, tile_size: usize) -> (usize, usize) {
        (self.width * tile_size, self.height * tile_size)
    }

    /// Reset a tile to the canonical empty tile
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= width * height`
    pub fn erase_tile(&mut self, index: usize, codec: &TileCodec) -> Result<()> {
        self.set(index, codec.empty_tile())
    }

    /// Count the tiles carrying a given type id
    pub fn count_type(&self, type_id: &str) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.type_id() == type_id)
            .count()
    }

    /// Deep copy of the tile array
    pub fn snapshot(&self) -> TileSnapshot {
        TileSnapshot::new(self.tiles.clone())
    }

    /// Replace the tile array with a snapshot's contents
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the snapshot does not hold `width * height` cells
    pub fn restore(&mut self, snapshot: TileSnapshot) -> Result<()> {
        check_length(self.tiles.len(), snapshot.len())?;
        self.tiles = snapshot.tiles;
        Ok(())
    }

    /// Mutable access to the tile array for in-place algorithms
    ///
    /// The slice cannot change length, so the size invariant holds.
    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Install a fully built array with new dimensions
    pub(crate) fn replace_tiles(
        &mut self,
        width: usize,
        height: usize,
        tiles: Vec<Tile>,
    ) -> Result<()> {
        check_length(check_dimensions(width, height)?, tiles.len())?;
        self.width = width;
        self.height = height;
        self.tiles = tiles;
        Ok(())
    }
}

/// Validate dimensions and return the cell count they imply
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&cell_count| cell_count > 0)
        .ok_or(EditorError::InvalidDimensions { width, height })
}

fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(EditorError::SizeMismatch { expected, actual });
    }
    Ok(())
}
