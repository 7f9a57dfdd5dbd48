//! Region flood fill over a level grid
//!
//! The fill walks the 4-connected component of the start cell with an explicit
//! stack, so its memory use is bounded by the grid size rather than by call
//! depth. The visited set is local to each call.

use log::trace;

use crate::algorithm::bitset::CellBitset;
use crate::io::error::{EditorError, Result};
use crate::spatial::grid::LevelGrid;
use crate::spatial::index::neighbors;
use crate::spatial::tiles::{FieldRange, Tile, TileCodec};

/// Fill the connected region around `start` whose tiles satisfy `fillable`
///
/// Each matching cell is rewritten by `write` exactly once. Returns the number
/// of cells written.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if `start` is not a cell of the grid; the grid is
/// not modified in that case
pub fn fill_region<P, W>(
    grid: &mut LevelGrid,
    start: usize,
    fillable: P,
    mut write: W,
) -> Result<usize>
where
    P: Fn(&Tile) -> bool,
    W: FnMut(&mut Tile),
{
    let (width, height) = (grid.width(), grid.height());
    let cell_count = grid.cell_count();
    if start >= cell_count {
        return Err(EditorError::IndexOutOfBounds {
            index: start,
            len: cell_count,
        });
    }

    let tiles = grid.tiles_mut();
    let mut visited = CellBitset::new(cell_count);
    let mut stack = vec![start];
    let mut changed = 0;

    while let Some(index) = stack.pop() {
        if visited.contains(index) {
            continue;
        }
        let Some(tile) = tiles.get_mut(index) else {
            continue;
        };
        if !fillable(tile) {
            continue;
        }

        write(tile);
        visited.insert(index);
        changed += 1;

        // Filter before pushing so non-matching cells never reach the stack
        for neighbor in neighbors(index, width, height) {
            if !visited.contains(neighbor) && tiles.get(neighbor).is_some_and(&fillable) {
                stack.push(neighbor);
            }
        }
    }

    Ok(changed)
}

/// Bucket fill driven by tile field comparison
#[derive(Clone, Debug)]
pub struct FloodFillEngine {
    codec: TileCodec,
}

impl FloodFillEngine {
    /// Create an engine using `codec` to recognise empty tiles
    pub const fn new(codec: TileCodec) -> Self {
        Self { codec }
    }

    /// Flood fill from `start`, writing the fields of `new_tile` inside `range`
    ///
    /// Cells join the region when they agree with the start tile on every field
    /// in `range`. When the start tile is empty the range is ignored: the region
    /// is every connected empty tile and each one receives the whole of
    /// `new_tile`. Filling with a value the start tile already has is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `start` is not a cell of the grid
    pub fn fill(
        &self,
        grid: &mut LevelGrid,
        start: usize,
        new_tile: &Tile,
        range: FieldRange,
    ) -> Result<usize> {
        let source = grid.get(start)?.clone();

        let changed = if self.codec.is_empty(&source) {
            if self.codec.is_empty(new_tile) {
                0
            } else {
                let codec = &self.codec;
                fill_region(
                    grid,
                    start,
                    |tile| codec.is_empty(tile),
                    |tile| tile.clone_from(new_tile),
                )?
            }
        } else if range.matches(&source, new_tile) {
            0
        } else {
            fill_region(
                grid,
                start,
                |tile| range.matches(&source, tile),
                |tile| range.apply(tile, new_tile),
            )?
        };

        trace!("flood fill from {start} with {new_tile} changed {changed} cells");
        Ok(changed)
    }
}
