//! Coordinate mapping between flat row-major indices and grid positions
//!
//! A grid of `width` columns stores cell `(x, y)` at `y * width + x`.

use std::ops::Range;

use crate::io::error::{EditorError, Result};

/// Convert a flat index into `(x, y)`
///
/// # Errors
///
/// Returns `OutOfRange` if `index` is negative or `width` is zero
pub fn to_xy(index: i64, width: usize) -> Result<(usize, usize)> {
    let out_of_range = || EditorError::OutOfRange { index, width };
    let index = usize::try_from(index).map_err(|_conversion_error| out_of_range())?;
    if width == 0 {
        return Err(out_of_range());
    }
    Ok((index % width, index / width))
}

/// Convert `(x, y)` into a flat index
pub const fn to_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Check whether signed coordinates fall inside a `width` x `height` grid
pub const fn in_bounds(x: i64, y: i64, width: usize, height: usize) -> bool {
    x >= 0 && y >= 0 && (x as u64) < (width as u64) && (y as u64) < (height as u64)
}

/// Axis-aligned neighbors of a cell in up, right, down, left order
///
/// Neighbors falling outside the grid are skipped. Returns nothing for an
/// index outside the grid.
pub fn neighbors(index: usize, width: usize, height: usize) -> impl Iterator<Item = usize> {
    let origin = if width.checked_mul(height).is_none_or(|cells| index >= cells) {
        None
    } else {
        Some(((index % width) as i64, (index / width) as i64))
    };

    [(0, -1), (1, 0), (0, 1), (-1, 0)]
        .into_iter()
        .filter_map(move |(dx, dy)| {
            let (x, y) = origin?;
            let (nx, ny) = (x + dx, y + dy);
            in_bounds(nx, ny, width, height).then(|| to_index(nx as usize, ny as usize, width))
        })
}

/// Flat index range covered by one row
pub const fn row_span(row: usize, width: usize) -> Range<usize> {
    row * width..(row + 1) * width
}

/// Flat indices of one column, top to bottom
pub fn column_indices(column: usize, width: usize, height: usize) -> impl Iterator<Item = usize> {
    let valid = column < width;
    (0..height)
        .filter(move |_| valid)
        .map(move |row| to_index(column, row, width))
}
