//! Anchored grid resizing
//!
//! A resize is two independent single-axis passes, rows first and then
//! columns. Each pass builds a new flat array by mapping every destination
//! cell back to the source cell it came from; destination cells with no
//! source become empty tiles. The anchor decides which end of an axis grows
//! or shrinks, and a centred anchor splits the change over both ends.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::io::error::{EditorError, Result, invalid_parameter};
use crate::spatial::grid::{LevelGrid, check_dimensions};
use crate::spatial::index::to_index;
use crate::spatial::tiles::{Tile, TileCodec};

/// Vertical part of a resize anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    /// Keep the top rows in place; rows change at the bottom
    Top,
    /// Split row changes between top and bottom
    Middle,
    /// Keep the bottom rows in place; rows change at the top
    Bottom,
}

/// Horizontal part of a resize anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
    /// Keep the left columns in place; columns change at the right
    Left,
    /// Split column changes between left and right
    Centre,
    /// Keep the right columns in place; columns change at the left
    Right,
}

/// Point of the grid that stays fixed while resizing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Vertical anchor
    pub vertical: VerticalAnchor,
    /// Horizontal anchor
    pub horizontal: HorizontalAnchor,
}

impl Anchor {
    /// Combine a vertical and horizontal anchor
    pub const fn new(vertical: VerticalAnchor, horizontal: HorizontalAnchor) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = match self.vertical {
            VerticalAnchor::Top => "top",
            VerticalAnchor::Middle => "middle",
            VerticalAnchor::Bottom => "bottom",
        };
        let horizontal = match self.horizontal {
            HorizontalAnchor::Left => "left",
            HorizontalAnchor::Centre => "centre",
            HorizontalAnchor::Right => "right",
        };
        write!(f, "{vertical}-{horizontal}")
    }
}

impl FromStr for Anchor {
    type Err = EditorError;

    /// Parse `"<vertical>-<horizontal>"`, e.g. `"bottom-right"`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            invalid_parameter(
                "anchor",
                &s,
                &"expected <top|middle|bottom>-<left|centre|right>",
            )
        };
        let lowered = s.trim().to_ascii_lowercase();
        let (vertical, horizontal) = lowered.split_once('-').ok_or_else(invalid)?;

        let vertical = match vertical {
            "top" => VerticalAnchor::Top,
            "middle" | "centre" | "center" => VerticalAnchor::Middle,
            "bottom" => VerticalAnchor::Bottom,
            _ => return Err(invalid()),
        };
        let horizontal = match horizontal {
            "left" => HorizontalAnchor::Left,
            "centre" | "center" | "middle" => HorizontalAnchor::Centre,
            "right" => HorizontalAnchor::Right,
            _ => return Err(invalid()),
        };

        Ok(Self::new(vertical, horizontal))
    }
}

/// Axis a single-axis resize operates on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Add or remove rows; the width is fixed
    Rows,
    /// Add or remove columns; the height is fixed
    Columns,
}

/// End of an axis where cells are added or removed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    /// Index-0 end (top or left); existing content shifts by the delta
    Low,
    /// Far end (bottom or right); existing content keeps its alignment
    High,
}

/// Resize a flat array along one axis
///
/// `delta` is the signed change in cells along the axis, `other_dimension`
/// the fixed size of the other axis and `new_dimension` the axis size after
/// the change. Added cells are copies of `empty`; removed cells are dropped.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the implied old size is negative or a cell
/// count overflows, or `SizeMismatch` if `tiles` does not match the old dimensions
pub fn resize_axis(
    axis: Axis,
    side: AxisSide,
    delta: i64,
    other_dimension: usize,
    new_dimension: usize,
    tiles: &[Tile],
    empty: &Tile,
) -> Result<Vec<Tile>> {
    let invalid = || EditorError::InvalidDimensions {
        width: other_dimension,
        height: new_dimension,
    };
    let old_dimension =
        usize::try_from(new_dimension as i64 - delta).map_err(|_conversion_error| invalid())?;
    let expected = other_dimension
        .checked_mul(old_dimension)
        .ok_or_else(invalid)?;
    let cell_count = other_dimension
        .checked_mul(new_dimension)
        .ok_or_else(invalid)?;
    if tiles.len() != expected {
        return Err(EditorError::SizeMismatch {
            expected,
            actual: tiles.len(),
        });
    }

    let offset = match side {
        AxisSide::Low => delta,
        AxisSide::High => 0,
    };

    // Map a destination cell to its source cell, if it had one
    let source_index = |index: usize| -> Option<usize> {
        let (along, across) = match axis {
            Axis::Rows => (index / other_dimension, index % other_dimension),
            Axis::Columns => (index % new_dimension, index / new_dimension),
        };
        let source = usize::try_from(along as i64 - offset).ok()?;
        if source >= old_dimension {
            return None;
        }
        Some(match axis {
            Axis::Rows => to_index(across, source, other_dimension),
            Axis::Columns => to_index(source, across, old_dimension),
        })
    };

    Ok((0..cell_count)
        .map(|index| {
            source_index(index)
                .and_then(|source| tiles.get(source))
                .unwrap_or(empty)
                .clone()
        })
        .collect())
}

/// Where content is pinned along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pin {
    Start,
    Centre,
    End,
}

impl From<VerticalAnchor> for Pin {
    fn from(anchor: VerticalAnchor) -> Self {
        match anchor {
            VerticalAnchor::Top => Self::Start,
            VerticalAnchor::Middle => Self::Centre,
            VerticalAnchor::Bottom => Self::End,
        }
    }
}

impl From<HorizontalAnchor> for Pin {
    fn from(anchor: HorizontalAnchor) -> Self {
        match anchor {
            HorizontalAnchor::Left => Self::Start,
            HorizontalAnchor::Centre => Self::Centre,
            HorizontalAnchor::Right => Self::End,
        }
    }
}

/// Split a centred change into `(low, high)` parts
///
/// The low end takes the larger half for both growth and shrinkage.
pub const fn split_delta(delta: i64) -> (i64, i64) {
    let magnitude = delta.abs();
    let low = (magnitude + 1) / 2;
    let high = magnitude / 2;
    if delta < 0 { (-low, -high) } else { (low, high) }
}

/// Grows and shrinks level grids around an anchor
#[derive(Clone, Debug)]
pub struct GridResizer {
    empty: Tile,
}

impl GridResizer {
    /// Create a resizer filling new cells with the codec's empty tile
    pub fn new(codec: &TileCodec) -> Self {
        Self {
            empty: codec.empty_tile(),
        }
    }

    /// Build a resized copy of `grid`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either new dimension is zero or the new
    /// cell count overflows
    pub fn resize(
        &self,
        grid: &LevelGrid,
        anchor: Anchor,
        new_width: usize,
        new_height: usize,
    ) -> Result<LevelGrid> {
        let tiles = self.resize_tiles(grid, anchor, new_width, new_height)?;
        LevelGrid::from_tiles(new_width, new_height, grid.sprite_sheet(), tiles)
    }

    /// Resize `grid` in place
    ///
    /// The new array is fully built before it replaces the old one, so on error
    /// the grid is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either new dimension is zero or the new
    /// cell count overflows
    pub fn resize_in_place(
        &self,
        grid: &mut LevelGrid,
        anchor: Anchor,
        new_width: usize,
        new_height: usize,
    ) -> Result<()> {
        let tiles = self.resize_tiles(grid, anchor, new_width, new_height)?;
        grid.replace_tiles(new_width, new_height, tiles)
    }

    fn resize_tiles(
        &self,
        grid: &LevelGrid,
        anchor: Anchor,
        new_width: usize,
        new_height: usize,
    ) -> Result<Vec<Tile>> {
        check_dimensions(new_width, new_height)?;

        let (old_width, old_height) = (grid.width(), grid.height());
        debug!(
            "resizing {old_width}x{old_height} grid to {new_width}x{new_height} anchored {anchor}"
        );

        let rows_resized = self.resize_along(
            Axis::Rows,
            anchor.vertical.into(),
            old_width,
            old_height,
            new_height,
            grid.tiles(),
        )?;
        self.resize_along(
            Axis::Columns,
            anchor.horizontal.into(),
            new_height,
            old_width,
            new_width,
            &rows_resized,
        )
    }

    fn resize_along(
        &self,
        axis: Axis,
        pin: Pin,
        other_dimension: usize,
        old_dimension: usize,
        new_dimension: usize,
        tiles: &[Tile],
    ) -> Result<Vec<Tile>> {
        let delta = new_dimension as i64 - old_dimension as i64;
        match pin {
            Pin::Start => resize_axis(
                axis,
                AxisSide::High,
                delta,
                other_dimension,
                new_dimension,
                tiles,
                &self.empty,
            ),
            Pin::End => resize_axis(
                axis,
                AxisSide::Low,
                delta,
                other_dimension,
                new_dimension,
                tiles,
                &self.empty,
            ),
            Pin::Centre => {
                let (low, high) = split_delta(delta);
                let intermediate = usize::try_from(old_dimension as i64 + low).map_err(
                    |_conversion_error| EditorError::InvalidDimensions {
                        width: other_dimension,
                        height: new_dimension,
                    },
                )?;
                let low_resized = resize_axis(
                    axis,
                    AxisSide::Low,
                    low,
                    other_dimension,
                    intermediate,
                    tiles,
                    &self.empty,
                )?;
                resize_axis(
                    axis,
                    AxisSide::High,
                    high,
                    other_dimension,
                    new_dimension,
                    &low_resized,
                    &self.empty,
                )
            }
        }
    }
}
