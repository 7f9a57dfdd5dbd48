use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of grid cells addressed by flat index
///
/// Used as the per-call visited set of region fills. Indices past the end of
/// the set are never members.
#[derive(Clone, Debug)]
pub struct CellBitset {
    bits: BitVec,
}

impl CellBitset {
    /// Create a set over `cell_count` cells with none present
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
        }
    }

    /// Number of cells the set can address
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a cell, returning whether it was newly added
    pub fn insert(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(mut bit) if !*bit => {
                bit.set(true);
                true
            }
            _ => false,
        }
    }

    /// Test cell membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Extract all member indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CellBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellBitset({} cells: {:?})", self.count(), self.to_vec())
    }
}
