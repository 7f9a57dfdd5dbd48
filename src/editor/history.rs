//! Snapshot-based undo and redo

use log::{debug, trace, warn};

use crate::spatial::grid::TileSnapshot;

/// Undo and redo stacks of whole tile-array snapshots
///
/// Holds independent copies, never references into the live grid. The undo
/// stack is bounded; committing past the limit evicts the oldest snapshot.
#[derive(Clone, Debug)]
pub struct EditHistory {
    undo: Vec<TileSnapshot>,
    redo: Vec<TileSnapshot>,
    limit: usize,
}

impl EditHistory {
    /// Create an empty history keeping at most `limit` undo snapshots
    pub const fn new(limit: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Record the state before an edit; clears the redo stack
    pub fn commit(&mut self, pre_edit: TileSnapshot) {
        self.undo.push(pre_edit);
        self.redo.clear();

        if self.undo.len() > self.limit {
            let excess = self.undo.len() - self.limit;
            self.undo.drain(..excess);
            warn!("undo history limit {} reached, dropped {excess} snapshot(s)", self.limit);
        }
        trace!("edit committed ({} undo)", self.undo.len());
    }

    /// Step back one edit
    ///
    /// Pushes `current` onto the redo stack and returns the snapshot to
    /// restore. Returns `None` without touching either stack if there is
    /// nothing to undo.
    pub fn undo(&mut self, current: TileSnapshot) -> Option<TileSnapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        trace!("undo ({} undo, {} redo)", self.undo.len(), self.redo.len());
        Some(previous)
    }

    /// Step forward one undone edit
    ///
    /// Pushes `current` onto the undo stack and returns the snapshot to
    /// restore. Returns `None` without touching either stack if there is
    /// nothing to redo.
    pub fn redo(&mut self, current: TileSnapshot) -> Option<TileSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        trace!("redo ({} undo, {} redo)", self.undo.len(), self.redo.len());
        Some(next)
    }

    /// Empty both stacks
    pub fn clear(&mut self) {
        if self.can_undo() || self.can_redo() {
            debug!("history cleared ({} undo, {} redo)", self.undo.len(), self.redo.len());
        }
        self.undo.clear();
        self.redo.clear();
    }

    /// Test whether an undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Test whether a redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of snapshots on the undo stack
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of snapshots on the redo stack
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Maximum number of undo snapshots kept
    pub const fn limit(&self) -> usize {
        self.limit
    }
}
