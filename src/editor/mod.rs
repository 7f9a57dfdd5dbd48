//! Editor-facing state built on the spatial and algorithm layers

/// Named levels with a current-level cursor
pub mod collection;
/// Snapshot undo and redo stacks
pub mod history;
/// Editing session driven by a GUI shell
pub mod session;
