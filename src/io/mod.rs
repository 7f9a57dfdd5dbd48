//! Errors, configuration and the persisted level format

/// Editor constants and runtime configuration
pub mod configuration;
/// Error types and result alias
pub mod error;
/// JSON level documents
pub mod level_file;
