//! Error types for deck file operations.

use thiserror::Error;

/// Errors that can occur when saving a deck to a file.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The file could not be created or written.
    #[error("failed to write deck file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading a deck from a file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),
}
