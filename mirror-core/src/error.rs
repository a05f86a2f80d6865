//! Error types for branch mirroring

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for mirror operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for mirror operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reported by libgit2
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Cloning a repository failed
    #[error("Failed to clone {url} into {}", path.display())]
    Clone {
        /// Remote URL being cloned
        url: String,
        /// Destination directory
        path: PathBuf,
        /// Underlying git error
        source: git2::Error,
    },

    /// The named remote is not configured on the repository
    #[error("Remote '{0}' not found")]
    RemoteNotFound(String),

    /// No remote reference matched the requested name
    #[error("Reference '{0}' not found on remote")]
    ReferenceNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
