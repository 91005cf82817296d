//! Error types for hookman-git

use std::path::PathBuf;

/// Result type for hookman-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hookman-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] hookman_fs::Error),

    #[error("Not inside a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Repository at {path} has no working tree")]
    BareRepository { path: PathBuf },
}
