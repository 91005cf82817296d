//! Error types for hookman-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from hookman-meta
    #[error(transparent)]
    Meta(#[from] hookman_meta::Error),

    /// Error from hookman-fs
    #[error(transparent)]
    Fs(#[from] hookman_fs::Error),

    /// Error from hookman-git
    #[error(transparent)]
    Git(#[from] hookman_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Validation reported failures
    #[error("validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },

    /// Audit found problems
    #[error("audit found {count} problem(s)")]
    AuditFailed { count: usize },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
