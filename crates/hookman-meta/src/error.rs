//! Error types for hookman-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] hookman_fs::Error),

    #[error("No .pre-commit-config.yaml found in {start} or its parents")]
    ConfigNotFound { start: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Configuration at {path} is empty; a `repos` list is required")]
    EmptyConfig { path: PathBuf },

    #[error("Configuration at {path} uses the legacy top-level list format; run `hookman migrate`")]
    LegacyFormat { path: PathBuf },

    #[error("Config file too large: {path} is {size} bytes (max {max})")]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Invalid hook manifest at {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error("Invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid version {version:?}: {message}")]
    InvalidVersion { version: String, message: String },
}
