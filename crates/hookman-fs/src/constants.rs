//! Well-known file names around a hook configuration.

use std::path::Path;

/// File and directory names hookman looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPath {
    /// `.pre-commit-config.yaml`, the hook configuration
    Config,
    /// `.pre-commit-config.yml`, accepted as a fallback spelling
    ConfigAlt,
    /// `.pre-commit-hooks.yaml`, the hook manifest published by a tool repository
    Manifest,
    /// The `.git` directory
    GitDir,
    /// `hookman.toml`, settings for hookman itself
    Settings,
}

impl HookPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => ".pre-commit-config.yaml",
            Self::ConfigAlt => ".pre-commit-config.yml",
            Self::Manifest => ".pre-commit-hooks.yaml",
            Self::GitDir => ".git",
            Self::Settings => "hookman.toml",
        }
    }

    /// Configuration file names in lookup order.
    pub fn config_candidates() -> [HookPath; 2] {
        [Self::Config, Self::ConfigAlt]
    }
}

impl AsRef<Path> for HookPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for HookPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for HookPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
