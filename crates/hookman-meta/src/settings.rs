//! Settings for hookman itself, read from `hookman.toml`
//!
//! ```toml
//! # Path of the hook configuration, relative to this file
//! config = "ci/pre-commit.yaml"
//! # Treat warnings as failures in `hookman validate`
//! strict = true
//! # Framework version that minimum_pre_commit_version is checked against
//! framework_version = "3.6.0"
//! ```

use hookman_fs::{ConfigStore, HookPath, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Contents of `hookman.toml`; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_version: Option<String>,
}

impl Settings {
    /// Load `hookman.toml` from `root`, or defaults when the file is absent.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(HookPath::Settings.as_str());
        if !path.is_file() {
            return Ok(Self::default());
        }

        tracing::debug!(path = %path, "Loading hookman settings");
        Ok(ConfigStore::new().load(&path)?)
    }

    /// Configured hook configuration path resolved against `root`.
    pub fn config_path(&self, root: &NormalizedPath) -> Option<NormalizedPath> {
        self.config.as_deref().map(|config| {
            if std::path::Path::new(config).is_absolute() {
                NormalizedPath::new(config)
            } else {
                root.join(config)
            }
        })
    }
}
