//! Loading hook configurations and hook manifests from disk
//!
//! ```text
//! project/
//!   .git/
//!   .pre-commit-config.yaml   <- discover_config() finds this from any subdirectory
//!   src/
//! ```

use hookman_fs::{ConfigStore, Format, HookPath, NormalizedPath, io};
use serde_yaml::Value;

use crate::schema::{Config, ManifestHook};
use crate::{Error, Result};

/// Largest configuration or manifest file accepted, in bytes.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Read and parse a configuration file.
///
/// Malformed YAML is reported before any schema checks run.
pub fn load_config(path: &NormalizedPath) -> Result<Config> {
    let content = read_bounded(path)?;
    tracing::debug!(path = %path, bytes = content.len(), "Loading hook configuration");
    parse_config(&content, path)
}

/// Parse configuration text; `origin` names the source in errors.
pub fn parse_config(content: &str, origin: &NormalizedPath) -> Result<Config> {
    if is_blank_document(content) {
        return Err(Error::EmptyConfig {
            path: origin.to_native(),
        });
    }

    let document: Value = ConfigStore::new().load_str(content, Format::Yaml, origin)?;

    match document {
        Value::Null => Err(Error::EmptyConfig {
            path: origin.to_native(),
        }),
        Value::Sequence(_) => Err(Error::LegacyFormat {
            path: origin.to_native(),
        }),
        Value::Mapping(_) => serde_yaml::from_value(document).map_err(|e| Error::InvalidConfig {
            path: origin.to_native(),
            message: e.to_string(),
        }),
        _ => Err(Error::InvalidConfig {
            path: origin.to_native(),
            message: "expected a mapping at the top level".to_string(),
        }),
    }
}

/// Find the configuration file for `start`.
///
/// Checks `start` and each ancestor for `.pre-commit-config.yaml`, then
/// `.pre-commit-config.yml`. The search stops at the first directory that
/// contains `.git`.
pub fn discover_config(start: &NormalizedPath) -> Result<NormalizedPath> {
    let mut current = Some(start.clone());

    while let Some(dir) = current {
        for candidate in HookPath::config_candidates() {
            let path = dir.join(candidate.as_str());
            if path.is_file() {
                tracing::debug!(path = %path, "Discovered hook configuration");
                return Ok(path);
            }
        }

        if dir.join(HookPath::GitDir.as_str()).exists() {
            break;
        }
        current = dir.parent();
    }

    Err(Error::ConfigNotFound {
        start: start.to_native(),
    })
}

/// Read and parse a hook manifest (`.pre-commit-hooks.yaml`).
pub fn load_manifest(path: &NormalizedPath) -> Result<Vec<ManifestHook>> {
    let content = read_bounded(path)?;
    tracing::debug!(path = %path, "Loading hook manifest");
    parse_manifest(&content, path)
}

/// Parse manifest text; the document must be a list of hook definitions.
pub fn parse_manifest(content: &str, origin: &NormalizedPath) -> Result<Vec<ManifestHook>> {
    let document: Value = ConfigStore::new().load_str(content, Format::Yaml, origin)?;

    match document {
        Value::Sequence(_) => {
            serde_yaml::from_value(document).map_err(|e| Error::InvalidManifest {
                path: origin.to_native(),
                message: e.to_string(),
            })
        }
        _ => Err(Error::InvalidManifest {
            path: origin.to_native(),
            message: "expected a list of hook definitions".to_string(),
        }),
    }
}

/// True when the text holds nothing but blank lines, comments and document markers.
fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn read_bounded(path: &NormalizedPath) -> Result<String> {
    let size = io::file_size(path)?;
    if size > MAX_CONFIG_SIZE {
        return Err(Error::ConfigTooLarge {
            path: path.to_native(),
            size,
            max: MAX_CONFIG_SIZE,
        });
    }
    Ok(io::read_text(path)?)
}
