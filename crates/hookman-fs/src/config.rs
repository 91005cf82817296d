//! Format-agnostic document loading and saving

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Serialization formats understood by [`ConfigStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Detect the format of a path from its extension.
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        Self::from_extension(path.extension().unwrap_or(""))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

/// Format-agnostic configuration store.
///
/// Automatically detects format from file extension and handles
/// serialization/deserialization transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load a document from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = Format::from_path(path)?;
        let content = io::read_text(path)?;
        self.load_str(&content, format, path)
    }

    /// Parse an in-memory document; `origin` is only used for error reporting.
    pub fn load_str<T: DeserializeOwned>(
        &self,
        content: &str,
        format: Format,
        origin: &NormalizedPath,
    ) -> Result<T> {
        let parse_error = |message: String| Error::ConfigParse {
            path: origin.to_native(),
            format: format.to_string(),
            message,
        };

        match format {
            Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Serialize a value to a string in the given format.
    pub fn to_string<T: Serialize>(
        &self,
        value: &T,
        format: Format,
        origin: &NormalizedPath,
    ) -> Result<String> {
        let serialize_error = |message: String| Error::ConfigSerialize {
            path: origin.to_native(),
            format: format.to_string(),
            message,
        };

        match format {
            Format::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))
            }
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))
            }
            Format::Yaml => serde_yaml::to_string(value).map_err(|e| serialize_error(e.to_string())),
        }
    }

    /// Save a document to a file.
    ///
    /// Format is determined from file extension.
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = Format::from_path(path)?;
        let content = self.to_string(value, format, path)?;
        io::write_atomic(path, content.as_bytes())
    }
}
