//! Hook manifest schema - loaded from a tool repository's `.pre-commit-hooks.yaml`
//!
//! # Example YAML
//!
//! ```yaml
//! -   id: black
//!     name: black
//!     entry: black
//!     language: python
//!     types_or: [python, pyi]
//!     require_serial: true
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::stage::Stage;

/// A hook definition published by a tool repository.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManifestHook {
    pub id: String,
    pub name: String,
    /// Command the framework executes
    pub entry: String,
    /// Environment the hook is installed into (python, node, system, ...)
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types_or: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<Stage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_filenames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_serial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_pre_commit_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
