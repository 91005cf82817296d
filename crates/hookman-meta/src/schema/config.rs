//! Configuration schema - loaded from `.pre-commit-config.yaml`
//!
//! # Example YAML
//!
//! ```yaml
//! exclude: ^vendor/
//! repos:
//! -   repo: https://github.com/psf/black
//!     rev: 23.9.1
//!     hooks:
//!     -   id: black
//!         args: [--target-version, py311]
//! -   repo: local
//!     hooks:
//!     -   id: no-todo
//!         name: forbid TODO
//!         entry: TODO
//!         language: pygrep
//! ```
//!
//! Keys that are not part of the schema are kept in the `extra` maps so
//! validation can report them instead of failing the load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::record::HookRecord;
use super::stage::Stage;

/// Sentinel `repo` value for hooks defined inline in the configuration.
pub const LOCAL_REPO: &str = "local";
/// Sentinel `repo` value for the framework's built-in hooks.
pub const META_REPO: &str = "meta";

/// A complete hook configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Repository entries in declaration order
    pub repos: Vec<RepoEntry>,
    /// Pattern of paths every hook skips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Pattern of paths every hook is limited to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// Stop after the first failing hook
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fail_fast: bool,
    /// Stages used by hooks that do not declare their own
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_stages: Vec<Stage>,
    /// Git hook types installed when none are requested explicitly
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_install_hook_types: Vec<Stage>,
    /// Language -> toolchain version used by hooks of that language
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_language_version: BTreeMap<String, String>,
    /// Oldest framework version able to read this configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_pre_commit_version: Option<String>,
    /// Settings for hosted CI services; carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci: Option<Value>,
    /// Keys not recognised by the schema
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Config {
    /// Flattened view of every hook, in declaration order.
    pub fn hook_records(&self) -> Vec<HookRecord> {
        self.repos
            .iter()
            .flat_map(|repo| {
                repo.hooks
                    .iter()
                    .map(move |hook| HookRecord::new(self, repo, hook))
            })
            .collect()
    }

    /// Every hook whose id or alias equals `name`.
    pub fn find_hooks(&self, name: &str) -> Vec<HookRecord> {
        self.hook_records()
            .into_iter()
            .filter(|record| record.id == name || record.alias.as_deref() == Some(name))
            .collect()
    }

    /// Total number of hook entries across all repositories.
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|repo| repo.hooks.len()).sum()
    }
}

/// Where a repository entry's hooks come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoSource<'a> {
    /// A tool repository fetched from `url`
    Remote { url: &'a str },
    /// Hooks defined inline (`repo: local`)
    Local,
    /// Framework built-ins (`repo: meta`)
    Meta,
}

/// One entry of the top-level `repos` list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RepoEntry {
    /// Tool repository URL, or `local` / `meta`
    pub repo: String,
    /// Pinned revision (tag or commit) of a remote repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    /// Hooks enabled from this repository
    pub hooks: Vec<HookEntry>,
    /// Keys not recognised by the schema
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RepoEntry {
    /// Classify the entry by its `repo` value.
    pub fn source(&self) -> RepoSource<'_> {
        match self.repo.as_str() {
            LOCAL_REPO => RepoSource::Local,
            META_REPO => RepoSource::Meta,
            url => RepoSource::Remote { url },
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.source(), RepoSource::Remote { .. })
    }
}

/// A hook enabled from a repository entry.
///
/// For remote repositories only `id` is required and every other field
/// overrides the tool's own manifest. Local hooks must also provide
/// `name`, `entry` and `language`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct HookEntry {
    /// Hook identifier exposed by the repository
    pub id: String,
    /// Alternate id used to select this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,
    /// Pattern of paths this hook is limited to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// Pattern of paths this hook skips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// File type tags that must all apply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    /// File type tags of which at least one must apply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types_or: Vec<String>,
    /// File type tags that disqualify a file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_types: Vec<String>,
    /// Extra arguments passed to the tool
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<Stage>,
    /// Packages installed into the hook's environment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_filenames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_serial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_pre_commit_version: Option<String>,
    /// Keys not recognised by the schema
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
