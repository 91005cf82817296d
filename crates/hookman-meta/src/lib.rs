//! Hook configuration schema, loading and validation for hookman.
//!
//! This crate turns a `.pre-commit-config.yaml` into typed records,
//! reports structural problems as diagnostics, and answers static
//! questions such as which files a hook would receive.

pub mod error;
pub mod loader;
pub mod migrate;
pub mod pattern;
pub mod schema;
pub mod selection;
pub mod settings;
pub mod tags;
pub mod validation;
pub mod version;

pub use error::{Error, Result};
pub use loader::{discover_config, load_config, load_manifest, parse_config, parse_manifest};
pub use migrate::{Migration, migrate_config};
pub use pattern::Pattern;
pub use schema::{Config, HookEntry, HookRecord, ManifestHook, RepoEntry, RepoSource, Stage};
pub use selection::{
    FileFilter, HookSelection, Selection, UselessExclude, hooks_without_files, select,
    useless_excludes,
};
pub use settings::Settings;
pub use validation::{Diagnostic, Report, Severity, Validator, validate, validate_manifest};
