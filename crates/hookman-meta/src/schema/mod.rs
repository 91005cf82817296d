//! Schema definitions for hook configurations and hook manifests
//!
//! - `.pre-commit-config.yaml` - [`Config`], the repositories and hooks a project enables
//! - `.pre-commit-hooks.yaml` - [`ManifestHook`] list, the hooks a tool repository exposes

pub mod config;
pub mod manifest;
pub mod record;
pub mod stage;

pub use config::{Config, HookEntry, RepoEntry, RepoSource};
pub use manifest::ManifestHook;
pub use record::{HookRecord, tool_name};
pub use stage::Stage;
