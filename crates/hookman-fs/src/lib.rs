//! Filesystem helpers for hookman
//!
//! Provides forward-slash path handling, safe text I/O and
//! format-agnostic loading of YAML, JSON and TOML documents.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigStore, Format};
pub use constants::HookPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
