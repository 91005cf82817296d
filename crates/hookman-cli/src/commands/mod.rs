//! Command implementations for hookman-cli

pub mod audit;
pub mod completions;
pub mod files;
pub mod list;
pub mod manifest;
pub mod migrate;
pub mod sample;
pub mod show;
pub mod validate;

pub use audit::run_audit;
pub use completions::run_completions;
pub use files::run_files;
pub use list::run_list;
pub use manifest::run_validate_manifest;
pub use migrate::run_migrate;
pub use sample::run_sample_config;
pub use show::run_show;
pub use validate::run_validate;
