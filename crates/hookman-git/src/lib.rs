//! Git access for hookman
//!
//! Lists the files of a repository that hook selection runs against.

pub mod error;
pub mod files;

pub use error::{Error, Result};
pub use files::{find_repo_root, staged_files, tracked_files};
