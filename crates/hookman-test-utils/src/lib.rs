//! Shared test utilities for the hookman workspace.
//!
//! Dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures
//! - [`repo`]: [`repo::TestRepo`] builder for a project with a hook configuration

pub mod git;
pub mod repo;

/// A small but realistic configuration used across test suites.
pub const SAMPLE_CONFIG: &str = r#"exclude: ^vendor/
repos:
-   repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
    -   id: check-yaml
        files: \.ya?ml$
    -   id: end-of-file-fixer
        exclude: ^docs/
-   repo: https://github.com/psf/black
    rev: 23.9.1
    hooks:
    -   id: black
        types: [python]
"#;
