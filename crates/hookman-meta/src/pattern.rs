//! Regular expression patterns used by `files` and `exclude`
//!
//! Patterns are matched with search semantics: a path matches when the
//! expression matches anywhere in its forward-slash relative form, so
//! `\.py$` selects every Python file and `^docs/` anchors to the root.

use std::fmt;

use regex::Regex;

use crate::{Error, Result};

/// Global `exclude` used when the configuration does not set one.
pub const DEFAULT_EXCLUDE: &str = "^$";
/// Global and per-hook `files` used when none is set; matches everything.
pub const DEFAULT_FILES: &str = "";

/// A compiled `files` / `exclude` pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern.
    ///
    /// The Python-flavoured end-of-text anchor `\Z` is accepted as an
    /// alias of `\z`. Look-around and backreferences are not supported.
    pub fn compile(source: &str) -> Result<Self> {
        let translated = translate_anchors(source);
        let regex = Regex::new(&translated).map_err(|e| Error::InvalidPattern {
            pattern: source.to_string(),
            message: error_reason(&e.to_string()),
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Compile `source`, or `default` when the field is unset.
    pub fn compile_or(source: Option<&str>, default: &str) -> Result<Self> {
        Self::compile(source.unwrap_or(default))
    }

    /// The pattern as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Whether this is the match-only-the-empty-path default exclude.
    pub fn is_default_exclude(&self) -> bool {
        self.source == DEFAULT_EXCLUDE
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Rewrite unescaped `\Z` to `\z`.
fn translate_anchors(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('Z') => out.push_str("\\z"),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// The regex crate renders multi-line errors with a caret diagram; the
/// last line holds the actual reason.
fn error_reason(message: &str) -> String {
    message
        .lines()
        .rev()
        .find(|line| line.trim_start().starts_with("error:"))
        .map(|line| line.trim_start().trim_start_matches("error:").trim().to_string())
        .unwrap_or_else(|| message.trim().to_string())
}
