//! Rewrite legacy configurations into the current format
//!
//! Migration works on the text so comments and layout survive:
//!
//! 1. A top-level list of repositories is nested under `repos:`.
//! 2. The `sha:` key of a repository entry is renamed to `rev:`.
//! 3. Stage names `commit`, `push` and `merge-commit` become
//!    `pre-commit`, `pre-push` and `pre-merge-commit`.
//!
//! Every step is a no-op on already-migrated text.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_yaml::Value;

use crate::schema::Stage;

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)(-\s+)\S").unwrap());

static REPOS_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^repos:\s*(?:#.*)?$").unwrap());

static FLOW_STAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\s*(?:-\s+)?(?:default_)?stages:\s*)\[([^\]\n]*)\]")
        .unwrap()
});

static BLOCK_STAGES_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(?:-\s+)?(?:default_)?stages:\s*(?:#.*)?$").unwrap()
});

static BLOCK_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*-\s+)(['\x22]?)([a-z-]+)(['\x22]?)(\s*(?:#.*)?)$").unwrap()
});

/// Result of migrating a configuration's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    pub content: String,
    /// Whether any rewrite was applied
    pub changed: bool,
}

/// Migrate configuration text to the current format.
pub fn migrate_config(content: &str) -> Migration {
    let mut migrated = migrate_top_level_list(content);
    migrated = migrate_sha_to_rev(&migrated);
    migrated = migrate_flow_stages(&migrated);
    migrated = migrate_block_stages(&migrated);

    let changed = migrated != content;
    if changed {
        tracing::debug!("Migrated legacy configuration format");
    }
    Migration {
        content: migrated,
        changed,
    }
}

fn is_header_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed == "---"
}

fn migrate_top_level_list(content: &str) -> String {
    if !matches!(serde_yaml::from_str::<Value>(content), Ok(Value::Sequence(_))) {
        return content.to_string();
    }

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let split = lines
        .iter()
        .position(|line| !is_header_line(line))
        .unwrap_or(lines.len());
    let header: String = lines[..split].concat();
    let rest: String = lines[split..].concat();

    // A block list at column 0 is already a valid value for a mapping key
    let unindented = format!("{header}repos:\n{rest}");
    if matches!(serde_yaml::from_str::<Value>(&unindented), Ok(Value::Mapping(_))) {
        return unindented;
    }

    let indented: String = rest
        .split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("    {line}")
            }
        })
        .collect();
    format!("{header}repos:\n{indented}")
}

/// Rename `sha:` only where it is a key of a `repos` entry.
///
/// Repository keys sit at one column: the first key after the item's `-`
/// and every following line at that same indentation. Deeper lines (hooks,
/// block scalar bodies) are left alone.
fn migrate_sha_to_rev(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_repos = false;
    let mut item_indent: Option<usize> = None;
    let mut key_indent: Option<usize> = None;

    for line in content.split_inclusive('\n') {
        let body = line.trim_end_matches(['\n', '\r']);
        let trimmed = body.trim_start();
        let indent = body.len() - trimmed.len();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            out.push_str(line);
            continue;
        }

        if indent == 0 && !trimmed.starts_with('-') {
            in_repos = REPOS_KEY.is_match(body);
            item_indent = None;
            key_indent = None;
            out.push_str(line);
            continue;
        }

        if !in_repos || item_indent.is_some_and(|item| indent < item) {
            in_repos = false;
            out.push_str(line);
            continue;
        }

        let mut is_key_line = key_indent == Some(indent);
        if let Some(caps) = LIST_ITEM.captures(body)
            && item_indent.is_none_or(|item| item == indent)
        {
            item_indent = Some(indent);
            key_indent = Some(indent + caps[2].len());
            is_key_line = true;
        }

        match key_indent {
            Some(column) if is_key_line && body[column..].starts_with("sha:") => {
                out.push_str(&line[..column]);
                out.push_str("rev:");
                out.push_str(&line[column + "sha:".len()..]);
            }
            _ => out.push_str(line),
        }
    }

    out
}

fn migrate_flow_stages(content: &str) -> String {
    FLOW_STAGES
        .replace_all(content, |caps: &Captures| {
            let items: Vec<String> = caps[2]
                .split(',')
                .map(|item| rename_stage_token(item))
                .collect();
            format!("{}[{}]", &caps[1], items.join(","))
        })
        .into_owned()
}

fn migrate_block_stages(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut stages_indent: Option<usize> = None;

    for line in content.split_inclusive('\n') {
        let body = line.trim_end_matches(['\n', '\r']);
        let ending = &line[body.len()..];

        if let Some(caps) = BLOCK_STAGES_KEY.captures(body) {
            stages_indent = Some(caps[1].len());
            out.push_str(line);
            continue;
        }

        if let Some(indent) = stages_indent {
            let line_indent = body.len() - body.trim_start().len();
            if let Some(caps) = BLOCK_ITEM.captures(body)
                && line_indent >= indent
            {
                let name = &caps[3];
                let renamed = Stage::legacy_replacement(name).unwrap_or(name);
                out.push_str(&format!(
                    "{}{}{}{}{}{}",
                    &caps[1], &caps[2], renamed, &caps[4], &caps[5], ending
                ));
                continue;
            }
            if !body.trim().is_empty() {
                stages_indent = None;
            }
        }

        out.push_str(line);
    }

    out
}

/// Rename one flow-list item, keeping surrounding whitespace and quotes.
fn rename_stage_token(item: &str) -> String {
    let trimmed = item.trim();
    let (quote, bare) = match trimmed.chars().next() {
        Some(q @ ('\'' | '"')) if trimmed.len() >= 2 && trimmed.ends_with(q) => {
            (Some(q), &trimmed[1..trimmed.len() - 1])
        }
        _ => (None, trimmed),
    };

    let Some(replacement) = Stage::legacy_replacement(bare) else {
        return item.to_string();
    };

    let leading = &item[..item.len() - item.trim_start().len()];
    let trailing = &item[item.trim_end().len()..];
    match quote {
        Some(q) => format!("{leading}{q}{replacement}{q}{trailing}"),
        None => format!("{leading}{replacement}{trailing}"),
    }
}
