//! Git hook stages a hook can be bound to

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A git hook type (or `manual`) that a hook runs at.
///
/// The pre-3.0 names `commit`, `push` and `merge-commit` are accepted
/// on input and map to their `pre-*` equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    CommitMsg,
    PostCheckout,
    PostCommit,
    PostMerge,
    PostRewrite,
    #[serde(alias = "commit")]
    PreCommit,
    #[serde(alias = "merge-commit")]
    PreMergeCommit,
    #[serde(alias = "push")]
    PrePush,
    PreRebase,
    PrepareCommitMsg,
    Manual,
}

impl Stage {
    /// Every stage in declaration order.
    pub const ALL: [Stage; 11] = [
        Stage::CommitMsg,
        Stage::PostCheckout,
        Stage::PostCommit,
        Stage::PostMerge,
        Stage::PostRewrite,
        Stage::PreCommit,
        Stage::PreMergeCommit,
        Stage::PrePush,
        Stage::PreRebase,
        Stage::PrepareCommitMsg,
        Stage::Manual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommitMsg => "commit-msg",
            Self::PostCheckout => "post-checkout",
            Self::PostCommit => "post-commit",
            Self::PostMerge => "post-merge",
            Self::PostRewrite => "post-rewrite",
            Self::PreCommit => "pre-commit",
            Self::PreMergeCommit => "pre-merge-commit",
            Self::PrePush => "pre-push",
            Self::PreRebase => "pre-rebase",
            Self::PrepareCommitMsg => "prepare-commit-msg",
            Self::Manual => "manual",
        }
    }

    /// Modern name for a legacy stage spelling, if `name` is one.
    pub fn legacy_replacement(name: &str) -> Option<&'static str> {
        match name {
            "commit" => Some("pre-commit"),
            "push" => Some("pre-push"),
            "merge-commit" => Some("pre-merge-commit"),
            _ => None,
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = Self::legacy_replacement(s).unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == name)
            .ok_or_else(|| format!("unknown stage '{s}'"))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
