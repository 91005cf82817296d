//! Flattened, read-only view of a single enabled hook

use serde::Serialize;

use super::config::{Config, HookEntry, RepoEntry, RepoSource};
use super::stage::Stage;

/// One hook together with the repository it comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookRecord {
    /// Tool name derived from the repository URL
    pub tool: String,
    /// Repository URL, or `local` / `meta`
    pub repo: String,
    /// Pinned revision, absent for `local` and `meta`
    pub rev: Option<String>,
    pub id: String,
    pub alias: Option<String>,
    pub name: Option<String>,
    pub args: Vec<String>,
    pub files: Option<String>,
    pub exclude: Option<String>,
    pub additional_dependencies: Vec<String>,
    /// Effective stages; empty means every stage
    pub stages: Vec<Stage>,
    pub always_run: bool,
}

impl HookRecord {
    pub(crate) fn new(config: &Config, repo: &RepoEntry, hook: &HookEntry) -> Self {
        let stages = if hook.stages.is_empty() {
            config.default_stages.clone()
        } else {
            hook.stages.clone()
        };

        Self {
            tool: tool_name(repo),
            repo: repo.repo.clone(),
            rev: repo.rev.clone(),
            id: hook.id.clone(),
            alias: hook.alias.clone(),
            name: hook.name.clone(),
            args: hook.args.clone(),
            files: hook.files.clone(),
            exclude: hook.exclude.clone(),
            additional_dependencies: hook.additional_dependencies.clone(),
            stages,
            always_run: hook.always_run.unwrap_or(false),
        }
    }

    /// Name shown to users: the alias when set, otherwise the id.
    pub fn display_id(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.id)
    }

    /// Whether the hook runs at `stage`.
    pub fn runs_at(&self, stage: Stage) -> bool {
        self.stages.is_empty() || self.stages.contains(&stage)
    }
}

/// Derive a tool name from a repository entry.
///
/// Remote URLs use their last path segment without a `.git` suffix, so
/// `https://github.com/psf/black` and `git@github.com:psf/black.git` both
/// yield `black`. The sentinel repositories keep their own names.
pub fn tool_name(repo: &RepoEntry) -> String {
    match repo.source() {
        RepoSource::Local => "local".to_string(),
        RepoSource::Meta => "meta".to_string(),
        RepoSource::Remote { url } => {
            let trimmed = url.trim().trim_end_matches('/');
            let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
            let segment = trimmed
                .rsplit(['/', ':'])
                .next()
                .filter(|s| !s.is_empty())
                .unwrap_or(trimmed);
            segment.to_string()
        }
    }
}
