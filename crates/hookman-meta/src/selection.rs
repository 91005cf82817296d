//! Static file selection: which files each hook would receive
//!
//! A path reaches a hook when it passes the configuration's global
//! `files`/`exclude` and then the hook's own `files`, `exclude`, `types`,
//! `types_or` and `exclude_types`. Only overrides present in the
//! configuration are applied; a remote hook's manifest defaults are not
//! fetched, so such hooks see every file the global filter lets through.

use hookman_fs::{HookPath, NormalizedPath};
use serde::Serialize;

use crate::Result;
use crate::pattern::{DEFAULT_EXCLUDE, DEFAULT_FILES, Pattern};
use crate::schema::{Config, HookEntry, HookRecord, RepoEntry, RepoSource};
use crate::tags::tags_for_path;

/// Compiled include/exclude patterns plus type tag constraints.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: Pattern,
    exclude: Pattern,
    types: Vec<String>,
    types_or: Vec<String>,
    exclude_types: Vec<String>,
}

impl FileFilter {
    /// The configuration-wide filter.
    pub fn global(config: &Config) -> Result<Self> {
        Ok(Self {
            include: Pattern::compile_or(config.files.as_deref(), DEFAULT_FILES)?,
            exclude: Pattern::compile_or(config.exclude.as_deref(), DEFAULT_EXCLUDE)?,
            types: Vec::new(),
            types_or: Vec::new(),
            exclude_types: Vec::new(),
        })
    }

    /// The filter a single hook applies after the global one.
    pub fn for_hook(hook: &HookEntry) -> Result<Self> {
        Ok(Self {
            include: Pattern::compile_or(hook.files.as_deref(), DEFAULT_FILES)?,
            exclude: Pattern::compile_or(hook.exclude.as_deref(), DEFAULT_EXCLUDE)?,
            types: hook.types.clone(),
            types_or: hook.types_or.clone(),
            exclude_types: hook.exclude_types.clone(),
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path) && self.matches_types(path)
    }

    /// Include pattern and type tags only; the exclude pattern is ignored.
    fn matches_ignoring_exclude(&self, path: &str) -> bool {
        self.include.is_match(path) && self.matches_types(path)
    }

    fn matches_types(&self, path: &str) -> bool {
        if self.types.is_empty() && self.types_or.is_empty() && self.exclude_types.is_empty() {
            return true;
        }

        let tags = tags_for_path(path);
        self.types.iter().all(|t| tags.contains(t.as_str()))
            && (self.types_or.is_empty() || self.types_or.iter().any(|t| tags.contains(t.as_str())))
            && !self.exclude_types.iter().any(|t| tags.contains(t.as_str()))
    }
}

/// Files selected for one hook
#[derive(Debug, Clone, Serialize)]
pub struct HookSelection {
    pub hook: HookRecord,
    pub files: Vec<NormalizedPath>,
}

impl HookSelection {
    /// Whether the hook would run: it has files or always runs.
    pub fn would_run(&self) -> bool {
        self.hook.always_run || !self.files.is_empty()
    }
}

/// Selection for every hook in a configuration, in declaration order
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub hooks: Vec<HookSelection>,
}

impl Selection {
    /// Hooks that would receive `path`.
    pub fn hooks_for(&self, path: &NormalizedPath) -> Vec<&HookRecord> {
        self.hooks
            .iter()
            .filter(|selection| selection.files.contains(path))
            .map(|selection| &selection.hook)
            .collect()
    }
}

/// An exclude pattern that matches none of the candidate files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UselessExclude {
    /// `exclude` or `repos[i].hooks[j].exclude`
    pub location: String,
    pub pattern: String,
    /// Hook id, absent for the global exclude
    pub hook: Option<String>,
}

/// Filter for a hook as declared in `repo`.
///
/// The framework restricts the `check-hooks-apply` and
/// `check-useless-excludes` meta hooks to the configuration file unless the
/// entry sets its own `files`.
fn hook_filter(repo: &RepoEntry, hook: &HookEntry) -> Result<FileFilter> {
    let mut filter = FileFilter::for_hook(hook)?;
    if matches!(repo.source(), RepoSource::Meta)
        && hook.files.is_none()
        && matches!(hook.id.as_str(), "check-hooks-apply" | "check-useless-excludes")
    {
        let config_file = format!("^{}$", regex::escape(HookPath::Config.as_str()));
        filter.include = Pattern::compile(&config_file)?;
    }
    Ok(filter)
}

/// Compute the files each hook would receive from `paths`.
///
/// `paths` are relative to the repository root.
pub fn select(config: &Config, paths: &[NormalizedPath]) -> Result<Selection> {
    let global = FileFilter::global(config)?;
    let candidates: Vec<&NormalizedPath> = paths
        .iter()
        .filter(|path| global.matches(path.as_str()))
        .collect();

    let mut hooks = Vec::with_capacity(config.hook_count());
    for repo in &config.repos {
        for hook in &repo.hooks {
            let filter = hook_filter(repo, hook)?;
            let files = candidates
                .iter()
                .filter(|path| filter.matches(path.as_str()))
                .map(|path| (*path).clone())
                .collect();
            hooks.push(HookSelection {
                hook: HookRecord::new(config, repo, hook),
                files,
            });
        }
    }

    tracing::debug!(
        candidates = candidates.len(),
        hooks = hooks.len(),
        "Selected files for hooks"
    );
    Ok(Selection { hooks })
}

/// Exclude patterns that never match anything.
///
/// The global exclude is checked against every path. A hook's exclude is
/// checked against the paths that pass the global filter and that its
/// include pattern and type tags accept.
/// The default `^$` exclude is never reported.
pub fn useless_excludes(config: &Config, paths: &[NormalizedPath]) -> Result<Vec<UselessExclude>> {
    let mut useless = Vec::new();

    let global_exclude = Pattern::compile_or(config.exclude.as_deref(), DEFAULT_EXCLUDE)?;
    if !global_exclude.is_default_exclude()
        && !paths.iter().any(|p| global_exclude.is_match(p.as_str()))
    {
        useless.push(UselessExclude {
            location: "exclude".to_string(),
            pattern: global_exclude.as_str().to_string(),
            hook: None,
        });
    }

    let global = FileFilter::global(config)?;
    let candidates: Vec<&NormalizedPath> = paths
        .iter()
        .filter(|path| global.matches(path.as_str()))
        .collect();

    for (repo_index, repo) in config.repos.iter().enumerate() {
        for (hook_index, hook) in repo.hooks.iter().enumerate() {
            let filter = hook_filter(repo, hook)?;
            if filter.exclude.is_default_exclude() {
                continue;
            }

            let excludes_something = candidates
                .iter()
                .filter(|p| filter.matches_ignoring_exclude(p.as_str()))
                .any(|p| filter.exclude.is_match(p.as_str()));

            if !excludes_something {
                useless.push(UselessExclude {
                    location: format!("repos[{repo_index}].hooks[{hook_index}].exclude"),
                    pattern: filter.exclude.as_str().to_string(),
                    hook: Some(hook.id.clone()),
                });
            }
        }
    }

    Ok(useless)
}

/// Hooks that would never receive a file.
///
/// Skips `always_run` hooks, hooks with language `fail`, and `meta` hooks,
/// whose file patterns are defined by the framework.
pub fn hooks_without_files(config: &Config, paths: &[NormalizedPath]) -> Result<Vec<HookRecord>> {
    let selection = select(config, paths)?;
    let mut idle = Vec::new();

    let entries = config
        .repos
        .iter()
        .flat_map(|repo| repo.hooks.iter().map(move |hook| (repo, hook)));

    for ((repo, hook), selected) in entries.zip(selection.hooks) {
        if matches!(repo.source(), RepoSource::Meta)
            || hook.always_run.unwrap_or(false)
            || hook.language.as_deref() == Some("fail")
        {
            continue;
        }
        if selected.files.is_empty() {
            idle.push(selected.hook);
        }
    }

    Ok(idle)
}
