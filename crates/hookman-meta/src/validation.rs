//! Structural validation of configurations and manifests
//!
//! Problems are returned as [`Diagnostic`] data rather than errors so a
//! single pass can report everything wrong with a file. A [`Report`]
//! fails when it holds at least one [`Severity::Error`]; in strict mode
//! warnings fail it too.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::pattern::Pattern;
use crate::schema::{Config, HookEntry, ManifestHook, RepoEntry, RepoSource};
use crate::tags;
use crate::version::{FRAMEWORK_VERSION, satisfies_minimum};

/// Hook ids provided by `repo: meta`.
pub const META_HOOK_IDS: &[&str] = &["check-hooks-apply", "check-useless-excludes", "identity"];

/// Languages a hook environment can be built for.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "conda",
    "coursier",
    "dart",
    "docker",
    "docker_image",
    "dotnet",
    "fail",
    "golang",
    "haskell",
    "julia",
    "lua",
    "node",
    "perl",
    "pygrep",
    "python",
    "r",
    "ruby",
    "rust",
    "script",
    "swift",
    "system",
    "unsupported",
    "unsupported_script",
];

/// Revisions that name a moving branch rather than a pinned release.
const MUTABLE_REVS: &[&str] = &["HEAD", "main", "master", "develop", "trunk", "dev", "latest"];

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational notice
    Info,
    /// Likely mistake that does not stop the framework
    Warning,
    /// The framework would reject the file
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable kebab-case identifier, e.g. `invalid-regex`
    pub code: String,
    /// Where the problem is, e.g. `repos[1].hooks[0].exclude`
    pub location: String,
    /// Human-readable description
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.code, self.location, self.message
        )
    }
}

/// Outcome of validating one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        severity: Severity,
        code: &str,
        location: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            code: code.to_string(),
            location: location.into(),
            message: message.into(),
        });
    }

    /// True when the report holds no errors.
    pub fn is_ok(&self) -> bool {
        self.count(Severity::Error) == 0
    }

    /// Whether the report passes; `strict` also rejects warnings.
    pub fn passes(&self, strict: bool) -> bool {
        self.is_ok() && (!strict || self.count(Severity::Warning) == 0)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Whether any diagnostic carries `code`.
    pub fn has_code(&self, code: &str) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    /// Diagnostics sorted most severe first, keeping file order within a severity.
    pub fn sorted(&self) -> Vec<&Diagnostic> {
        let mut sorted: Vec<&Diagnostic> = self.diagnostics.iter().collect();
        sorted.sort_by(|a, b| b.severity.cmp(&a.severity));
        sorted
    }
}

/// Validates configurations against a framework version.
#[derive(Debug, Clone)]
pub struct Validator {
    framework_version: String,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            framework_version: FRAMEWORK_VERSION.to_string(),
        }
    }

    /// Check `minimum_pre_commit_version` against `version` instead of the built-in one.
    pub fn with_framework_version(version: impl Into<String>) -> Self {
        Self {
            framework_version: version.into(),
        }
    }

    pub fn framework_version(&self) -> &str {
        &self.framework_version
    }

    /// Validate a loaded configuration.
    pub fn validate(&self, config: &Config) -> Report {
        let mut report = Report::new();

        check_unexpected_keys(&mut report, "config", &config.extra);
        check_pattern(&mut report, "exclude", config.exclude.as_deref());
        check_pattern(&mut report, "files", config.files.as_deref());
        self.check_minimum_version(
            &mut report,
            "minimum_pre_commit_version",
            config.minimum_pre_commit_version.as_deref(),
        );

        for language in config.default_language_version.keys() {
            if !KNOWN_LANGUAGES.contains(&language.as_str()) {
                report.push(
                    Severity::Warning,
                    "unknown-language",
                    format!("default_language_version.{language}"),
                    format!("'{language}' is not a known hook language"),
                );
            }
        }

        let mut seen_repos: HashMap<(&str, Option<&str>), usize> = HashMap::new();
        for (index, repo) in config.repos.iter().enumerate() {
            let location = format!("repos[{index}]");
            self.check_repo(&mut report, &location, repo);

            if repo.is_remote() {
                let key = (repo.repo.as_str(), repo.rev.as_deref());
                if let Some(first) = seen_repos.insert(key, index) {
                    report.push(
                        Severity::Info,
                        "duplicate-repo",
                        &location,
                        format!("same repository and rev as repos[{first}]"),
                    );
                }
            }
        }

        tracing::debug!(
            errors = report.count(Severity::Error),
            warnings = report.count(Severity::Warning),
            "Validated hook configuration"
        );
        report
    }

    /// Validate the hooks of a tool repository manifest.
    pub fn validate_manifest(&self, hooks: &[ManifestHook]) -> Report {
        let mut report = Report::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        if hooks.is_empty() {
            report.push(
                Severity::Warning,
                "empty-manifest",
                "manifest",
                "the manifest defines no hooks",
            );
        }

        for (index, hook) in hooks.iter().enumerate() {
            let location = format!("[{index}]");

            if hook.id.trim().is_empty() {
                report.push(
                    Severity::Error,
                    "empty-hook-id",
                    format!("{location}.id"),
                    "hook id must be a non-empty string",
                );
            } else if let Some(first) = seen.insert(hook.id.as_str(), index) {
                report.push(
                    Severity::Error,
                    "duplicate-hook",
                    &location,
                    format!("hook id '{}' is already defined at [{first}]", hook.id),
                );
            }

            for (field, value) in [
                ("name", &hook.name),
                ("entry", &hook.entry),
                ("language", &hook.language),
            ] {
                if value.trim().is_empty() {
                    report.push(
                        Severity::Error,
                        "missing-field",
                        format!("{location}.{field}"),
                        format!("'{field}' must be a non-empty string"),
                    );
                }
            }

            check_language(&mut report, &location, Some(hook.language.as_str()));
            check_pattern(&mut report, &format!("{location}.files"), hook.files.as_deref());
            check_pattern(&mut report, &format!("{location}.exclude"), hook.exclude.as_deref());
            check_tags(&mut report, &location, "types", &hook.types);
            check_tags(&mut report, &location, "types_or", &hook.types_or);
            check_tags(&mut report, &location, "exclude_types", &hook.exclude_types);
            self.check_minimum_version(
                &mut report,
                &format!("{location}.minimum_pre_commit_version"),
                hook.minimum_pre_commit_version.as_deref(),
            );
            check_unexpected_keys(&mut report, &location, &hook.extra);
        }

        report
    }

    fn check_repo(&self, report: &mut Report, location: &str, repo: &RepoEntry) {
        check_unexpected_keys(report, location, &repo.extra);

        match repo.source() {
            RepoSource::Remote { url } => {
                if url.trim().is_empty() {
                    report.push(
                        Severity::Error,
                        "empty-repo-url",
                        format!("{location}.repo"),
                        "repository URL must be a non-empty string",
                    );
                }
                check_rev(report, location, repo.rev.as_deref());
            }
            RepoSource::Local | RepoSource::Meta => {
                if repo.rev.is_some() {
                    report.push(
                        Severity::Error,
                        "rev-not-allowed",
                        format!("{location}.rev"),
                        format!("'{}' repositories must not set a rev", repo.repo),
                    );
                }
            }
        }

        if repo.hooks.is_empty() {
            report.push(
                Severity::Warning,
                "empty-hooks",
                format!("{location}.hooks"),
                "repository enables no hooks",
            );
        }

        let mut seen: HashMap<(&str, Option<&str>, &[String]), usize> = HashMap::new();
        for (index, hook) in repo.hooks.iter().enumerate() {
            let hook_location = format!("{location}.hooks[{index}]");
            self.check_hook(report, &hook_location, repo, hook);

            let key = (hook.id.as_str(), hook.alias.as_deref(), hook.args.as_slice());
            if let Some(first) = seen.insert(key, index) {
                report.push(
                    Severity::Error,
                    "duplicate-hook",
                    &hook_location,
                    format!(
                        "hook '{}' repeats {location}.hooks[{first}] with identical args; \
                         give it different args or an alias",
                        hook.id
                    ),
                );
            }
        }
    }

    fn check_hook(&self, report: &mut Report, location: &str, repo: &RepoEntry, hook: &HookEntry) {
        check_unexpected_keys(report, location, &hook.extra);

        if hook.id.trim().is_empty() {
            report.push(
                Severity::Error,
                "empty-hook-id",
                format!("{location}.id"),
                "hook id must be a non-empty string",
            );
        }

        match repo.source() {
            RepoSource::Local => {
                let missing: Vec<&str> = [
                    ("name", &hook.name),
                    ("entry", &hook.entry),
                    ("language", &hook.language),
                ]
                .into_iter()
                .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
                .map(|(field, _)| field)
                .collect();

                if !missing.is_empty() {
                    report.push(
                        Severity::Error,
                        "local-hook-incomplete",
                        location,
                        format!("local hooks must set {}", missing.join(", ")),
                    );
                }
            }
            RepoSource::Meta => {
                if !hook.id.trim().is_empty() && !META_HOOK_IDS.contains(&hook.id.as_str()) {
                    report.push(
                        Severity::Error,
                        "unknown-meta-hook",
                        format!("{location}.id"),
                        format!(
                            "'{}' is not a meta hook (expected one of: {})",
                            hook.id,
                            META_HOOK_IDS.join(", ")
                        ),
                    );
                }
            }
            RepoSource::Remote { .. } => {}
        }

        check_language(report, location, hook.language.as_deref());
        check_pattern(report, &format!("{location}.files"), hook.files.as_deref());
        check_pattern(report, &format!("{location}.exclude"), hook.exclude.as_deref());
        check_tags(report, location, "types", &hook.types);
        check_tags(report, location, "types_or", &hook.types_or);
        check_tags(report, location, "exclude_types", &hook.exclude_types);
        self.check_minimum_version(
            report,
            &format!("{location}.minimum_pre_commit_version"),
            hook.minimum_pre_commit_version.as_deref(),
        );
    }

    fn check_minimum_version(&self, report: &mut Report, location: &str, minimum: Option<&str>) {
        let Some(minimum) = minimum else {
            return;
        };

        match satisfies_minimum(minimum, &self.framework_version) {
            Ok(true) => {}
            Ok(false) => report.push(
                Severity::Error,
                "unsupported-version",
                location,
                format!(
                    "requires framework version {minimum}, but only {} is supported",
                    self.framework_version
                ),
            ),
            Err(e) => report.push(Severity::Error, "invalid-version", location, e.to_string()),
        }
    }
}

/// Validate a configuration against the built-in framework version.
pub fn validate(config: &Config) -> Report {
    Validator::new().validate(config)
}

/// Validate a manifest against the built-in framework version.
pub fn validate_manifest(hooks: &[ManifestHook]) -> Report {
    Validator::new().validate_manifest(hooks)
}

fn check_rev(report: &mut Report, location: &str, rev: Option<&str>) {
    let location = format!("{location}.rev");
    match rev {
        None => report.push(
            Severity::Error,
            "missing-rev",
            location,
            "remote repositories must pin a rev",
        ),
        Some(rev) if rev.trim().is_empty() => report.push(
            Severity::Error,
            "empty-rev",
            location,
            "rev must be a non-empty version or tag",
        ),
        Some(rev) if MUTABLE_REVS.contains(&rev.trim()) || rev.starts_with("refs/heads/") => {
            report.push(
                Severity::Warning,
                "mutable-rev",
                location,
                format!("'{rev}' names a branch; pin a tag or commit for reproducible runs"),
            )
        }
        Some(_) => {}
    }
}

fn check_pattern(report: &mut Report, location: &str, pattern: Option<&str>) {
    if let Some(source) = pattern
        && let Err(e) = Pattern::compile(source)
    {
        report.push(Severity::Error, "invalid-regex", location, e.to_string());
    }
}

fn check_tags(report: &mut Report, location: &str, field: &str, values: &[String]) {
    let mut seen = HashSet::new();
    for tag in values {
        if !seen.insert(tag.as_str()) {
            continue;
        }
        if !tags::is_known_tag(tag) {
            report.push(
                Severity::Warning,
                "unknown-type-tag",
                format!("{location}.{field}"),
                format!("'{tag}' is not a known file type tag"),
            );
        }
    }
}

fn check_language(report: &mut Report, location: &str, language: Option<&str>) {
    if let Some(language) = language
        && !language.trim().is_empty()
        && !KNOWN_LANGUAGES.contains(&language)
    {
        report.push(
            Severity::Warning,
            "unknown-language",
            format!("{location}.language"),
            format!("'{language}' is not a known hook language"),
        );
    }
}

fn check_unexpected_keys(report: &mut Report, location: &str, extra: &BTreeMap<String, Value>) {
    for key in extra.keys() {
        let message = if key == "sha" {
            "'sha' was replaced by 'rev'; run `hookman migrate`".to_string()
        } else {
            format!("unexpected key '{key}'")
        };
        report.push(Severity::Warning, "unexpected-key", location, message);
    }
}
