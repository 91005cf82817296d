//! Command context resolution
//!
//! Works out the repository root, `hookman.toml` settings and which hook
//! configuration a command operates on, so commands work from any
//! subdirectory like git does.

use std::path::{Path, PathBuf};

use hookman_fs::NormalizedPath;
use hookman_meta::{Config, Settings, Validator, discover_config, load_config};

use crate::error::Result;

/// Resolved environment of a single invocation
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory the command runs in (`-C` or the process working directory)
    pub cwd: NormalizedPath,
    /// Git working tree root, or `cwd` outside a repository
    pub root: NormalizedPath,
    pub settings: Settings,
    config_flag: Option<PathBuf>,
}

impl Context {
    /// Resolve the context for `cwd`; `config_flag` is `--config`/`HOOKMAN_CONFIG`.
    pub fn resolve(cwd: &Path, config_flag: Option<&Path>) -> Result<Self> {
        let root = match hookman_git::find_repo_root(cwd) {
            Ok(root) => NormalizedPath::new(root),
            Err(e) => {
                tracing::debug!(error = %e, "Not in a git repository, using working directory as root");
                NormalizedPath::new(cwd)
            }
        };
        let settings = Settings::load(&root)?;

        Ok(Self {
            cwd: NormalizedPath::new(cwd),
            root,
            settings,
            config_flag: config_flag.map(Path::to_path_buf),
        })
    }

    /// Path of the hook configuration.
    ///
    /// `--config` wins over `config` in `hookman.toml`, which wins over
    /// discovery from the working directory.
    pub fn config_path(&self) -> Result<NormalizedPath> {
        if let Some(flag) = &self.config_flag {
            return Ok(if flag.is_absolute() {
                NormalizedPath::new(flag)
            } else {
                NormalizedPath::new(self.cwd.to_native().join(flag))
            });
        }

        if let Some(path) = self.settings.config_path(&self.root) {
            return Ok(path);
        }

        Ok(discover_config(&self.cwd)?)
    }

    /// Locate and load the hook configuration.
    pub fn load_config(&self) -> Result<(NormalizedPath, Config)> {
        let path = self.config_path()?;
        tracing::debug!(path = %path, "Using hook configuration");
        let config = load_config(&path)?;
        Ok((path, config))
    }

    /// Validator honouring `framework_version` from `hookman.toml`.
    pub fn validator(&self) -> Validator {
        match &self.settings.framework_version {
            Some(version) => Validator::with_framework_version(version.clone()),
            None => Validator::new(),
        }
    }

    /// Files tracked by git, relative to the repository root.
    pub fn tracked_files(&self) -> Result<Vec<NormalizedPath>> {
        Ok(hookman_git::tracked_files(&self.root.to_native())?)
    }

    /// Files staged for commit, relative to the repository root.
    pub fn staged_files(&self) -> Result<Vec<NormalizedPath>> {
        Ok(hookman_git::staged_files(&self.root.to_native())?)
    }
}

/// Normalize a user-supplied path to the form hook patterns match against.
pub fn relative_path(path: &str) -> NormalizedPath {
    let normalized = NormalizedPath::new(path);
    let trimmed = normalized.as_str().trim_start_matches("./");
    NormalizedPath::new(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookman_test_utils::repo::TestRepo;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_is_git_workdir_from_subdirectory() {
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_file("src/lib.rs", "");

        let ctx = Context::resolve(&repo.root().join("src"), None).unwrap();

        assert_eq!(
            ctx.root.to_native().canonicalize().unwrap(),
            repo.root().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_root_falls_back_to_cwd() {
        let dir = tempfile::TempDir::new().unwrap();

        let ctx = Context::resolve(dir.path(), None).unwrap();

        assert_eq!(ctx.root, NormalizedPath::new(dir.path()));
    }

    #[test]
    fn test_config_flag_is_relative_to_cwd() {
        let repo = TestRepo::new();

        let ctx = Context::resolve(repo.root(), Some(Path::new("ci/hooks.yaml"))).unwrap();

        assert_eq!(
            ctx.config_path().unwrap(),
            NormalizedPath::new(repo.root().join("ci/hooks.yaml"))
        );
    }

    #[test]
    fn test_settings_config_used_when_no_flag() {
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_file("hookman.toml", "config = \"ci/hooks.yaml\"\n");

        let ctx = Context::resolve(repo.root(), None).unwrap();

        assert!(ctx.config_path().unwrap().as_str().ends_with("ci/hooks.yaml"));
    }

    #[test]
    fn test_flag_overrides_settings() {
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_file("hookman.toml", "config = \"ci/hooks.yaml\"\n");

        let ctx = Context::resolve(repo.root(), Some(Path::new("other.yaml"))).unwrap();

        assert!(ctx.config_path().unwrap().as_str().ends_with("other.yaml"));
    }

    #[test]
    fn test_discovers_config() {
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_config(hookman_test_utils::SAMPLE_CONFIG);

        let ctx = Context::resolve(repo.root(), None).unwrap();
        let (path, config) = ctx.load_config().unwrap();

        assert!(path.as_str().ends_with(".pre-commit-config.yaml"));
        assert_eq!(config.repos.len(), 2);
    }

    #[test]
    fn test_validator_uses_settings_version() {
        let repo = TestRepo::new();
        repo.write_file("hookman.toml", "framework_version = \"2.0.0\"\n");

        let ctx = Context::resolve(repo.root(), None).unwrap();

        assert_eq!(ctx.validator().framework_version(), "2.0.0");
    }

    #[test]
    fn test_relative_path_strips_dot_prefix() {
        assert_eq!(relative_path("./src/a.py").as_str(), "src/a.py");
        assert_eq!(relative_path("src\\b.py").as_str(), "src/b.py");
        assert_eq!(relative_path("c.py").as_str(), "c.py");
    }
}
