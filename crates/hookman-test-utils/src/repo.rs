//! [`TestRepo`] builder for hookman test scenarios.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::git;

/// A temporary project directory with helpers for test setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use hookman_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.init_git();
/// repo.write_config(hookman_test_utils::SAMPLE_CONFIG);
/// repo.write_file("src/app.py", "print('hi')\n");
/// repo.stage(&[".pre-commit-config.yaml", "src/app.py"]);
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Initialise the directory as a real git repository.
    pub fn init_git(&self) -> git2::Repository {
        git::real_git_repo(self.root())
    }

    /// Open the git repository created by [`TestRepo::init_git`].
    pub fn git(&self) -> git2::Repository {
        git2::Repository::open(self.root()).expect("TestRepo::git: repository not initialised")
    }

    /// Write `content` to `path` (relative to the root), creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Write `.pre-commit-config.yaml` at the root.
    pub fn write_config(&self, content: &str) {
        self.write_file(".pre-commit-config.yaml", content);
    }

    /// Stage files in the git index.
    pub fn stage(&self, paths: &[&str]) {
        git::stage(&self.git(), paths);
    }

    /// Commit whatever is staged.
    pub fn commit(&self, message: &str) {
        git::commit_index(&self.git(), message);
    }

    /// Read a file relative to the root.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
