//! Git repository fixtures.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs.

use std::fs;
use std::path::Path;

/// Creates a bare `.git` directory marker without a real repository.
///
/// Use for: tests that only need repository-root detection.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
}

/// Initialises a real git repository using `git2` (no commits).
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Adds `paths` (relative to the work tree) to the index.
///
/// # Panics
/// Panics if the index cannot be updated.
pub fn stage(repo: &git2::Repository, paths: &[&str]) {
    let mut index = repo.index().expect("stage: open index");
    for path in paths {
        index
            .add_path(Path::new(path))
            .unwrap_or_else(|e| panic!("stage: failed to add {path}: {e}"));
    }
    index.write().expect("stage: write index");
}

/// Commits the current index on top of HEAD (if any).
///
/// # Panics
/// Panics if the commit cannot be created.
pub fn commit_index(repo: &git2::Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().expect("commit_index: open index");
    let tree_id = index.write_tree().expect("commit_index: write tree");
    let tree = repo.find_tree(tree_id).expect("commit_index: find tree");
    let signature = git2::Signature::now("Test User", "test@test.com")
        .expect("commit_index: signature");

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .expect("commit_index: commit")
}
