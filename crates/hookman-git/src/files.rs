//! Tracked and staged file listing

use std::path::{Path, PathBuf};

use git2::{Delta, Repository};
use hookman_fs::NormalizedPath;

use crate::{Error, Result};

/// Index mode of a submodule entry.
const GITLINK_MODE: u32 = 0o160000;

/// Find the working tree root of the repository containing `start`.
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    let repo = open(start)?;
    workdir(&repo)
}

/// List the files in the index, relative to the working tree root.
///
/// Entries come back in index order. Submodules are skipped since hooks
/// never see them as files.
pub fn tracked_files(start: &Path) -> Result<Vec<NormalizedPath>> {
    let repo = open(start)?;
    let index = repo.index()?;

    let files: Vec<NormalizedPath> = index
        .iter()
        .filter(|entry| entry.mode != GITLINK_MODE)
        .map(|entry| NormalizedPath::new(String::from_utf8_lossy(&entry.path).into_owned()))
        .collect();

    tracing::debug!(count = files.len(), "Listed tracked files");
    Ok(files)
}

/// List files added, modified, renamed or copied in the index relative to HEAD.
///
/// In a repository without commits every indexed file counts as staged.
/// Deletions are left out since there is nothing to run a hook on.
pub fn staged_files(start: &Path) -> Result<Vec<NormalizedPath>> {
    let repo = open(start)?;
    let index = repo.index()?;

    let head_tree = match repo.head() {
        Ok(head) => Some(head.peel_to_tree()?),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
        Err(e) if e.code() == git2::ErrorCode::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let diff = repo.diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

    let files: Vec<NormalizedPath> = diff
        .deltas()
        .filter(|delta| delta.status() != Delta::Deleted)
        .filter_map(|delta| delta.new_file().path().map(NormalizedPath::new))
        .collect();

    tracing::debug!(count = files.len(), "Listed staged files");
    Ok(files)
}

fn open(start: &Path) -> Result<Repository> {
    Repository::discover(start).map_err(|e| {
        tracing::debug!(path = %start.display(), error = %e, "Repository discovery failed");
        Error::NotARepository {
            path: start.to_path_buf(),
        }
    })
}

fn workdir(repo: &Repository) -> Result<PathBuf> {
    repo.workdir()
        .map(|dir| dir.components().collect::<PathBuf>())
        .ok_or_else(|| Error::BareRepository {
            path: repo.path().to_path_buf(),
        })
}
