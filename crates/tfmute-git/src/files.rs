//! Changed-file detection and tracked-file listing by extension.
//!
//! These mirror `git diff --name-only HEAD` and `git ls-files '*.<ext>'`
//! respectively, which is how the surrounding workflow decides whether
//! and where to look for refactoring blocks.

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::{Error, Result};

/// Opens the repository containing `path`, searching parent directories.
pub fn discover(path: &Path) -> Result<Repository> {
    Ok(Repository::discover(path)?)
}

/// Returns the repository's working directory.
pub fn workdir(repo: &Repository) -> Result<&Path> {
    repo.workdir().ok_or_else(|| Error::Bare {
        path: repo.path().to_path_buf(),
    })
}

/// Returns true when any file with `extension` changed relative to HEAD.
///
/// Considers both staged and unstaged changes to tracked files, like
/// `git diff --name-only HEAD`. Untracked files do not count.
pub fn has_changed_files(repo: &Repository, extension: &str) -> Result<bool> {
    Ok(!changed_files(repo, extension)?.is_empty())
}

/// Lists files with `extension` that changed relative to HEAD.
///
/// Paths are relative to the working directory root.
pub fn changed_files(repo: &Repository, extension: &str) -> Result<Vec<PathBuf>> {
    let head = repo.head()?.peel_to_tree()?;
    let diff = repo.diff_tree_to_workdir_with_index(Some(&head), None)?;

    let mut files = Vec::new();
    for delta in diff.deltas() {
        let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) else {
            continue;
        };
        if path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }

    tracing::debug!(extension, count = files.len(), "changed files relative to HEAD");
    Ok(files)
}

/// Lists all tracked files with `extension`.
///
/// Paths are relative to the working directory root, in index order
/// (sorted), like `git ls-files '*.<extension>'`.
pub fn tracked_files(repo: &Repository, extension: &str) -> Result<Vec<PathBuf>> {
    // Index paths only make sense against a working directory.
    workdir(repo)?;

    let index = repo.index()?;
    let mut files = Vec::new();
    for entry in index.iter() {
        let Ok(rel) = std::str::from_utf8(&entry.path) else {
            continue;
        };
        let path = Path::new(rel);
        if path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }

    tracing::debug!(extension, count = files.len(), "tracked files");
    Ok(files)
}
