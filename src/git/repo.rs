//! Repository discovery and prerequisites

use std::path::{Path, PathBuf};

use crate::error::GitError;

/// Check that a git binary is on PATH and runs.
pub fn check_git_available() -> Result<(), GitError> {
    which::which("git").map_err(|e| {
        GitError::command("--version", format!("git is not installed or not in PATH: {e}"))
    })?;

    let cwd = std::env::temp_dir();
    super::runner::run_git_checked(&["--version"], &cwd).map(|_| ())
}

/// Find the repository root by walking up from `start`.
///
/// Returns the first directory that contains a `.git` entry (a directory
/// for regular checkouts, a file for worktrees and submodules).
pub fn find_repo_root(start: &Path) -> Result<PathBuf, GitError> {
    let mut current = start;

    loop {
        if current.join(".git").exists() {
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => {
                return Err(GitError::NotARepository {
                    start: start.to_path_buf(),
                })
            }
        }
    }
}
