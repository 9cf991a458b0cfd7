//! Running the git binary
//!
//! Failures keep git's own stderr so callers can surface it.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::GitError;

/// Run git in `repo_root` and return its raw output.
///
/// Only a failure to start the process is an error; the exit status is left
/// to the caller.
pub fn run_git(args: &[&str], repo_root: &Path) -> Result<Output, GitError> {
    Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .map_err(|source| GitError::Spawn {
            command: args.join(" "),
            source,
        })
}

/// Run a git command, check for success, and return stdout as a trimmed String.
///
/// On failure, returns `GitError::Command` carrying the trimmed stderr.
pub fn run_git_checked(args: &[&str], repo_root: &Path) -> Result<String, GitError> {
    let output = run_git(args, repo_root)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::command(command_label(args), stderr.trim()));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Subcommand plus leading flags, e.g. `branch -d` for `["branch", "-d", "x"]`.
fn command_label(args: &[&str]) -> String {
    let mut label: Vec<&str> = Vec::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx == 0 || arg.starts_with('-') {
            label.push(arg);
        } else {
            break;
        }
    }
    label.join(" ")
}
