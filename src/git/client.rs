//! The git client contract and its subprocess implementation
//!
//! Everything above this module talks to git only through [`GitClient`];
//! nothing else spawns processes or reads `.git` directly.

use std::path::PathBuf;

use tracing::debug;

use super::branch::commit_info::GIT_LOG_FORMAT;
use super::branch::naming::effective_remote;
use super::runner::run_git_checked;
use crate::error::GitError;

/// Primitive git operations needed to classify and delete branches.
///
/// Listing operations return remote branches qualified by their remote
/// (`origin/feature`), local branches bare (`feature`).
pub trait GitClient {
    /// Name of the checked-out branch; `GitError::NoCurrentBranch` when detached.
    fn current_branch_name(&self) -> Result<String, GitError>;

    /// Branches whose history is contained in `base`, excluding `base` itself.
    fn merged_branch_names(&self, base: &str) -> Result<Vec<String>, GitError>;

    /// Every local and remote branch, excluding `<remote>/HEAD`.
    fn all_branch_names(&self) -> Result<Vec<String>, GitError>;

    /// Pipe-delimited `timestamp|author name|author email|short sha` of the tip commit.
    fn branch_commit_info(&self, name: &str) -> Result<String, GitError>;

    fn delete_local_branch(&self, name: &str) -> Result<(), GitError>;

    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<(), GitError>;

    /// Commits on `name` not reachable from its upstream; 0 without an upstream.
    fn unpushed_commit_count(&self, name: &str) -> Result<usize, GitError>;
}

/// [`GitClient`] backed by the `git` binary, run inside `repo_root`.
///
/// Remote branches are listed for one remote only; tracking refs of any
/// other remote are ignored.
#[derive(Debug, Clone)]
pub struct CommandGitClient {
    repo_root: PathBuf,
    remote: String,
}

impl CommandGitClient {
    /// `remote` may be empty, in which case `origin` is used.
    pub fn new(repo_root: impl Into<PathBuf>, remote: &str) -> Self {
        Self {
            repo_root: repo_root.into(),
            remote: effective_remote(remote).to_string(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<String, GitError> {
        run_git_checked(args, &self.repo_root)
    }

    fn list_refs(&self, merged_into: Option<&str>) -> Result<Vec<ListedRef>, GitError> {
        let merged_arg = merged_into.map(|base| format!("--merged={base}"));
        let mut args = vec!["for-each-ref", "--format=%(refname)"];
        if let Some(arg) = &merged_arg {
            args.push(arg.as_str());
        }
        let remote_refs = format!("refs/remotes/{}", self.remote);
        args.extend(["refs/heads", remote_refs.as_str()]);

        let stdout = self.git(&args)?;
        Ok(parse_ref_list(&stdout))
    }
}

impl GitClient for CommandGitClient {
    fn current_branch_name(&self) -> Result<String, GitError> {
        let name = self.git(&["branch", "--show-current"])?;
        if name.is_empty() {
            return Err(GitError::NoCurrentBranch);
        }
        Ok(name)
    }

    fn merged_branch_names(&self, base: &str) -> Result<Vec<String>, GitError> {
        Ok(self
            .list_refs(Some(base))?
            .into_iter()
            .filter(|r| !r.is_base(base))
            .map(|r| r.name)
            .collect())
    }

    fn all_branch_names(&self) -> Result<Vec<String>, GitError> {
        Ok(self.list_refs(None)?.into_iter().map(|r| r.name).collect())
    }

    fn branch_commit_info(&self, name: &str) -> Result<String, GitError> {
        let format = format!("--format={GIT_LOG_FORMAT}");
        self.git(&["log", "-1", &format, name, "--"])
    }

    fn delete_local_branch(&self, name: &str) -> Result<(), GitError> {
        if let Ok(current) = self.current_branch_name() {
            if current == name {
                return Err(GitError::command(
                    "branch -d",
                    format!("cannot delete current branch {name}"),
                ));
            }
        }

        match self.git(&["branch", "-d", name]) {
            Ok(_) => Ok(()),
            Err(err) => {
                debug!(branch = name, error = %err, "Safe delete refused, forcing");
                // Report the -d failure; it explains why the branch was not merged locally
                self.git(&["branch", "-D", name]).map(|_| ()).map_err(|_| err)
            }
        }
    }

    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<(), GitError> {
        self.git(&["push", remote, "--delete", name]).map(|_| ())
    }

    fn unpushed_commit_count(&self, name: &str) -> Result<usize, GitError> {
        let range = format!("{name}@{{upstream}}..{name}");
        let output = match self.git(&["rev-list", "--count", &range]) {
            Ok(output) => output,
            // No upstream configured
            Err(_) => return Ok(0),
        };

        output.trim().parse().map_err(|_| GitError::InvalidCount {
            branch: name.to_string(),
            output,
        })
    }
}

/// A branch ref as listed by `git for-each-ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ListedRef {
    name: String,
    remote: bool,
}

impl ListedRef {
    /// True for `base` itself and for any `<remote>/<base>` tracking ref.
    fn is_base(&self, base: &str) -> bool {
        if self.name == base {
            return !self.remote;
        }
        self.remote
            && self
                .name
                .split_once('/')
                .is_some_and(|(_, branch)| branch == base)
    }
}

/// Parse `%(refname)` lines into local and remote-qualified branch names.
fn parse_ref_list(output: &str) -> Vec<ListedRef> {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            if let Some(name) = line.strip_prefix("refs/heads/") {
                return Some(ListedRef {
                    name: name.to_string(),
                    remote: false,
                });
            }
            let name = line.strip_prefix("refs/remotes/")?;
            if name.ends_with("/HEAD") {
                return None;
            }
            Some(ListedRef {
                name: name.to_string(),
                remote: true,
            })
        })
        .filter(|r| !r.name.is_empty())
        .collect()
}
