//! Resolution of raw branch names into `Branch` records

use tracing::debug;

use super::commit_info::CommitInfo;
use super::info::Branch;
use super::naming::{effective_remote, strip_remote};
use crate::error::GitError;
use crate::git::client::GitClient;

/// Turns names as git lists them (`feature`, `origin/feature`) into
/// populated [`Branch`] records by querying the client.
///
/// Only the configured remote is recognized: `upstream/feature` with remote
/// `origin` resolves as a local branch named `upstream/feature`.
pub struct BranchResolver<'a, C: GitClient + ?Sized> {
    client: &'a C,
    remote: &'a str,
}

impl<'a, C: GitClient + ?Sized> BranchResolver<'a, C> {
    /// `remote_name` may be empty, in which case `origin` is assumed.
    pub fn new(client: &'a C, remote_name: &'a str) -> Self {
        Self {
            client,
            remote: effective_remote(remote_name),
        }
    }

    pub fn remote(&self) -> &str {
        self.remote
    }

    pub fn resolve(&self, listed_name: &str) -> Result<Branch, GitError> {
        // Remote branches must be looked up by their qualified name
        let (name, is_remote) = match strip_remote(listed_name, self.remote) {
            Some(bare) => (bare, true),
            None => (listed_name, false),
        };

        let raw = self
            .client
            .branch_commit_info(listed_name)
            .map_err(|source| GitError::CommitInfo {
                branch: listed_name.to_string(),
                source: Box::new(source),
            })?;
        let info = CommitInfo::parse(name, &raw)?;

        let current = match self.client.current_branch_name() {
            Ok(current) => Some(current),
            Err(GitError::NoCurrentBranch) => None,
            Err(e) => return Err(e),
        };
        let is_current = !is_remote && current.as_deref() == Some(name);

        let has_unpushed_commits = !is_remote && self.has_unpushed(name);

        Ok(Branch {
            name: name.to_string(),
            is_current,
            is_remote,
            is_merged: false,
            last_commit_at: info.committed_at,
            last_commit_sha: info.sha,
            author_name: info.author_name,
            author_email: info.author_email,
            has_unpushed_commits,
            remote: if is_remote {
                self.remote.to_string()
            } else {
                String::new()
            },
        })
    }

    fn has_unpushed(&self, name: &str) -> bool {
        match self.client.unpushed_commit_count(name) {
            Ok(count) => count > 0,
            Err(e) => {
                debug!(branch = name, error = %e, "Could not count unpushed commits");
                false
            }
        }
    }
}
