//! Branch queries, protection checks and deletion

use tracing::{debug, warn};

use super::info::Branch;
use super::naming::{effective_remote, is_remote_head};
use super::resolver::BranchResolver;
use crate::error::GitError;
use crate::git::client::GitClient;
use crate::policy::patterns;

/// Stateless facade over a [`GitClient`]: every call reflects the live
/// repository.
#[derive(Debug)]
pub struct BranchService<C: GitClient> {
    client: C,
    remote_name: String,
}

impl<C: GitClient> BranchService<C> {
    /// `remote_name` may be empty; `origin` is used in that case.
    pub fn new(client: C, remote_name: impl Into<String>) -> Self {
        Self {
            client,
            remote_name: remote_name.into(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn resolver(&self) -> BranchResolver<'_, C> {
        BranchResolver::new(&self.client, &self.remote_name)
    }

    /// The checked-out branch.
    pub fn current_branch(&self) -> Result<Branch, GitError> {
        let name = self.client.current_branch_name()?;
        self.branch_by_name(&name)
    }

    /// Branches merged into `base`, local and remote, each tagged `is_merged`.
    ///
    /// Names that fail to resolve are skipped so one broken ref does not
    /// block the rest.
    pub fn merged_branches(&self, base: &str) -> Result<Vec<Branch>, GitError> {
        let names = self.client.merged_branch_names(base)?;
        let resolver = self.resolver();

        let mut branches = Vec::with_capacity(names.len());
        for name in names {
            match resolver.resolve(&name) {
                Ok(mut branch) => {
                    branch.is_merged = true;
                    branches.push(branch);
                }
                Err(e) => warn!(branch = %name, base, error = %e, "Skipping unresolvable branch"),
            }
        }

        Ok(branches)
    }

    /// Every local and remote branch except the remote's HEAD pointer.
    pub fn all_branches(&self) -> Result<Vec<Branch>, GitError> {
        let names = self.client.all_branch_names()?;
        let resolver = self.resolver();

        let mut branches = Vec::with_capacity(names.len());
        for name in names {
            if is_remote_head(&name, resolver.remote()) {
                continue;
            }
            match resolver.resolve(&name) {
                Ok(branch) => branches.push(branch),
                Err(e) => warn!(branch = %name, error = %e, "Skipping unresolvable branch"),
            }
        }

        Ok(branches)
    }

    /// Resolve a single branch; failures are returned to the caller.
    pub fn branch_by_name(&self, name: &str) -> Result<Branch, GitError> {
        self.resolver().resolve(name)
    }

    /// Delete a branch locally or on its remote.
    ///
    /// A remote branch without a remote gets the service's remote (or
    /// `origin`) filled in before deletion.
    pub fn delete_branch(&self, branch: &mut Branch) -> Result<(), GitError> {
        if branch.is_remote {
            if branch.remote.is_empty() {
                branch.remote = effective_remote(&self.remote_name).to_string();
            }
            debug!(remote = %branch.remote, branch = %branch.name, "Deleting remote branch");
            return self
                .client
                .delete_remote_branch(&branch.remote, &branch.name);
        }

        debug!(branch = %branch.name, "Deleting local branch");
        self.client.delete_local_branch(&branch.name)
    }

    /// True when any pattern matches the branch name. Invalid patterns never match.
    pub fn is_protected_branch(&self, branch: &Branch, patterns: &[String]) -> bool {
        patterns::matches_any(patterns, &branch.name)
    }
}
