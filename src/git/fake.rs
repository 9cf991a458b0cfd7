//! In-memory [`GitClient`] for exercising branch logic without a repository
//!
//! Branches are keyed by the name git would list them under: bare for local
//! branches, `<remote>/<name>` for remote ones.
//!
//! ```
//! use chrono::Duration;
//! use sweep::git::{BranchService, FakeBranch, FakeGitClient};
//!
//! let git = FakeGitClient::new()
//!     .on_branch("main")
//!     .with_branch("main", FakeBranch::aged(Duration::hours(1)))
//!     .with_branch("feature/done", FakeBranch::aged(Duration::days(5)).merged_into("main"));
//!
//! let service = BranchService::new(git, "origin");
//! let merged = service.merged_branches("main").unwrap();
//! assert_eq!(merged[0].name, "feature/done");
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, FixedOffset, Utc};

use super::branch::CommitInfo;
use super::client::GitClient;
use crate::error::GitError;

/// Operations of the client contract, used to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FakeOp {
    CurrentBranch,
    MergedBranches,
    AllBranches,
    CommitInfo,
    DeleteLocal,
    DeleteRemote,
    UnpushedCount,
}

impl FakeOp {
    /// The git invocation this operation stands for, used in error messages.
    fn command(self) -> &'static str {
        match self {
            Self::CurrentBranch => "branch --show-current",
            Self::MergedBranches => "for-each-ref --merged",
            Self::AllBranches => "for-each-ref",
            Self::CommitInfo => "log -1",
            Self::DeleteLocal => "branch -d",
            Self::DeleteRemote => "push --delete",
            Self::UnpushedCount => "rev-list --count",
        }
    }
}

/// Tip-commit data and merge status of one fake branch.
#[derive(Debug, Clone)]
pub struct FakeBranch {
    pub committed_at: DateTime<FixedOffset>,
    pub author_name: String,
    pub author_email: String,
    pub sha: String,
    pub merged_into: BTreeSet<String>,
}

impl FakeBranch {
    pub fn new(committed_at: DateTime<FixedOffset>) -> Self {
        Self {
            committed_at,
            author_name: "Test User".to_string(),
            author_email: "test@example.com".to_string(),
            sha: "abc1234".to_string(),
            merged_into: BTreeSet::new(),
        }
    }

    /// A branch whose last commit is `age` before now.
    pub fn aged(age: Duration) -> Self {
        Self::new((Utc::now() - age).fixed_offset())
    }

    pub fn author(mut self, name: &str, email: &str) -> Self {
        self.author_name = name.to_string();
        self.author_email = email.to_string();
        self
    }

    pub fn sha(mut self, sha: &str) -> Self {
        self.sha = sha.to_string();
        self
    }

    pub fn merged_into(mut self, base: &str) -> Self {
        self.merged_into.insert(base.to_string());
        self
    }

    fn commit_info(&self) -> CommitInfo {
        CommitInfo {
            committed_at: Some(self.committed_at),
            author_name: self.author_name.clone(),
            author_email: self.author_email.clone(),
            sha: self.sha.clone(),
        }
    }
}

/// Scriptable stand-in for a repository.
///
/// Deletions mutate the fake so later listings reflect them, and are
/// recorded for assertions.
#[derive(Debug, Default)]
pub struct FakeGitClient {
    current: Option<String>,
    branches: RefCell<BTreeMap<String, FakeBranch>>,
    raw_commit_info: BTreeMap<String, String>,
    unpushed: BTreeMap<String, usize>,
    failures: BTreeMap<FakeOp, String>,
    remote_heads: Vec<String>,
    deleted_local: RefCell<Vec<String>>,
    deleted_remote: RefCell<Vec<(String, String)>>,
    commit_info_lookups: RefCell<Vec<String>>,
    unpushed_lookups: RefCell<Vec<String>>,
}

impl FakeGitClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_branch(mut self, name: &str) -> Self {
        self.current = Some(name.to_string());
        self
    }

    pub fn detached(mut self) -> Self {
        self.current = None;
        self
    }

    pub fn with_branch(self, listed_name: &str, branch: FakeBranch) -> Self {
        self.branches
            .borrow_mut()
            .insert(listed_name.to_string(), branch);
        self
    }

    /// Also list `<remote>/HEAD`, as `git branch --all` does.
    pub fn with_remote_head(mut self, remote: &str) -> Self {
        self.remote_heads.push(format!("{remote}/HEAD"));
        self
    }

    /// Return `raw` verbatim as the commit info of `listed_name`.
    pub fn with_commit_info(mut self, listed_name: &str, raw: &str) -> Self {
        self.raw_commit_info
            .insert(listed_name.to_string(), raw.to_string());
        self
    }

    pub fn with_unpushed(mut self, name: &str, count: usize) -> Self {
        self.unpushed.insert(name.to_string(), count);
        self
    }

    /// Make every call of `op` fail with `message`.
    pub fn failing(mut self, op: FakeOp, message: &str) -> Self {
        self.failures.insert(op, message.to_string());
        self
    }

    pub fn deleted_local(&self) -> Vec<String> {
        self.deleted_local.borrow().clone()
    }

    /// `(remote, name)` pairs passed to remote deletion.
    pub fn deleted_remote(&self) -> Vec<(String, String)> {
        self.deleted_remote.borrow().clone()
    }

    pub fn commit_info_lookups(&self) -> Vec<String> {
        self.commit_info_lookups.borrow().clone()
    }

    pub fn unpushed_lookups(&self) -> Vec<String> {
        self.unpushed_lookups.borrow().clone()
    }

    pub fn has_branch(&self, listed_name: &str) -> bool {
        self.branches.borrow().contains_key(listed_name)
    }

    fn check(&self, op: FakeOp) -> Result<(), GitError> {
        match self.failures.get(&op) {
            Some(message) => Err(GitError::command(op.command(), message.as_str())),
            None => Ok(()),
        }
    }
}

impl GitClient for FakeGitClient {
    fn current_branch_name(&self) -> Result<String, GitError> {
        self.check(FakeOp::CurrentBranch)?;
        self.current.clone().ok_or(GitError::NoCurrentBranch)
    }

    fn merged_branch_names(&self, base: &str) -> Result<Vec<String>, GitError> {
        self.check(FakeOp::MergedBranches)?;
        Ok(self
            .branches
            .borrow()
            .iter()
            .filter(|(name, branch)| name.as_str() != base && branch.merged_into.contains(base))
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn all_branch_names(&self) -> Result<Vec<String>, GitError> {
        self.check(FakeOp::AllBranches)?;
        let mut names: Vec<String> = self.branches.borrow().keys().cloned().collect();
        names.extend(self.remote_heads.iter().cloned());
        Ok(names)
    }

    fn branch_commit_info(&self, name: &str) -> Result<String, GitError> {
        self.commit_info_lookups.borrow_mut().push(name.to_string());
        self.check(FakeOp::CommitInfo)?;

        if let Some(raw) = self.raw_commit_info.get(name) {
            return Ok(raw.clone());
        }
        self.branches
            .borrow()
            .get(name)
            .map(|branch| branch.commit_info().render())
            .ok_or_else(|| {
                GitError::command(
                    FakeOp::CommitInfo.command(),
                    format!("bad revision '{name}'"),
                )
            })
    }

    fn delete_local_branch(&self, name: &str) -> Result<(), GitError> {
        self.check(FakeOp::DeleteLocal)?;

        if self.current.as_deref() == Some(name) {
            return Err(GitError::command(
                FakeOp::DeleteLocal.command(),
                format!("cannot delete current branch {name}"),
            ));
        }
        if self.branches.borrow_mut().remove(name).is_none() {
            return Err(GitError::command(
                FakeOp::DeleteLocal.command(),
                format!("branch '{name}' not found"),
            ));
        }
        self.deleted_local.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<(), GitError> {
        self.check(FakeOp::DeleteRemote)?;

        self.branches
            .borrow_mut()
            .remove(&format!("{remote}/{name}"));
        self.deleted_remote
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }

    fn unpushed_commit_count(&self, name: &str) -> Result<usize, GitError> {
        self.unpushed_lookups.borrow_mut().push(name.to_string());
        self.check(FakeOp::UnpushedCount)?;
        Ok(self.unpushed.get(name).copied().unwrap_or(0))
    }
}
