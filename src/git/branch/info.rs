//! The branch record

use chrono::{DateTime, Duration, FixedOffset, Utc};

/// Point-in-time snapshot of a local or remote branch.
///
/// Built fresh by every query; nothing is cached between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    /// Branch name with any remote prefix stripped
    pub name: String,
    /// Checked out in the working tree; never set for remote branches
    pub is_current: bool,
    pub is_remote: bool,
    /// Only set by merged-branch queries
    pub is_merged: bool,
    /// Tip commit time; `None` when git's timestamp could not be parsed
    pub last_commit_at: Option<DateTime<FixedOffset>>,
    pub last_commit_sha: String,
    pub author_name: String,
    pub author_email: String,
    /// Commits not on the upstream; always false for remote branches
    pub has_unpushed_commits: bool,
    /// Remote identifier; empty for local branches
    pub remote: String,
}

/// Identity of a branch across queries: remote flag, remote and name.
pub type BranchKey = (bool, String, String);

impl Branch {
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn remote(remote: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_remote: true,
            remote: remote.into(),
            ..Self::default()
        }
    }

    /// "local" or "remote", for reports
    pub fn kind(&self) -> &'static str {
        if self.is_remote {
            "remote"
        } else {
            "local"
        }
    }

    /// Name as git lists it: `origin/feature` for remote branches.
    pub fn qualified_name(&self) -> String {
        if self.is_remote && !self.remote.is_empty() {
            format!("{}/{}", self.remote, self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn key(&self) -> BranchKey {
        (self.is_remote, self.remote.clone(), self.name.clone())
    }

    /// Time since the tip commit, or `None` when the commit time is unknown.
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.last_commit_at
            .map(|committed| now.signed_duration_since(committed))
    }
}
