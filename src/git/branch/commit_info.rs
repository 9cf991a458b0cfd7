//! Tip-commit metadata as exchanged with `git log --format`

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::error::GitError;

/// Format handed to `git log -1`: committer date, author name, author email, short sha.
pub const GIT_LOG_FORMAT: &str = "%ci|%an|%ae|%h";

/// Layout of git's `%ci` timestamp, e.g. `2024-03-01 14:05:09 +0100`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

const SEPARATOR: char = '|';
const FIELD_COUNT: usize = 4;

/// Parsed form of one [`GIT_LOG_FORMAT`] record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// `None` when the timestamp field did not parse
    pub committed_at: Option<DateTime<FixedOffset>>,
    pub author_name: String,
    pub author_email: String,
    pub sha: String,
}

impl CommitInfo {
    /// Parse a record for `branch`. A wrong field count is an error; a bad
    /// timestamp only clears `committed_at`.
    pub fn parse(branch: &str, raw: &str) -> Result<Self, GitError> {
        let fields: Vec<&str> = raw.trim().split(SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(GitError::MalformedCommitInfo {
                branch: branch.to_string(),
                fields: fields.len(),
            });
        }

        let timestamp = fields[0].trim();
        let committed_at = match DateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
            Ok(at) => Some(at),
            Err(e) => {
                debug!(branch, timestamp, error = %e, "Unparseable commit timestamp");
                None
            }
        };

        Ok(Self {
            committed_at,
            author_name: fields[1].trim().to_string(),
            author_email: fields[2].trim().to_string(),
            sha: fields[3].trim().to_string(),
        })
    }

    /// Render a record the way git would print it.
    pub fn render(&self) -> String {
        let timestamp = self
            .committed_at
            .map(|at| at.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default();
        format!(
            "{timestamp}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.author_name, self.author_email, self.sha
        )
    }
}
