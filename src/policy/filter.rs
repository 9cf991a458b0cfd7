//! Ordered skip rules for deletion candidates

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::patterns::{matches_any, PatternSet};
use crate::config::Config;
use crate::git::Branch;
use crate::utils::{format_age, format_duration};

/// Which kinds of branches a run may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    LocalOnly,
    RemoteOnly,
}

impl Scope {
    /// Build from the `--local-only` / `--remote-only` flags.
    pub fn from_flags(local_only: bool, remote_only: bool) -> Self {
        match (local_only, remote_only) {
            (true, false) => Self::LocalOnly,
            (false, true) => Self::RemoteOnly,
            _ => Self::All,
        }
    }

    pub fn admits(self, branch: &Branch) -> bool {
        match self {
            Self::All => true,
            Self::LocalOnly => !branch.is_remote,
            Self::RemoteOnly => branch.is_remote,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all branches"),
            Self::LocalOnly => write!(f, "--local-only"),
            Self::RemoteOnly => write!(f, "--remote-only"),
        }
    }
}

/// Why a branch was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    BaseBranch,
    Current,
    TooRecent {
        age: chrono::Duration,
        max_age: Duration,
    },
    OutOfScope(Scope),
    NotIncluded,
    Protected,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseBranch => write!(f, "base branch"),
            Self::Current => write!(f, "current branch"),
            Self::TooRecent { age, max_age } => write!(
                f,
                "too recent ({} < {})",
                format_age(Some(*age)),
                format_duration(*max_age)
            ),
            Self::OutOfScope(scope) => write!(f, "{scope} specified"),
            Self::NotIncluded => write!(f, "no include pattern matches"),
            Self::Protected => write!(f, "protected"),
        }
    }
}

/// The deletion policy for one run.
///
/// Rules are checked in a fixed order and the first one that applies wins:
/// base branch, current branch, age, scope, include patterns, protected
/// patterns.
#[derive(Debug, Clone)]
pub struct PolicyFilter {
    base_branches: Vec<String>,
    max_age: Duration,
    scope: Scope,
    include: PatternSet,
    protected: Vec<String>,
}

impl PolicyFilter {
    pub fn new(config: &Config, scope: Scope) -> Self {
        Self {
            base_branches: config.base_branches.clone(),
            max_age: config.max_age,
            scope,
            include: PatternSet::compile(&config.include_regex),
            protected: config.protected_regex.clone(),
        }
    }

    /// `Ok` when the branch may be deleted.
    ///
    /// A branch with an unknown commit time counts as infinitely stale; one
    /// dated in the future counts as too recent.
    pub fn evaluate(&self, branch: &Branch, now: DateTime<Utc>) -> Result<(), SkipReason> {
        if self.base_branches.iter().any(|base| *base == branch.name) {
            return Err(SkipReason::BaseBranch);
        }

        if branch.is_current {
            return Err(SkipReason::Current);
        }

        if let Some(age) = branch.age(now) {
            let max_age = chrono::Duration::from_std(self.max_age).unwrap_or(chrono::Duration::MAX);
            if age < max_age {
                return Err(SkipReason::TooRecent {
                    age,
                    max_age: self.max_age,
                });
            }
        }

        if !self.scope.admits(branch) {
            return Err(SkipReason::OutOfScope(self.scope));
        }

        if !self.include.is_match(&branch.name) {
            return Err(SkipReason::NotIncluded);
        }

        if matches_any(&self.protected, &branch.name) {
            return Err(SkipReason::Protected);
        }

        Ok(())
    }

    /// Keep the branches that pass [`evaluate`](Self::evaluate), logging each skip.
    pub fn apply(&self, branches: Vec<Branch>, now: DateTime<Utc>) -> Vec<Branch> {
        branches
            .into_iter()
            .filter(|branch| match self.evaluate(branch, now) {
                Ok(()) => true,
                Err(reason) => {
                    debug!(branch = %branch.qualified_name(), %reason, "Skipping branch");
                    false
                }
            })
            .collect()
    }
}
