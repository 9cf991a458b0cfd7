//! Collecting deletion candidates across base branches

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::GitError;
use crate::git::{Branch, BranchService, GitClient};
use crate::policy::{PolicyFilter, Scope};

/// A base branch whose merged branches could not be listed.
#[derive(Debug)]
pub struct BaseBranchError {
    pub base: String,
    pub error: GitError,
}

/// Outcome of the planning phase.
#[derive(Debug, Default)]
pub struct CleanupPlan {
    /// Branches to delete, in discovery order, without duplicates
    pub candidates: Vec<Branch>,
    /// Base branches that failed to enumerate
    pub errors: Vec<BaseBranchError>,
    /// Merged branch records seen across all bases, duplicates included
    pub total_processed: usize,
    /// Number of configured base branches
    pub base_branch_count: usize,
}

impl CleanupPlan {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Query every base branch and keep the merged branches the policy allows.
///
/// Enumeration failures are recorded per base and do not stop the others.
pub fn plan_cleanup<C: GitClient>(
    service: &BranchService<C>,
    config: &Config,
    scope: Scope,
    now: DateTime<Utc>,
) -> CleanupPlan {
    let filter = PolicyFilter::new(config, scope);
    let mut plan = CleanupPlan {
        base_branch_count: config.base_branches.len(),
        ..CleanupPlan::default()
    };
    let mut seen = HashSet::new();

    for base in &config.base_branches {
        let merged = match service.merged_branches(base) {
            Ok(merged) => merged,
            Err(error) => {
                warn!(base = %base, error = %error, "Failed to list merged branches");
                plan.errors.push(BaseBranchError {
                    base: base.clone(),
                    error,
                });
                continue;
            }
        };

        debug!(base = %base, count = merged.len(), "Listed merged branches");
        plan.total_processed += merged.len();

        for branch in filter.apply(merged, now) {
            if seen.insert(branch.key()) {
                plan.candidates.push(branch);
            } else {
                debug!(branch = %branch.qualified_name(), base = %base, "Already a candidate");
            }
        }
    }

    plan
}
