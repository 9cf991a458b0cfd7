//! Batch deletion

use tracing::warn;

use crate::error::GitError;
use crate::git::{Branch, BranchService, GitClient};

/// A branch that could not be deleted.
#[derive(Debug)]
pub struct FailedDeletion {
    pub branch: Branch,
    pub error: GitError,
}

/// Outcome of a deletion batch.
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub deleted: Vec<Branch>,
    pub failed: Vec<FailedDeletion>,
}

impl DeletionReport {
    pub fn success_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// True when every branch was deleted
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Delete `candidates` in order; failures are recorded and skipped.
pub fn delete_candidates<C: GitClient>(
    service: &BranchService<C>,
    candidates: Vec<Branch>,
) -> DeletionReport {
    let mut report = DeletionReport::default();

    for mut branch in candidates {
        match service.delete_branch(&mut branch) {
            Ok(()) => report.deleted.push(branch),
            Err(error) => {
                warn!(branch = %branch.qualified_name(), error = %error, "Failed to delete branch");
                report.failed.push(FailedDeletion { branch, error });
            }
        }
    }

    report
}
