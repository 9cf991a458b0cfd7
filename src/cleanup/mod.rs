//! Planning and executing a branch cleanup
//!
//! A cleanup run has two phases:
//! 1. Planning - for each configured base branch, list the branches merged
//!    into it, run them through the [`PolicyFilter`](crate::policy::PolicyFilter)
//!    and pool the survivors. A branch merged into several bases is a
//!    candidate once, attributed to the first base in config order.
//! 2. Deletion - delete the candidates one at a time. A failure is recorded
//!    and the batch carries on.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sweep::cleanup::{delete_candidates, plan_cleanup};
//!
//! let plan = plan_cleanup(&service, &config, Scope::All, Utc::now());
//! let report = delete_candidates(&service, plan.candidates.clone());
//! ```

mod batch;
mod options;
mod plan;


pub use batch::{delete_candidates, DeletionReport, FailedDeletion};
pub use options::CleanOptions;
pub use plan::{plan_cleanup, BaseBranchError, CleanupPlan};
