//! Git operations for branch cleanup
//!
//! This module provides:
//! - The `GitClient` contract, the only boundary to the git binary
//! - A subprocess-backed client and an in-memory fake sharing that contract
//! - Branch resolution (raw names into `Branch` records)
//! - The `BranchService` used by cleanup to query and delete branches

pub mod branch;
pub mod client;
pub mod fake;
pub mod repo;
pub mod runner;

pub use branch::{Branch, BranchResolver, BranchService, CommitInfo, DEFAULT_REMOTE};
pub use client::{CommandGitClient, GitClient};
pub use fake::{FakeBranch, FakeGitClient, FakeOp};
pub use repo::{check_git_available, find_repo_root};
