//! Branch records and the services that build them
//!
//! This module is organized by concern:
//!
//! - `info`: the `Branch` record
//! - `naming`: remote-prefix parsing and the default remote
//! - `commit_info`: the pipe-delimited commit metadata record
//! - `resolver`: raw branch names into fully populated `Branch` records
//! - `service`: branch queries, protection checks and deletion

pub mod commit_info;
mod info;
pub mod naming;
mod resolver;
mod service;

pub use commit_info::CommitInfo;
pub use info::{Branch, BranchKey};
pub use naming::DEFAULT_REMOTE;
pub use resolver::BranchResolver;
pub use service::BranchService;
