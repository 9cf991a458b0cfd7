//! Deletion policy: which resolved branches may be removed
//!
//! - `patterns`: regex matching for protected and include lists
//! - `filter`: the ordered skip rules applied to each candidate

pub mod filter;
pub mod patterns;

pub use filter::{PolicyFilter, Scope, SkipReason};
pub use patterns::{matches_any, PatternSet};
