//! User configuration
//!
//! A single YAML file shared by every repository (see [`paths`]) holds the
//! cleanup policy. The core only ever sees an already-loaded [`Config`].

pub mod duration;
pub mod paths;
mod store;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use store::ConfigStore;

const DAY: u64 = 24 * 60 * 60;

/// Cleanup policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Branches to compare against; each one is queried for merged branches
    pub base_branches: Vec<String>,
    /// Minimum time since the last commit before a branch is stale
    #[serde(with = "duration")]
    pub max_age: Duration,
    /// A match on any of these keeps the branch
    pub protected_regex: Vec<String>,
    /// A branch must match one of these to be considered
    pub include_regex: Vec<String>,
    /// Remote used to recognise remote branches and to delete them
    pub remote_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_branches: vec!["main".into(), "master".into(), "develop".into()],
            max_age: Duration::from_secs(30 * DAY),
            protected_regex: vec!["^(release|hotfix)/.*".into()],
            include_regex: vec![".*".into()],
            remote_name: "origin".into(),
        }
    }
}
