pub mod cleanup;
pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod policy;
pub mod utils;
pub mod validation;

pub use error::{ConfigError, ExitStatus, GitError};
