//! Error taxonomy and exit codes
//!
//! Git and configuration failures are typed so the binary can pick the
//! right exit code; everything above the library boundary is `anyhow`.

use std::io;
use std::path::PathBuf;

/// Failures talking to git or interpreting what it returned.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// git ran and exited non-zero; `message` is its trimmed stderr
    #[error("git {command} failed: {message}")]
    Command { command: String, message: String },

    #[error("failed to execute git {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("no branch is checked out (detached HEAD)")]
    NoCurrentBranch,

    #[error("unexpected commit info format for branch {branch}: expected 4 fields, got {fields}")]
    MalformedCommitInfo { branch: String, fields: usize },

    #[error("failed to get commit info for branch {branch}")]
    CommitInfo {
        branch: String,
        #[source]
        source: Box<GitError>,
    },

    #[error("unexpected commit count for branch {branch}: {output:?}")]
    InvalidCount { branch: String, output: String },

    #[error("not in a git repository (searched upwards from {})", start.display())]
    NotARepository { start: PathBuf },
}

impl GitError {
    /// Shorthand for a failed git invocation.
    pub fn command(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Command {
            command: command.into(),
            message: message.into(),
        }
    }
}

/// Failures loading, validating or persisting the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    HomeDirUnavailable,

    #[error("failed to create config directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    #[error("{0}")]
    Invalid(String),
}

/// Exit codes for failed runs; success exits with 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    General = 1,
    Config = 2,
    Git = 3,
}

impl ExitStatus {
    /// Classify an error by the first typed failure found in its chain.
    pub fn for_error(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if cause.downcast_ref::<ConfigError>().is_some() {
                return Self::Config;
            }
            if cause.downcast_ref::<GitError>().is_some() {
                return Self::Git;
            }
        }
        Self::General
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}
