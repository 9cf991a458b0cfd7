//! Options for a cleanup run

use crate::policy::Scope;

/// Settings for one `clean` invocation, built once from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Which branch kinds may be deleted
    pub scope: Scope,
    /// List candidates without deleting anything
    pub dry_run: bool,
    /// Show author email, unpushed status and remote in reports
    pub verbose: bool,
}

impl CleanOptions {
    /// Build from the `clean` flags. `--local-only` and `--remote-only`
    /// together mean no restriction.
    pub fn from_flags(local_only: bool, remote_only: bool, dry_run: bool, verbose: bool) -> Self {
        Self {
            scope: Scope::from_flags(local_only, remote_only),
            dry_run,
            verbose,
        }
    }
}
