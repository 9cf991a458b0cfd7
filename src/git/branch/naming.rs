//! Remote-prefix conventions for branch names

/// Remote used when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Symbolic ref git keeps for a remote's default branch.
pub const REMOTE_HEAD: &str = "HEAD";

/// The configured remote, or [`DEFAULT_REMOTE`] when it is empty.
pub fn effective_remote(configured: &str) -> &str {
    if configured.is_empty() {
        DEFAULT_REMOTE
    } else {
        configured
    }
}

/// Strip `"<remote>/"` from a listed branch name.
///
/// Returns the bare branch name for remote branches, `None` for names that
/// do not carry this remote's prefix (treated as local).
pub fn strip_remote<'a>(name: &'a str, remote: &str) -> Option<&'a str> {
    name.strip_prefix(remote)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|rest| !rest.is_empty())
}

/// True for the `<remote>/HEAD` pointer entry.
pub fn is_remote_head(name: &str, remote: &str) -> bool {
    strip_remote(name, remote) == Some(REMOTE_HEAD)
}
