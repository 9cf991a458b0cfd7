//! Shared test helpers for repositories and configuration

use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use tempfile::TempDir;

use sweep::config::{Config, ConfigStore};

/// A commit date far enough in the past to be stale under any test policy.
pub const OLD_DATE: &str = "2020-01-15T12:00:00+00:00";

/// Run git in `dir` and panic with its stderr on failure.
pub fn git(args: &[&str], dir: &Path) {
    git_with_env(args, dir, &[]);
}

fn git_with_env(args: &[&str], dir: &Path, env: &[(&str, &str)]) {
    let output = Command::new("git")
        .args(args)
        .envs(env.iter().copied())
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Test helper: Create a temporary git repository with initial commit on `main`
pub fn init_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let repo_root = temp_dir.path();

    git(&["init"], repo_root);
    git(&["config", "user.email", "test@test.com"], repo_root);
    git(&["config", "user.name", "Test User"], repo_root);
    git(&["config", "commit.gpgsign", "false"], repo_root);

    fs::write(repo_root.join("README.md"), "# Test Repository\n")
        .expect("Failed to write README.md");
    git(&["add", "."], repo_root);
    git(&["commit", "-m", "Initial commit"], repo_root);
    git(&["branch", "-M", "main"], repo_root);

    temp_dir
}

/// Create `name` from `main` with one commit dated `date` (now when `None`).
pub fn create_branch_with_commit(name: &str, date: Option<&str>, repo_root: &Path) {
    git(&["checkout", "-q", "-b", name, "main"], repo_root);

    let filename = format!("{}.txt", name.replace('/', "-"));
    fs::write(repo_root.join(&filename), name).expect("Failed to write file");
    git(&["add", &filename], repo_root);

    let message = format!("Add {filename}");
    let env: Vec<(&str, &str)> = match date {
        Some(date) => vec![("GIT_AUTHOR_DATE", date), ("GIT_COMMITTER_DATE", date)],
        None => Vec::new(),
    };
    git_with_env(&["commit", "-q", "-m", &message], repo_root, &env);

    git(&["checkout", "-q", "main"], repo_root);
}

/// Create `name` and merge it into `main`.
pub fn create_merged_branch(name: &str, date: Option<&str>, repo_root: &Path) {
    create_branch_with_commit(name, date, repo_root);
    git(&["merge", "-q", "--no-edit", "--no-ff", name], repo_root);
}

/// Attach a bare repository as `origin` and push `branches` to it.
///
/// The returned directory must outlive the test.
pub fn add_origin(repo_root: &Path, branches: &[&str]) -> TempDir {
    add_remote(repo_root, "origin", branches)
}

/// Attach a bare repository as remote `name` and push `branches` to it.
pub fn add_remote(repo_root: &Path, name: &str, branches: &[&str]) -> TempDir {
    let remote_dir = TempDir::new().expect("Failed to create remote directory");
    git(&["init", "--bare", "-q"], remote_dir.path());

    let url = remote_dir.path().to_string_lossy().to_string();
    git(&["remote", "add", name, &url], repo_root);

    let mut args = vec!["push", "-q", name];
    args.extend_from_slice(branches);
    git(&args, repo_root);

    remote_dir
}

/// True when `git rev-parse --verify` finds the ref.
pub fn ref_exists(reference: &str, repo_root: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--verify", "--quiet", reference])
        .current_dir(repo_root)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Policy for tests: base `main`, stale after one day, default patterns.
pub fn test_config() -> Config {
    Config {
        base_branches: vec!["main".into()],
        max_age: Duration::from_secs(24 * 60 * 60),
        ..Config::default()
    }
}

/// Save `config` to `config.yaml` inside `dir` and return the store.
pub fn write_config(dir: &Path, config: Config) -> ConfigStore {
    let mut store = ConfigStore::open(dir.join("config.yaml")).expect("Failed to open store");
    store.update(config).expect("Failed to save config");
    store
}
