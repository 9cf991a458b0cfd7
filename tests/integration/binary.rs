//! The `sweep` binary end to end

use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use sweep::config::paths::CONFIG_ENV;

use super::helpers::{
    create_merged_branch, init_test_repo, ref_exists, test_config, write_config, OLD_DATE,
};

fn sweep(args: &[&str], cwd: &Path, config_path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sweep"))
        .args(args)
        .current_dir(cwd)
        .env(CONFIG_ENV, config_path)
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run sweep")
}

#[test]
fn test_clean_deletes_stale_merged_branch() {
    let temp_dir = init_test_repo();
    let repo = temp_dir.path();
    create_merged_branch("feature/stale", Some(OLD_DATE), repo);
    let config_dir = TempDir::new().unwrap();
    let store = write_config(config_dir.path(), test_config());

    let output = sweep(&["clean"], repo, store.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "{stdout}");
    assert!(stdout.contains("Deleted local branch: feature/stale"));
    assert!(stdout.contains("=== Deletion Summary ==="));
    assert!(!ref_exists("refs/heads/feature/stale", repo));
}

#[test]
fn test_dry_run_from_subdirectory() {
    let temp_dir = init_test_repo();
    let repo = temp_dir.path();
    create_merged_branch("feature/stale", Some(OLD_DATE), repo);
    let subdir = repo.join("nested").join("dir");
    std::fs::create_dir_all(&subdir).unwrap();
    let config_dir = TempDir::new().unwrap();
    let store = write_config(config_dir.path(), test_config());

    let output = sweep(&["--dry-run", "clean", "--local-only"], &subdir, store.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("[DRY RUN] Would delete 1 branch."));
    assert!(ref_exists("refs/heads/feature/stale", repo));
}

#[test]
fn test_outside_repository_exits_with_git_code() {
    let outside = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    let store = write_config(config_dir.path(), test_config());

    let output = sweep(&["clean"], outside.path(), store.path());

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not in a git repository"));
}

#[test]
fn test_corrupt_config_exits_with_config_code() {
    let temp_dir = init_test_repo();
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.yaml");
    std::fs::write(&config_path, "baseBranches: [unclosed\n").unwrap();

    let output = sweep(&["clean"], temp_dir.path(), &config_path);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unconfigured_clean_without_answers_exits_with_config_code() {
    let temp_dir = init_test_repo();
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.yaml");

    let output = sweep(&["clean"], temp_dir.path(), &config_path);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Welcome to sweep!"));
    assert!(!config_path.exists());
}

#[test]
fn test_config_show_prints_path() {
    let config_dir = TempDir::new().unwrap();
    let store = write_config(config_dir.path(), test_config());

    let output = sweep(&["config", "--show"], config_dir.path(), store.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("config.yaml"));
    assert!(stdout.contains("Max age: 1 day"));
}

#[test]
fn test_completions() {
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.yaml");

    let output = sweep(&["completions", "bash"], config_dir.path(), &config_path);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("sweep"));

    let output = sweep(&["completions", "powershell"], config_dir.path(), &config_path);
    assert_eq!(output.status.code(), Some(1));
}
