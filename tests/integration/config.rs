//! Configuration persistence

use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

use sweep::config::paths::CONFIG_ENV;
use sweep::config::{Config, ConfigStore};

use super::helpers::write_config;

#[test]
fn test_round_trip_through_new_store() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        base_branches: vec!["trunk".into()],
        max_age: Duration::from_secs(36 * 60 * 60),
        protected_regex: vec!["^keep/".into()],
        include_regex: vec!["^feature/".into(), "^fix/".into()],
        remote_name: "upstream".into(),
    };

    let store = write_config(temp_dir.path(), config.clone());
    let reloaded = ConfigStore::open(store.path()).unwrap();

    assert_eq!(reloaded.config(), &config);
    assert!(reloaded.is_onboarded());
}

#[test]
fn test_file_is_readable_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let store = write_config(temp_dir.path(), Config::default());

    let content = std::fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("baseBranches:"));
    assert!(content.contains("maxAge: 30d"));
    assert!(content.contains("remoteName: origin"));
}

#[test]
fn test_hand_written_file_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "baseBranches: [main]\nmaxAge: 2w\nprotectedRegex:\n  - ^release/\n",
    )
    .unwrap();

    let store = ConfigStore::open(&path).unwrap();
    let config = store.config();
    assert_eq!(config.base_branches, vec!["main"]);
    assert_eq!(config.max_age, Duration::from_secs(14 * 24 * 60 * 60));
    assert_eq!(config.protected_regex, vec!["^release/"]);
    assert_eq!(config.include_regex, Config::default().include_regex);
}

#[test]
#[serial]
fn test_global_store_honours_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom").join("sweep.yaml");

    std::env::set_var(CONFIG_ENV, &path);
    let result = ConfigStore::open_global();
    std::env::remove_var(CONFIG_ENV);

    let store = result.unwrap();
    assert_eq!(store.path(), path.as_path());
    assert!(!store.is_onboarded());
    assert!(path.parent().unwrap().is_dir());
}
