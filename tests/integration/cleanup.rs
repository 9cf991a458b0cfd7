//! End-to-end cleanup against real repositories

use chrono::Utc;

use sweep::cleanup::{delete_candidates, plan_cleanup, CleanOptions};
use sweep::commands::clean;
use sweep::git::{BranchService, CommandGitClient};
use sweep::policy::Scope;

use super::helpers::{
    add_origin, add_remote, create_branch_with_commit, create_merged_branch, git, init_test_repo,
    ref_exists, test_config, OLD_DATE,
};

#[test]
fn test_plan_and_delete_merged_stale_branches() {
    let temp_dir = init_test_repo();
    let repo = temp_dir.path();
    create_merged_branch("feature/stale", Some(OLD_DATE), repo);
    create_merged_branch("feature/fresh", None, repo);
    create_merged_branch("release/1.0", Some(OLD_DATE), repo);
    create_branch_with_commit("feature/unmerged", Some(OLD_DATE), repo);
    let _remote = add_origin(repo, &["main", "feature/stale"]);

    let service = BranchService::new(CommandGitClient::new(repo, "origin"), "origin");
    let plan = plan_cleanup(&service, &test_config(), Scope::All, Utc::now());

    let mut names: Vec<String> = plan.candidates.iter().map(|b| b.qualified_name()).collect();
    names.sort();
    assert_eq!(names, vec!["feature/stale", "origin/feature/stale"]);
    assert!(plan.errors.is_empty());

    let report = delete_candidates(&service, plan.candidates);
    assert_eq!(report.success_count(), 2);
    assert!(report.is_complete());

    assert!(!ref_exists("refs/heads/feature/stale", repo));
    assert!(!ref_exists("refs/remotes/origin/feature/stale", repo));
    assert!(ref_exists("refs/heads/feature/fresh", repo));
    assert!(ref_exists("refs/heads/release/1.0", repo));
    assert!(ref_exists("refs/heads/feature/unmerged", repo));
}

#[test]
fn test_missing_base_branch_is_a_processing_error() {
    let temp_dir = init_test_repo();
    let repo = temp_dir.path();
    create_merged_branch("feature/stale", Some(OLD_DATE), repo);

    let config = sweep::config::Config {
        base_branches: vec!["main".into(), "develop".into()],
        ..test_config()
    };
    let service = BranchService::new(CommandGitClient::new(repo, "origin"), "origin");
    let plan = plan_cleanup(&service, &config, Scope::All, Utc::now());

    assert_eq!(plan.candidates.len(), 1);
    assert_eq!(plan.errors.len(), 1);
    assert_eq!(plan.errors[0].base, "develop");
    assert_eq!(plan.base_branch_count, 2);
}

#[test]
fn test_dry_run_leaves_repository_untouched() {
    let temp_dir = init_test_repo();
    let repo = temp_dir.path();
    create_merged_branch("feature/stale", Some(OLD_DATE), repo);

    let service = BranchService::new(CommandGitClient::new(repo, "origin"), "origin");
    let options = CleanOptions::from_flags(false, false, true, false);
    let mut out = Vec::new();
    let report = clean::run(&service, &test_config(), &options, Utc::now(), &mut out).unwrap();

    assert!(report.is_none());
    assert!(ref_exists("refs/heads/feature/stale", repo));
    assert!(String::from_utf8(out).unwrap().contains("feature/stale"));
}

#[test]
fn test_remote_only_keeps_local_branches() {
    let temp_dir = init_test_repo();
    let repo = temp_dir.path();
    create_merged_branch("feature/stale", Some(OLD_DATE), repo);
    let _remote = add_origin(repo, &["main", "feature/stale"]);

    let service = BranchService::new(CommandGitClient::new(repo, "origin"), "origin");
    let options = CleanOptions::from_flags(false, true, false, false);
    let mut out = Vec::new();
    let report = clean::run(&service, &test_config(), &options, Utc::now(), &mut out)
        .unwrap()
        .unwrap();

    assert_eq!(report.success_count(), 1);
    assert!(ref_exists("refs/heads/feature/stale", repo));
    assert!(!ref_exists("refs/remotes/origin/feature/stale", repo));
}

#[test]
fn test_branches_of_other_remotes_are_ignored() {
    let temp_dir = init_test_repo();
    let repo = temp_dir.path();
    create_merged_branch("feature/stale", Some(OLD_DATE), repo);
    let _origin = add_origin(repo, &["main"]);
    let _upstream = add_remote(repo, "upstream", &["main", "feature/stale"]);
    git(&["branch", "-q", "-D", "feature/stale"], repo);

    let service = BranchService::new(CommandGitClient::new(repo, "origin"), "origin");
    for scope in [Scope::All, Scope::LocalOnly, Scope::RemoteOnly] {
        let plan = plan_cleanup(&service, &test_config(), scope, Utc::now());
        assert!(plan.is_empty(), "{scope:?}: {:?}", plan.candidates);
        assert!(plan.errors.is_empty());
    }

    let service = BranchService::new(CommandGitClient::new(repo, "upstream"), "upstream");
    let plan = plan_cleanup(&service, &test_config(), Scope::All, Utc::now());
    let names: Vec<String> = plan.candidates.iter().map(|b| b.qualified_name()).collect();
    assert_eq!(names, vec!["upstream/feature/stale"]);

    let report = delete_candidates(&service, plan.candidates);
    assert!(report.is_complete());
    assert!(!ref_exists("refs/remotes/upstream/feature/stale", repo));
}
