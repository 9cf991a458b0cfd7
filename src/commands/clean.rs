//! Clean command for merged and stale branches
//! Usage: sweep [--dry-run] [--verbose] clean [--local-only | --remote-only]

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use tracing::debug;

use crate::cleanup::{delete_candidates, plan_cleanup, CleanOptions, CleanupPlan, DeletionReport};
use crate::commands::configure;
use crate::config::{Config, ConfigStore};
use crate::error::ConfigError;
use crate::git::{
    check_git_available, find_repo_root, Branch, BranchService, CommandGitClient, GitClient,
};
use crate::utils::{format_age, pluralize};

/// Execute the clean command
///
/// Runs the interactive configuration first when no config file exists yet.
pub fn execute(options: &CleanOptions) -> Result<()> {
    check_git_available()?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let repo_root = find_repo_root(&cwd)?;
    debug!(repo = %repo_root.display(), "Found repository");

    let mut store = ConfigStore::open_global().context("Failed to open configuration")?;
    if !store.is_onboarded() {
        onboard(&mut store)?;
    }
    let config = store.config().clone();

    let client = CommandGitClient::new(repo_root, &config.remote_name);
    let service = BranchService::new(client, config.remote_name.clone());

    let stdout = io::stdout();
    run(&service, &config, options, Utc::now(), &mut stdout.lock())?;
    Ok(())
}

fn onboard(store: &mut ConfigStore) -> Result<()> {
    println!("{}", "Welcome to sweep!".bold());
    println!("No configuration found at {}.", store.path().display());
    println!("Let's set one up before cleaning.\n");

    if !configure::run_interactive(store)? {
        return Err(ConfigError::Invalid(
            "a saved configuration is required; run 'sweep config' to create one".into(),
        )
        .into());
    }

    println!("\nRun 'sweep config' anytime to change these settings.\n");
    Ok(())
}

/// Plan the cleanup, report it to `out` and delete unless dry-running.
///
/// Returns the deletion report, or `None` when nothing was deleted because
/// there were no candidates or the run was a dry run.
pub fn run<C: GitClient, W: Write>(
    service: &BranchService<C>,
    config: &Config,
    options: &CleanOptions,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<Option<DeletionReport>> {
    if options.verbose {
        writeln!(out, "Base branches: {}", config.base_branches.join(", "))?;
    }

    let mut plan = plan_cleanup(service, config, options.scope, now);

    if plan.is_empty() {
        writeln!(out, "No branches qualify for deletion.")?;
        write_processing_errors(out, &plan)?;
        return Ok(None);
    }

    write_candidates(out, &plan.candidates, now, options.verbose)?;

    if options.dry_run {
        writeln!(
            out,
            "\n{} Would delete {}. No deletions performed.",
            "[DRY RUN]".yellow().bold(),
            pluralize(plan.candidates.len(), "branch", "branches")
        )?;
        write_processing_errors(out, &plan)?;
        return Ok(None);
    }

    let candidates = std::mem::take(&mut plan.candidates);
    writeln!(
        out,
        "\nDeleting {}...",
        pluralize(candidates.len(), "branch", "branches")
    )?;
    let report = delete_candidates(service, candidates);

    write_deletions(out, &report)?;
    write_summary(out, &report, &plan)?;
    Ok(Some(report))
}

fn write_candidates<W: Write>(
    out: &mut W,
    candidates: &[Branch],
    now: DateTime<Utc>,
    verbose: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "\nFound {} qualifying for deletion:",
        pluralize(candidates.len(), "branch", "branches")
    )?;

    for branch in candidates {
        writeln!(
            out,
            "  - {} ({}): {} by {} ({})",
            branch.qualified_name().bold(),
            branch.kind(),
            describe_age(branch, now),
            branch.author_name,
            branch.last_commit_sha.dimmed()
        )?;

        if verbose {
            writeln!(out, "    Author email: {}", branch.author_email)?;
            if !branch.is_remote {
                writeln!(out, "    Has unpushed commits: {}", branch.has_unpushed_commits)?;
            }
            if !branch.remote.is_empty() {
                writeln!(out, "    Remote: {}", branch.remote)?;
            }
        }
    }
    Ok(())
}

fn describe_age(branch: &Branch, now: DateTime<Utc>) -> String {
    match branch.age(now) {
        Some(age) => format!("last commit {} ago", format_age(Some(age))),
        None => format!("last commit {}", format_age(None)),
    }
}

fn write_deletions<W: Write>(out: &mut W, report: &DeletionReport) -> io::Result<()> {
    for branch in &report.deleted {
        writeln!(
            out,
            "  {} Deleted {} branch: {}",
            "✓".green().bold(),
            branch.kind(),
            branch.qualified_name()
        )?;
    }
    for failure in &report.failed {
        writeln!(
            out,
            "  {} Failed to delete {} branch {}: {}",
            "✗".red().bold(),
            failure.branch.kind(),
            failure.branch.qualified_name(),
            failure.error
        )?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, report: &DeletionReport, plan: &CleanupPlan) -> io::Result<()> {
    writeln!(out, "\n{}", "=== Deletion Summary ===".bold())?;
    writeln!(
        out,
        "Successfully deleted: {}",
        pluralize(report.success_count(), "branch", "branches")
    )?;

    if !report.is_complete() {
        writeln!(
            out,
            "Failed to delete: {}",
            pluralize(report.failure_count(), "branch", "branches")
        )?;
        writeln!(out, "\nDeletion errors:")?;
        for failure in &report.failed {
            writeln!(
                out,
                "  - {} {}: {}",
                failure.branch.kind(),
                failure.branch.qualified_name(),
                failure.error
            )?;
        }
    }

    write_processing_errors(out, plan)?;
    writeln!(
        out,
        "\nProcessed {} total merged branch(es) across {} base branch(es).",
        plan.total_processed, plan.base_branch_count
    )
}

fn write_processing_errors<W: Write>(out: &mut W, plan: &CleanupPlan) -> io::Result<()> {
    if plan.errors.is_empty() {
        return Ok(());
    }
    writeln!(out, "\nProcessing errors ({}):", plan.errors.len())?;
    for failure in &plan.errors {
        writeln!(
            out,
            "  - Failed to get merged branches for {}: {}",
            failure.base, failure.error
        )?;
    }
    Ok(())
}
