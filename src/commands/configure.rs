//! Interactive configuration
//! Usage: sweep config [--show]

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{duration, Config, ConfigStore};
use crate::utils::format_duration;
use crate::validation::{parse_list, parse_max_age, parse_remote_name};

/// Execute the config command
///
/// With `show`, print the current configuration; otherwise walk through the
/// prompts and save on confirmation.
pub fn execute(show: bool) -> Result<()> {
    let mut store = ConfigStore::open_global().context("Failed to open configuration")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if show {
        return show_config(&mut out, &store);
    }

    let stdin = io::stdin();
    configure(&mut store, &mut stdin.lock(), &mut out)?;
    Ok(())
}

/// Prompt on stdin/stdout and save the answers. Returns true when saved.
pub fn run_interactive(store: &mut ConfigStore) -> Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    configure(store, &mut stdin.lock(), &mut stdout.lock())
}

/// Prompt for a configuration and persist it into `store` if confirmed.
pub fn configure<R: BufRead, W: Write>(
    store: &mut ConfigStore,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let Some(config) = prompt_config(input, out, store.config())? else {
        writeln!(out, "{}", "Configuration cancelled.".yellow())?;
        return Ok(false);
    };

    store
        .update(config)
        .context("Failed to save configuration")?;

    writeln!(out)?;
    writeln!(out, "{} Configuration saved", "✓".green().bold())?;
    show_config(out, store)?;
    Ok(true)
}

/// Ask for every setting, defaulting each to its value in `current`.
///
/// Returns `None` when the user declines to save. Invalid input is an
/// error carrying a [`ConfigError`](crate::error::ConfigError).
pub fn prompt_config<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    current: &Config,
) -> Result<Option<Config>> {
    writeln!(out, "{}", "=== Sweep Configuration ===".bold())?;
    writeln!(out, "Press Enter to keep the value in brackets.")?;
    writeln!(out)?;

    let line = ask(
        input,
        out,
        "Base branches (comma-separated)",
        &current.base_branches.join(","),
    )?;
    let base_branches =
        parse_list(&line, &current.base_branches, false).context("Invalid base branches")?;

    let line = ask(
        input,
        out,
        "Maximum age in days before a branch is stale",
        &max_age_default(current.max_age),
    )?;
    let max_age = parse_max_age(&line, current.max_age).context("Invalid max age")?;

    let line = ask(
        input,
        out,
        "Protected branch patterns (regex, comma-separated)",
        &current.protected_regex.join(","),
    )?;
    let protected_regex = parse_list(&line, &current.protected_regex, true)
        .context("Invalid protected patterns")?;

    let line = ask(
        input,
        out,
        "Include branch patterns (regex, comma-separated)",
        &current.include_regex.join(","),
    )?;
    let include_regex =
        parse_list(&line, &current.include_regex, true).context("Invalid include patterns")?;

    let line = ask(input, out, "Remote name", &current.remote_name)?;
    let remote_name = parse_remote_name(&line, &current.remote_name).context("Invalid remote name")?;

    let config = Config {
        base_branches,
        max_age,
        protected_regex,
        include_regex,
        remote_name,
    };

    writeln!(out)?;
    writeln!(out, "{}", "=== Configuration Summary ===".bold())?;
    write_settings(out, &config)?;

    let answer = ask(input, out, "\nSave this configuration? (y/N)", "")?;
    let confirmed = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
    Ok(confirmed.then_some(config))
}

/// Print the stored configuration and where it lives.
pub fn show_config<W: Write>(out: &mut W, store: &ConfigStore) -> Result<()> {
    writeln!(out, "Configuration file: {}", store.path().display())?;
    if !store.is_onboarded() {
        writeln!(out, "{}", "(not saved yet, showing defaults)".dimmed())?;
    }
    write_settings(out, store.config())?;
    Ok(())
}

fn write_settings<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    writeln!(out, "  Base branches: {}", config.base_branches.join(", "))?;
    writeln!(out, "  Max age: {}", format_duration(config.max_age))?;
    writeln!(out, "  Protected patterns: {}", config.protected_regex.join(", "))?;
    writeln!(out, "  Include patterns: {}", config.include_regex.join(", "))?;
    writeln!(out, "  Remote name: {}", config.remote_name)
}

/// Whole days as a bare number, anything finer in config notation (`36h`, `90s`).
fn max_age_default(max_age: std::time::Duration) -> String {
    const DAY_SECS: u64 = 24 * 60 * 60;
    let secs = max_age.as_secs();
    if secs % DAY_SECS == 0 {
        (secs / DAY_SECS).to_string()
    } else {
        duration::format(max_age)
    }
}

/// Print a prompt and read one line. End of input reads as an empty line.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str, default: &str) -> Result<String> {
    if default.is_empty() {
        write!(out, "{prompt}: ")?;
    } else {
        write!(out, "{prompt} [{default}]: ")?;
    }
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}
