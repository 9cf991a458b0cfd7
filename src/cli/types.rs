use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Clean up stale and merged git branches", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Show what would be deleted without deleting anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Show branch details and diagnostic logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete branches merged into a base branch and older than the max age
    Clean {
        /// Only clean local branches
        #[arg(long, conflicts_with = "remote_only")]
        local_only: bool,

        /// Only clean remote branches
        #[arg(long)]
        remote_only: bool,
    },

    /// Set up or update the configuration interactively
    Config {
        /// Print the current configuration instead of prompting
        #[arg(long)]
        show: bool,
    },

    /// Generate shell completion script
    Completions {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}
