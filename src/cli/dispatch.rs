use anyhow::Result;
use clap::CommandFactory;
use std::str::FromStr;
use sweep::cleanup::CleanOptions;
use sweep::commands::{clean, configure};
use sweep::completions::{generate_completions, Shell};

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Clean {
            local_only,
            remote_only,
        } => {
            let options = CleanOptions::from_flags(local_only, remote_only, cli.dry_run, cli.verbose);
            clean::execute(&options)
        }
        Commands::Config { show } => configure::execute(show),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut std::io::stdout());
            Ok(())
        }
    }
}
