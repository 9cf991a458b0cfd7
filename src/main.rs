mod cli;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use sweep::{logging, ExitStatus};

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::from(ExitStatus::for_error(&e).code())
        }
    }
}
