//! FolderSync CLI
//!
//! Mirrors a source folder into a destination folder, once or periodically.

mod cli;
mod commands;
mod error;
mod interactive;

use std::process::ExitCode;

use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: tracing subscriber already set", "warning".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let prompts = interactive::prompts_enabled(cli.yes);
    commands::run_sync(&cli, prompts)
}
