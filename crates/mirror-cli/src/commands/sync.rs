//! The sync command: validate, open the log, announce, run the scheduler

use std::path::Path;
use std::process::ExitCode;

use mirror_core::{
    ActivityLog, CancellationToken, ConfigStore, FileLog, Outcome, Scheduler, Settings,
    SyncConfig, SyncEvent,
};

use crate::cli::Cli;
use crate::error::Result;
use crate::interactive;

/// Width of the rule lines around the banner.
const RULE_WIDTH: usize = 92;

/// Merge the config file (if any) under the command-line settings.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let from_args = cli.settings();
    match &cli.config {
        Some(path) => {
            tracing::debug!(?path, "Loading settings file");
            let from_file = ConfigStore::new().load_settings(path)?;
            Ok(from_file.merge(from_args))
        }
        None => Ok(from_args),
    }
}

/// Run the sync command
///
/// Settings are validated before the log file exists, so a configuration
/// error never leaves a log behind. Returns the process exit code: success
/// after a single-shot run, failure once periodic mode is interrupted.
pub fn run_sync(cli: &Cli, prompts: bool) -> Result<ExitCode> {
    let config = load_settings(cli)?.validate()?;
    tracing::debug!(?config, "Settings validated");

    let mut log = FileLog::create_in(&config.log_dir)?;
    println!();
    let log_path = log.path().to_path_buf();
    log_banner(&mut log, &config, &log_path)?;

    if prompts {
        interactive::wait_for_enter("Press Enter to begin")?;
        println!();
    }

    let cancel = CancellationToken::new();
    if config.interval.is_periodic() {
        cancel.cancel_on_signals()?;
    }

    match Scheduler::from_config(&config).run(&mut log, &cancel)? {
        Outcome::Completed => {
            if prompts {
                println!();
                interactive::wait_for_enter("Press Enter to finish")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => Ok(ExitCode::FAILURE),
    }
}

fn log_banner(log: &mut impl ActivityLog, config: &SyncConfig, log_path: &Path) -> Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        "|FOLDER SYNC TOOL|".to_string(),
        rule.clone(),
        format!("Source folder path is: {}", config.source.display()),
        format!("Destination folder path is: {}", config.destination.display()),
        format!("Log will be saved in: {}", log_path.display()),
    ];
    if config.interval.is_periodic() {
        lines.push(format!(
            "Syncing interval is {} seconds.",
            config.interval.secs()
        ));
    }
    lines.push(rule);

    for line in lines {
        log.emit(&SyncEvent::Note(line))?;
    }
    Ok(())
}
