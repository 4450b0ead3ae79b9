//! CLI argument parsing using clap derive

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use mirror_core::Settings;

/// FolderSync - Mirror a source folder into a destination folder
///
/// Syncs once, or every TIMER seconds until interrupted with Ctrl+C.
/// Every action is logged to a dated file in the log folder and echoed
/// to the console.
#[derive(Parser, Debug)]
#[command(name = "foldersync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source folder path
    pub source: Option<PathBuf>,

    /// Destination folder path
    pub destination: Option<PathBuf>,

    /// Log file folder path
    pub log: Option<PathBuf>,

    /// Seconds between syncs; 0 syncs once, otherwise 10 to 3600
    #[arg(short, long, value_name = "SECONDS")]
    pub timer: Option<u64>,

    /// Read settings from a TOML or JSON file; arguments override it
    #[arg(short, long, value_name = "FILE", env = "FOLDERSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not wait for Enter before starting and after finishing
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash `-timer`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Settings given on the command line.
    pub fn settings(&self) -> Settings {
        Settings {
            source: self.source.clone(),
            destination: self.destination.clone(),
            log: self.log.clone(),
            timer: self.timer,
        }
    }
}

/// Rewrite the legacy `-timer` spelling to `--timer`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-timer") => OsString::from("--timer"),
            Some(s) if s.starts_with("-timer=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_positionals() {
        let cli = parse(&["foldersync", "src", "dst", "logs"]);
        assert_eq!(cli.source, Some(PathBuf::from("src")));
        assert_eq!(cli.destination, Some(PathBuf::from("dst")));
        assert_eq!(cli.log, Some(PathBuf::from("logs")));
        assert_eq!(cli.timer, None);
        assert!(!cli.yes);
    }

    #[test]
    fn parse_legacy_timer_flag() {
        let cli = parse(&["foldersync", "src", "dst", "logs", "-timer", "30"]);
        assert_eq!(cli.timer, Some(30));
    }

    #[test]
    fn parse_legacy_timer_with_equals() {
        let cli = parse(&["foldersync", "-timer=45", "src", "dst", "logs"]);
        assert_eq!(cli.timer, Some(45));
    }

    #[test]
    fn parse_long_and_short_timer() {
        assert_eq!(parse(&["foldersync", "--timer", "10"]).timer, Some(10));
        assert_eq!(parse(&["foldersync", "-t", "3600"]).timer, Some(3600));
    }

    #[test]
    fn negative_timer_is_rejected_by_parser() {
        let result = Cli::try_parse_from(normalize_args(["foldersync", "a", "b", "c", "-timer", "-5"]));
        assert!(result.is_err());
    }

    #[test]
    fn parse_flags() {
        let cli = parse(&["foldersync", "-y", "-v", "--config", "sync.toml"]);
        assert!(cli.yes);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("sync.toml")));
        assert_eq!(cli.source, None);
    }

    #[test]
    fn settings_carry_arguments() {
        let settings = parse(&["foldersync", "src", "dst", "logs", "-timer", "60"]).settings();
        assert_eq!(settings.source, Some(PathBuf::from("src")));
        assert_eq!(settings.timer, Some(60));
    }

    #[test]
    fn other_arguments_pass_through_untouched() {
        let args = normalize_args(["foldersync", "-timers", "--timer"]);
        assert_eq!(args, vec!["foldersync", "-timers", "--timer"]);
    }
}
