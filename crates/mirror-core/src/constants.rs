//! Fixed values shared by the scheduler, the activity log and the CLI.

/// Smallest accepted periodic interval, in seconds.
pub const MIN_INTERVAL_SECS: u64 = 10;

/// Largest accepted periodic interval, in seconds.
pub const MAX_INTERVAL_SECS: u64 = 3600;

/// Marker between the date and the counter in log file names.
pub const LOG_FILE_STEM: &str = "FolderSync_Log";

/// Extension of activity log files.
pub const LOG_FILE_EXTENSION: &str = "txt";

/// `chrono` format of the date prefix in log file names.
pub const LOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// `chrono` format of the timestamp prefix on each log line.
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S";
