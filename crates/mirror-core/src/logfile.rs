//! Naming of activity log files
//!
//! Files are called `<YYYY-MM-DD>_FolderSync_Log_<NNN>.txt`; the counter
//! keeps several runs on the same day from overwriting each other.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::constants::{LOG_DATE_FORMAT, LOG_FILE_EXTENSION, LOG_FILE_STEM};

/// File name for the `counter`-th log of `date`.
pub fn log_file_name(date: NaiveDate, counter: u32) -> String {
    format!(
        "{}_{LOG_FILE_STEM}_{counter:03}.{LOG_FILE_EXTENSION}",
        date.format(LOG_DATE_FORMAT)
    )
}

/// First path in `dir` for `date` that is not taken yet, counting from 000.
pub fn next_log_path(dir: &Path, date: NaiveDate) -> PathBuf {
    free_slot_from(dir, date, 0).1
}

/// First free counter at or after `start`, with its path.
///
/// Any entry occupies a slot, including directories and dangling symlinks.
pub fn free_slot_from(dir: &Path, date: NaiveDate, start: u32) -> (u32, PathBuf) {
    let mut counter = start;
    loop {
        let candidate = dir.join(log_file_name(date, counter));
        if fs::symlink_metadata(&candidate).is_err() {
            return (counter, candidate);
        }
        counter += 1;
    }
}
