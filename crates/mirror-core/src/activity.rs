//! Activity log: the timestamped record of every action a sync takes
//!
//! Passes never write to a global handle. They receive an [`ActivityLog`]
//! and report typed [`SyncEvent`]s through it; the sink decides where the
//! rendered lines go.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::constants::LOG_TIME_FORMAT;
use crate::{Error, Result, logfile};

/// One line of the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    message: String,
}

impl LogEntry {
    /// Stamp `message` with the current local time.
    pub fn now(message: impl Into<String>) -> Self {
        Self::at(Local::now(), message)
    }

    pub fn at(timestamp: DateTime<Local>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] - {}",
            self.timestamp.format(LOG_TIME_FORMAT),
            self.message
        )
    }
}

/// Something that happened during a run, before it is rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    CreatedDirectory { path: PathBuf },
    Identical { source: PathBuf },
    CopiedFile { source: PathBuf, destination_dir: PathBuf },
    DeletedDirectory { path: PathBuf },
    DeletedFile { path: PathBuf },
    SyncFinished,
    Syncing,
    NextRun { secs: u64 },
    Stopped,
    /// Free-form line (banner, separators).
    Note(String),
}

impl fmt::Display for SyncEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreatedDirectory { path } => write!(f, "Created directory: {}", path.display()),
            Self::Identical { source } => {
                write!(f, "Not copying {}, files are identical", source.display())
            }
            Self::CopiedFile {
                source,
                destination_dir,
            } => write!(
                f,
                "Copied file: {} -> {}",
                source.display(),
                destination_dir.display()
            ),
            Self::DeletedDirectory { path } => write!(f, "Deleted directory: {}", path.display()),
            Self::DeletedFile { path } => write!(f, "Deleted file: {}", path.display()),
            Self::SyncFinished => f.write_str("Sync finished."),
            Self::Syncing => f.write_str("Syncing..."),
            Self::NextRun { secs } => write!(f, "Next syncing action in {secs} seconds"),
            Self::Stopped => f.write_str("Syncing stopped"),
            Self::Note(text) => f.write_str(text),
        }
    }
}

/// Append-only sink for log entries.
pub trait ActivityLog {
    /// Append one entry. Entries must be kept in call order.
    fn append(&mut self, entry: LogEntry) -> Result<()>;

    /// Render `event` and append it stamped with the current time.
    fn emit(&mut self, event: &SyncEvent) -> Result<()> {
        tracing::trace!(?event, "activity");
        self.append(LogEntry::now(event.to_string()))
    }
}

impl<L: ActivityLog + ?Sized> ActivityLog for &mut L {
    fn append(&mut self, entry: LogEntry) -> Result<()> {
        (**self).append(entry)
    }
}

/// Log file opened in append mode for the lifetime of the process.
///
/// Each line is flushed as soon as it is written and, unless silenced,
/// mirrored to standard output.
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
    file: File,
    echo: bool,
}

impl FileLog {
    /// Open (or create) `path` for appending.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::io(&path, e))?;
        Ok(Self {
            path,
            file,
            echo: true,
        })
    }

    /// Create a fresh log file in `dir` named after today's date and the
    /// first free counter.
    pub fn create_in(dir: &Path) -> Result<Self> {
        let today = Local::now().date_naive();
        let mut start = 0;
        loop {
            let (counter, path) = logfile::free_slot_from(dir, today, start);
            match OpenOptions::new().append(true).create_new(true).open(&path) {
                Ok(file) => {
                    tracing::debug!(?path, "Created activity log");
                    return Ok(Self {
                        path,
                        file,
                        echo: true,
                    });
                }
                // Taken between the probe and the open; move past it.
                Err(e) if e.kind() == ErrorKind::AlreadyExists => start = counter + 1,
                Err(e) => return Err(Error::io(&path, e)),
            }
        }
    }

    /// Stop mirroring lines to standard output.
    pub fn silent(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityLog for FileLog {
    fn append(&mut self, entry: LogEntry) -> Result<()> {
        let line = entry.to_string();
        if self.echo {
            println!("{line}");
        }
        writeln!(self.file, "{line}")
            .and_then(|()| self.file.flush())
            .map_err(|source| Error::LogWrite {
                path: self.path.clone(),
                source,
            })
    }
}

/// In-memory sink, used where the entries are inspected afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    entries: Vec<LogEntry>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(LogEntry::message).collect()
    }

    /// Number of messages containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.message.contains(needle))
            .count()
    }
}

impl ActivityLog for MemoryLog {
    fn append(&mut self, entry: LogEntry) -> Result<()> {
        self.entries.push(entry);
        Ok(())
    }
}
