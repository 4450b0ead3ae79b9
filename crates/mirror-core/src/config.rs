//! Run settings: loading, merging and validation
//!
//! [`Settings`] is what the user supplied (command line and/or config file),
//! every field optional. [`Settings::validate`] turns it into a
//! [`SyncConfig`] whose folders exist, are distinct and are not nested, and
//! whose interval is in range. Nothing touches the trees before that.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::constants::{MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};
use crate::{Error, Result};

/// Which of the three folders a setting refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderRole {
    Source,
    Destination,
    Log,
}

impl fmt::Display for FolderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "Source",
            Self::Destination => "Destination",
            Self::Log => "Log",
        })
    }
}

/// Time between periodic cycles, in seconds. Zero disables repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval(u64);

impl Interval {
    pub const DISABLED: Self = Self(0);

    /// Accepts 0, or a value within
    /// [`MIN_INTERVAL_SECS`]..=[`MAX_INTERVAL_SECS`].
    pub fn new(secs: u64) -> Result<Self> {
        if secs == 0 || (MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS).contains(&secs) {
            Ok(Self(secs))
        } else {
            Err(Error::TimerOutOfRange { value: secs })
        }
    }

    pub fn secs(self) -> u64 {
        self.0
    }

    pub fn is_periodic(self) -> bool {
        self.0 != 0
    }

    /// Wait between cycles, or `None` in single-shot mode.
    pub fn period(self) -> Option<Duration> {
        self.is_periodic().then(|| Duration::from_secs(self.0))
    }
}

/// User-supplied settings before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub timer: Option<u64>,
}

impl Settings {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            source: overrides.source.or(self.source),
            destination: overrides.destination.or(self.destination),
            log: overrides.log.or(self.log),
            timer: overrides.timer.or(self.timer),
        }
    }

    /// Check the settings and resolve the folders to canonical paths.
    ///
    /// Checks run in a fixed order and stop at the first failure: each
    /// folder exists, no two folders are the same, source and destination
    /// are not nested in each other and the log folder is not inside the
    /// destination, then the timer range.
    pub fn validate(self) -> Result<SyncConfig> {
        let source = existing_dir(self.source, FolderRole::Source, "source")?;
        let destination = existing_dir(self.destination, FolderRole::Destination, "destination")?;
        let log_dir = existing_dir(self.log, FolderRole::Log, "log")?;

        for (first, a, second, b) in [
            (FolderRole::Source, &source, FolderRole::Destination, &destination),
            (FolderRole::Source, &source, FolderRole::Log, &log_dir),
            (FolderRole::Destination, &destination, FolderRole::Log, &log_dir),
        ] {
            if a == b {
                return Err(Error::SamePath { first, second });
            }
        }

        // Pruning the destination would delete a source or log folder inside
        // it, and mirroring into a folder inside the source never converges.
        for (inner, a, outer, b) in [
            (FolderRole::Destination, &destination, FolderRole::Source, &source),
            (FolderRole::Source, &source, FolderRole::Destination, &destination),
            (FolderRole::Log, &log_dir, FolderRole::Destination, &destination),
        ] {
            if a.starts_with(b) {
                return Err(Error::NestedPath { inner, outer });
            }
        }

        let interval = Interval::new(self.timer.unwrap_or(0))?;

        Ok(SyncConfig {
            source,
            destination,
            log_dir,
            interval,
        })
    }
}

fn existing_dir(path: Option<PathBuf>, role: FolderRole, name: &'static str) -> Result<PathBuf> {
    let path = path.ok_or(Error::MissingSetting { name })?;
    if !path.is_dir() {
        return Err(Error::NotADirectory { role, path });
    }
    dunce::canonicalize(&path).map_err(|e| Error::io(&path, e))
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub log_dir: PathBuf,
    pub interval: Interval,
}

/// Loads settings files, picking the format from the extension.
///
/// - `.toml` -> TOML
/// - `.json` -> JSON
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    pub fn load_settings(&self, path: &Path) -> Result<Settings> {
        self.load(path)
    }
}
