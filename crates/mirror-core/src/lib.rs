//! One-way directory mirroring engine for FolderSync
//!
//! A sync cycle prunes destination entries the source no longer has, then
//! copies every missing or changed source entry across. The scheduler runs
//! a cycle once or on a fixed interval, and every action is reported to an
//! [`ActivityLog`].

pub mod activity;
pub mod cancel;
pub mod compare;
pub mod config;
pub mod constants;
pub mod cycle;
pub mod entry;
pub mod error;
pub mod io;
pub mod logfile;
pub mod mirror;
pub mod path;
pub mod prune;
pub mod schedule;

pub use activity::{ActivityLog, FileLog, LogEntry, MemoryLog, SyncEvent};
pub use cancel::CancellationToken;
pub use config::{ConfigStore, FolderRole, Interval, Settings, SyncConfig};
pub use cycle::{CycleStats, SyncCycle};
pub use entry::EntryKind;
pub use error::{Error, Result};
pub use mirror::copy_pass;
pub use path::PathPair;
pub use prune::prune_pass;
pub use schedule::{Outcome, Scheduler};
