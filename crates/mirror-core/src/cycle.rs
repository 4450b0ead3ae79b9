//! One complete sync: prune, then mirror

use std::path::{Path, PathBuf};

use crate::activity::{ActivityLog, SyncEvent};
use crate::path::PathPair;
use crate::{Result, mirror, prune};

/// Tally of the actions taken by a pass or a cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleStats {
    pub directories_created: usize,
    pub files_copied: usize,
    pub files_identical: usize,
    pub files_deleted: usize,
    pub directories_deleted: usize,
}

impl CycleStats {
    /// Number of filesystem mutations.
    pub fn changes(&self) -> usize {
        self.directories_created + self.files_copied + self.files_deleted + self.directories_deleted
    }

    fn record(&mut self, event: &SyncEvent) {
        match event {
            SyncEvent::CreatedDirectory { .. } => self.directories_created += 1,
            SyncEvent::CopiedFile { .. } => self.files_copied += 1,
            SyncEvent::Identical { .. } => self.files_identical += 1,
            SyncEvent::DeletedFile { .. } => self.files_deleted += 1,
            SyncEvent::DeletedDirectory { .. } => self.directories_deleted += 1,
            _ => {}
        }
    }
}

/// Forwards pass events to the activity log while counting them.
pub(crate) struct Reporter<'a, L: ?Sized> {
    log: &'a mut L,
    stats: CycleStats,
}

impl<'a, L: ActivityLog + ?Sized> Reporter<'a, L> {
    pub(crate) fn new(log: &'a mut L) -> Self {
        Self {
            log,
            stats: CycleStats::default(),
        }
    }

    pub(crate) fn emit(&mut self, event: SyncEvent) -> Result<()> {
        self.stats.record(&event);
        self.log.emit(&event)
    }

    pub(crate) fn finish(self) -> CycleStats {
        self.stats
    }
}

/// A source/destination pair ready to be synced.
#[derive(Debug, Clone)]
pub struct SyncCycle {
    roots: PathPair,
}

impl SyncCycle {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            roots: PathPair::new(source, destination),
        }
    }

    pub fn source(&self) -> &Path {
        self.roots.source()
    }

    pub fn destination(&self) -> &Path {
        self.roots.destination()
    }

    /// Run the prune pass and then the mirror-copy pass, and log
    /// `Sync finished.` once both complete.
    ///
    /// The first I/O error aborts the cycle and is returned as is; nothing
    /// already done is rolled back.
    pub fn run<L: ActivityLog + ?Sized>(&self, log: &mut L) -> Result<CycleStats> {
        tracing::debug!(
            source = %self.roots.source().display(),
            destination = %self.roots.destination().display(),
            "Starting sync cycle"
        );
        let mut reporter = Reporter::new(log);
        prune::prune_dir(&self.roots, &mut reporter)?;
        mirror::mirror_dir(&self.roots, &mut reporter)?;
        reporter.emit(SyncEvent::SyncFinished)?;

        let stats = reporter.finish();
        tracing::debug!(?stats, "Sync cycle finished");
        Ok(stats)
    }
}
