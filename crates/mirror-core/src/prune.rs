//! Prune pass: remove destination entries that have no source counterpart
//!
//! Presence is type-aware. A destination directory survives only if the
//! source has a directory at the same relative path, a regular file only if
//! the source has a regular file there, and a symlink or special file only
//! if the source has a non-regular entry there too. A type mismatch is
//! therefore pruned here and recreated with the right type by the
//! mirror-copy pass of the same cycle.

use std::path::Path;

use crate::activity::{ActivityLog, SyncEvent};
use crate::cycle::{CycleStats, Reporter};
use crate::entry::EntryKind;
use crate::path::PathPair;
use crate::{Result, io};

/// Run the prune pass on its own.
pub fn prune_pass<L: ActivityLog + ?Sized>(
    source: &Path,
    destination: &Path,
    log: &mut L,
) -> Result<CycleStats> {
    let mut reporter = Reporter::new(log);
    prune_dir(&PathPair::new(source, destination), &mut reporter)?;
    Ok(reporter.finish())
}

pub(crate) fn prune_dir<L: ActivityLog + ?Sized>(
    pair: &PathPair,
    reporter: &mut Reporter<'_, L>,
) -> Result<()> {
    for name in io::list_names(pair.destination())? {
        let child = pair.join(&name);
        let source_kind = EntryKind::probe(child.source())?;

        match EntryKind::probe(child.destination())? {
            EntryKind::Directory => {
                // Children first: when the source side is gone, every child
                // is pruned as well and the directory ends up empty.
                prune_dir(&child, reporter)?;
                if !source_kind.is_dir() {
                    io::remove_dir(child.destination())?;
                    reporter.emit(SyncEvent::DeletedDirectory {
                        path: child.destination().to_path_buf(),
                    })?;
                }
            }
            EntryKind::File if !source_kind.is_file() => delete_file(&child, reporter)?,
            EntryKind::Other if source_kind != EntryKind::Other => delete_file(&child, reporter)?,
            EntryKind::File | EntryKind::Other => {}
            EntryKind::Absent => {
                tracing::trace!(path = %child.destination().display(), "Entry vanished before pruning");
            }
        }
    }
    Ok(())
}

fn delete_file<L: ActivityLog + ?Sized>(
    pair: &PathPair,
    reporter: &mut Reporter<'_, L>,
) -> Result<()> {
    io::remove_file(pair.destination())?;
    reporter.emit(SyncEvent::DeletedFile {
        path: pair.destination().to_path_buf(),
    })
}
