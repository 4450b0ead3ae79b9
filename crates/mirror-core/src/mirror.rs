//! Mirror-copy pass: make every source entry exist, equal, under the destination

use std::path::Path;

use crate::activity::{ActivityLog, SyncEvent};
use crate::cycle::{CycleStats, Reporter};
use crate::entry::EntryKind;
use crate::path::PathPair;
use crate::{Result, compare, io};

/// Run the mirror-copy pass on its own.
///
/// Both directories must exist. Directories missing under `destination` are
/// created, and files that are absent or differ in content are copied with
/// their timestamps and permission bits. Symlinks and special files in
/// `source` are skipped.
pub fn copy_pass<L: ActivityLog + ?Sized>(
    source: &Path,
    destination: &Path,
    log: &mut L,
) -> Result<CycleStats> {
    let mut reporter = Reporter::new(log);
    mirror_dir(&PathPair::new(source, destination), &mut reporter)?;
    Ok(reporter.finish())
}

pub(crate) fn mirror_dir<L: ActivityLog + ?Sized>(
    pair: &PathPair,
    reporter: &mut Reporter<'_, L>,
) -> Result<()> {
    for name in io::list_names(pair.source())? {
        let child = pair.join(&name);
        match EntryKind::probe(child.source())? {
            EntryKind::Directory => {
                if EntryKind::probe(child.destination())? == EntryKind::Absent {
                    io::create_dir(child.destination())?;
                    reporter.emit(SyncEvent::CreatedDirectory {
                        path: child.destination().to_path_buf(),
                    })?;
                }
                mirror_dir(&child, reporter)?;
            }
            EntryKind::File => mirror_file(&child, pair.destination(), reporter)?,
            EntryKind::Other | EntryKind::Absent => {
                tracing::trace!(path = %child.source().display(), "Skipping non-regular entry");
            }
        }
    }
    Ok(())
}

fn mirror_file<L: ActivityLog + ?Sized>(
    file: &PathPair,
    destination_dir: &Path,
    reporter: &mut Reporter<'_, L>,
) -> Result<()> {
    let up_to_date = EntryKind::probe(file.destination())?.is_file()
        && compare::files_identical(file.source(), file.destination())?;

    if up_to_date {
        return reporter.emit(SyncEvent::Identical {
            source: file.source().to_path_buf(),
        });
    }

    io::copy_with_metadata(file.source(), file.destination())?;
    reporter.emit(SyncEvent::CopiedFile {
        source: file.source().to_path_buf(),
        destination_dir: destination_dir.to_path_buf(),
    })
}
