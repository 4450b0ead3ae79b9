//! Filesystem primitives used by the passes
//!
//! Every failure is wrapped with the path it happened at.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::{Error, Result};

/// List the entry names directly under `dir`, sorted by name.
pub fn list_names(dir: &Path) -> Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}

/// Copy `source` over `destination`, keeping permission bits and timestamps.
///
/// The bytes land in a temp file next to the destination which is then
/// renamed into place, so an interrupted copy never leaves a truncated
/// destination file behind.
pub fn copy_with_metadata(source: &Path, destination: &Path) -> Result<()> {
    let meta = fs::metadata(source).map_err(|e| Error::io(source, e))?;
    let temp_path = temp_path_for(destination);

    let copied = fs::copy(source, &temp_path)
        .map_err(|e| Error::io(source, e))
        .and_then(|_| {
            filetime::set_file_times(
                &temp_path,
                FileTime::from_last_access_time(&meta),
                FileTime::from_last_modification_time(&meta),
            )
            .map_err(|e| Error::io(&temp_path, e))
        })
        .and_then(|()| fs::rename(&temp_path, destination).map_err(|e| Error::io(destination, e)));

    if copied.is_err() {
        // Best effort; the copy error is what gets reported.
        let _ = fs::remove_file(&temp_path);
    }
    copied
}

pub fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|e| Error::io(path, e))
}

/// Remove an empty directory.
pub fn remove_dir(path: &Path) -> Result<()> {
    fs::remove_dir(path).map_err(|e| Error::io(path, e))
}

/// Remove a file, symlink or other non-directory node.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}

fn temp_path_for(destination: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        destination
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    destination.with_file_name(temp_name)
}
