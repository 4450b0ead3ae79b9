//! Classification of filesystem nodes

use std::fs::{self, FileType};
use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, Result};

/// What a path refers to at the moment it is probed.
///
/// Symbolic links are never followed; a link (to anything) is
/// [`EntryKind::Other`], as are devices, sockets and FIFOs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
    Absent,
}

impl EntryKind {
    /// Probe `path` without following symlinks.
    ///
    /// A missing path, or one whose parent is not a directory, is
    /// [`EntryKind::Absent`]. Any other failure is an I/O error.
    pub fn probe(path: &Path) -> Result<Self> {
        match fs::symlink_metadata(path) {
            Ok(meta) => Ok(Self::from_file_type(meta.file_type())),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(Self::Absent)
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }

    pub fn is_dir(self) -> bool {
        self == Self::Directory
    }

    pub fn is_file(self) -> bool {
        self == Self::File
    }
}
