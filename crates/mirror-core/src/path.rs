//! Source/destination path correspondence

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A source path and its destination counterpart.
///
/// Both sides always share the same relative suffix below their roots:
/// a pair is only ever built from the two roots and then stepped into
/// children with [`PathPair::join`], which appends the same name to both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    source: PathBuf,
    destination: PathBuf,
}

impl PathPair {
    /// Create the root pair of a sync.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Step both sides into the child entry `name`.
    pub fn join(&self, name: impl AsRef<OsStr>) -> Self {
        let name = name.as_ref();
        Self {
            source: self.source.join(name),
            destination: self.destination.join(name),
        }
    }

    /// Relative path of this pair below `roots`.
    ///
    /// Returns `None` when either side is not below its root, or when the two
    /// suffixes differ.
    pub fn relative_to(&self, roots: &PathPair) -> Option<&Path> {
        let from_source = self.source.strip_prefix(&roots.source).ok()?;
        let from_destination = self.destination.strip_prefix(&roots.destination).ok()?;
        (from_source == from_destination).then_some(from_source)
    }
}
