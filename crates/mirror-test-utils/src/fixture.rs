//! [`SyncFixture`] builder for mirroring test scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::tree::{self, Node};

/// A temporary directory holding `source/`, `destination/` and `logs/`.
///
/// # Example
///
/// ```rust,no_run
/// use mirror_test_utils::SyncFixture;
///
/// let fixture = SyncFixture::new();
/// fixture.write_source(&[("a.txt", "hi"), ("sub/b.txt", "yo")]);
/// fixture.write_destination(&[("old.txt", "x")]);
/// // ... run a sync ...
/// fixture.assert_mirrored();
/// ```
pub struct SyncFixture {
    temp_dir: TempDir,
}

impl Default for SyncFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncFixture {
    /// Create the three empty folders.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        for name in ["source", "destination", "logs"] {
            fs::create_dir(temp_dir.path().join(name))
                .unwrap_or_else(|e| panic!("SyncFixture: failed to create {name}: {e}"));
        }
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self) -> PathBuf {
        self.root().join("source")
    }

    pub fn destination(&self) -> PathBuf {
        self.root().join("destination")
    }

    pub fn logs(&self) -> PathBuf {
        self.root().join("logs")
    }

    pub fn write_source(&self, entries: &[(&str, &str)]) {
        tree::write_tree(&self.source(), entries);
    }

    pub fn write_destination(&self, entries: &[(&str, &str)]) {
        tree::write_tree(&self.destination(), entries);
    }

    pub fn source_snapshot(&self) -> BTreeMap<String, Node> {
        tree::snapshot(&self.source())
    }

    pub fn destination_snapshot(&self) -> BTreeMap<String, Node> {
        tree::snapshot(&self.destination())
    }

    pub fn destination_files(&self) -> BTreeMap<String, String> {
        tree::files(&self.destination())
    }

    /// File names currently in the log folder.
    pub fn log_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.logs())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that the destination tree equals the source tree.
    ///
    /// # Panics
    /// Panics with both snapshots if they differ.
    pub fn assert_mirrored(&self) {
        let source = self.source_snapshot();
        let destination = self.destination_snapshot();
        assert_eq!(
            source, destination,
            "destination does not mirror source\nsource: {source:#?}\ndestination: {destination:#?}"
        );
    }
}
