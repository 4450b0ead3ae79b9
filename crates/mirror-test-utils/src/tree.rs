//! Declarative directory trees and their snapshots.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A node in a tree snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Dir,
    File(Vec<u8>),
    /// Symlink, device, socket or FIFO.
    Other,
}

impl Node {
    pub fn file(content: impl AsRef<[u8]>) -> Self {
        Self::File(content.as_ref().to_vec())
    }
}

/// Write `entries` below `root`.
///
/// A path ending in `/` is created as a directory and its content is
/// ignored; anything else is a file. Missing parents are created.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn write_tree(root: &Path, entries: &[(&str, &str)]) {
    for (rel, content) in entries {
        let path = root.join(rel.trim_end_matches('/'));
        if rel.ends_with('/') {
            fs::create_dir_all(&path)
                .unwrap_or_else(|e| panic!("write_tree: failed to create {}: {e}", path.display()));
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("write_tree: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_tree: failed to write {}: {e}", path.display()));
    }
}

/// Every entry below `root`, keyed by `/`-separated relative path.
///
/// Symlinks are recorded as [`Node::Other`] and not followed.
///
/// # Panics
/// Panics if the tree cannot be read.
pub fn snapshot(root: &Path) -> BTreeMap<String, Node> {
    let mut nodes = BTreeMap::new();
    walk(root, "", &mut nodes);
    nodes
}

/// Only the regular files below `root`, with their content as text.
pub fn files(root: &Path) -> BTreeMap<String, String> {
    snapshot(root)
        .into_iter()
        .filter_map(|(rel, node)| match node {
            Node::File(bytes) => Some((rel, String::from_utf8_lossy(&bytes).into_owned())),
            Node::Dir | Node::Other => None,
        })
        .collect()
}

fn walk(dir: &Path, prefix: &str, nodes: &mut BTreeMap<String, Node>) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("snapshot: failed to read {}: {e}", dir.display()));
    for entry in entries {
        let entry = entry.unwrap_or_else(|e| panic!("snapshot: bad entry in {}: {e}", dir.display()));
        let rel = format!("{prefix}{}", entry.file_name().to_string_lossy());
        let path = entry.path();
        let file_type = fs::symlink_metadata(&path)
            .unwrap_or_else(|e| panic!("snapshot: failed to stat {}: {e}", path.display()))
            .file_type();

        if file_type.is_dir() {
            nodes.insert(rel.clone(), Node::Dir);
            walk(&path, &format!("{rel}/"), nodes);
        } else if file_type.is_file() {
            let bytes = fs::read(&path)
                .unwrap_or_else(|e| panic!("snapshot: failed to read {}: {e}", path.display()));
            nodes.insert(rel, Node::File(bytes));
        } else {
            nodes.insert(rel, Node::Other);
        }
    }
}
