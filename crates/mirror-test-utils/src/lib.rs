//! Shared test utilities for the foldersync workspace.
//!
//! This crate provides standardised tree fixtures so crate test suites do
//! not each hand-roll directory setup. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`tree`]: declarative tree writing and tree snapshots
//! - [`fixture`]: [`SyncFixture`] with source, destination and log folders

pub mod fixture;
pub mod tree;

pub use fixture::SyncFixture;
pub use tree::{Node, snapshot, write_tree};
