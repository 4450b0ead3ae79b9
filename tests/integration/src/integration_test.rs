//! End-to-end integration tests for a full run
//!
//! These exercise the whole flow the binary drives: settings loading ->
//! validation -> log file creation -> scheduler -> mirrored tree.

use mirror_core::{
    ActivityLog, CancellationToken, ConfigStore, Error, FileLog, MemoryLog, Outcome, Scheduler,
    Settings, SyncCycle,
};
use mirror_test_utils::{Node, SyncFixture};
use pretty_assertions::assert_eq;
use std::fs;

fn settings_for(fixture: &SyncFixture, timer: Option<u64>) -> Settings {
    Settings {
        source: Some(fixture.source()),
        destination: Some(fixture.destination()),
        log: Some(fixture.logs()),
        timer,
    }
}

// =============================================================================
// Full run
// =============================================================================

#[test]
fn test_single_shot_run_from_config_file() {
    let fixture = SyncFixture::new();
    fixture.write_source(&[("a.txt", "hello"), ("sub/", ""), ("sub/b.txt", "world")]);
    fixture.write_destination(&[("a.txt", "stale"), ("extra/", ""), ("extra/x.txt", "x")]);

    let config_path = fixture.root().join("foldersync.json");
    let json = serde_json::json!({
        "source": fixture.source(),
        "destination": fixture.destination(),
        "log": fixture.logs(),
    });
    fs::write(&config_path, json.to_string()).unwrap();

    let config = ConfigStore::new()
        .load_settings(&config_path)
        .unwrap()
        .validate()
        .unwrap();
    let mut log = FileLog::create_in(&config.log_dir).unwrap().silent();
    let log_path = log.path().to_path_buf();

    let outcome = Scheduler::from_config(&config)
        .run(&mut log, &CancellationToken::new())
        .unwrap();

    assert_eq!(outcome, Outcome::Completed);
    fixture.assert_mirrored();

    let content = fs::read_to_string(log_path).unwrap();
    let messages: Vec<&str> = content
        .lines()
        .map(|line| line.split_once("] - ").unwrap().1)
        .collect();
    assert!(messages[0].starts_with("Deleted file: "));
    assert!(messages[0].ends_with("x.txt"));
    assert!(messages[1].starts_with("Deleted directory: "));
    assert!(messages.iter().any(|m| m.starts_with("Copied file: ")));
    assert!(messages.iter().any(|m| m.starts_with("Created directory: ")));
    assert_eq!(messages.last(), Some(&"Sync finished."));
}

#[test]
fn test_repeated_runs_converge_and_then_only_compare() {
    let fixture = SyncFixture::new();
    fixture.write_source(&[
        ("one.txt", "1"),
        ("nested/", ""),
        ("nested/deep/", ""),
        ("nested/deep/two.txt", "2"),
        ("empty/", ""),
    ]);
    let config = settings_for(&fixture, None).validate().unwrap();
    let scheduler = Scheduler::from_config(&config);

    let mut first = MemoryLog::new();
    scheduler.run(&mut first, &CancellationToken::new()).unwrap();
    fixture.assert_mirrored();

    let mut second = MemoryLog::new();
    scheduler.run(&mut second, &CancellationToken::new()).unwrap();
    fixture.assert_mirrored();

    assert_eq!(second.count_containing("Copied file: "), 0);
    assert_eq!(second.count_containing("Created directory: "), 0);
    assert_eq!(second.count_containing("Deleted"), 0);
    assert_eq!(second.count_containing("files are identical"), 2);
}

#[test]
fn test_source_changes_between_runs_are_followed() {
    let fixture = SyncFixture::new();
    fixture.write_source(&[("keep.txt", "k"), ("edit.txt", "v1"), ("drop/", ""), ("drop/d.txt", "d")]);
    let cycle = SyncCycle::new(fixture.source(), fixture.destination());
    cycle.run(&mut MemoryLog::new()).unwrap();

    fs::write(fixture.source().join("edit.txt"), "v2 longer").unwrap();
    fs::remove_dir_all(fixture.source().join("drop")).unwrap();
    fixture.write_source(&[("new/", ""), ("new/n.txt", "n")]);

    let stats = cycle.run(&mut MemoryLog::new()).unwrap();

    fixture.assert_mirrored();
    assert_eq!(stats.files_copied, 2);
    assert_eq!(stats.files_identical, 1);
    assert_eq!(stats.files_deleted, 1);
    assert_eq!(stats.directories_deleted, 1);
    assert_eq!(stats.directories_created, 1);
    assert_eq!(
        fixture.destination_snapshot().get("edit.txt"),
        Some(&Node::file("v2 longer"))
    );
}

#[test]
fn test_periodic_run_stops_when_cancelled_between_cycles() {
    let fixture = SyncFixture::new();
    fixture.write_source(&[("a.txt", "hi")]);
    let config = settings_for(&fixture, Some(10)).validate().unwrap();

    /// Cancels once the wait after the first cycle is announced.
    struct StopAfterFirst {
        inner: MemoryLog,
        token: CancellationToken,
    }

    impl ActivityLog for StopAfterFirst {
        fn append(&mut self, entry: mirror_core::LogEntry) -> mirror_core::Result<()> {
            if entry.message().starts_with("Next syncing action") {
                self.token.cancel();
            }
            self.inner.append(entry)
        }
    }

    let token = CancellationToken::new();
    let mut log = StopAfterFirst {
        inner: MemoryLog::new(),
        token: token.clone(),
    };
    let outcome = Scheduler::from_config(&config).run(&mut log, &token).unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    fixture.assert_mirrored();
    assert_eq!(log.inner.count_containing("Syncing..."), 1);
    assert_eq!(log.inner.messages().last(), Some(&"Syncing stopped"));
}

// =============================================================================
// Validation happens before anything is touched
// =============================================================================

#[test]
fn test_invalid_timer_leaves_trees_and_logs_untouched() {
    let fixture = SyncFixture::new();
    fixture.write_source(&[("a.txt", "hi")]);
    fixture.write_destination(&[("old.txt", "x")]);

    let err = settings_for(&fixture, Some(5)).validate().unwrap_err();

    assert!(matches!(err, Error::TimerOutOfRange { value: 5 }));
    assert!(err.is_configuration());
    assert_eq!(
        fixture.destination_files().into_keys().collect::<Vec<_>>(),
        vec!["old.txt".to_string()]
    );
    assert!(fixture.log_files().is_empty());
}

#[test]
fn test_destination_inside_source_is_rejected() {
    let fixture = SyncFixture::new();
    fixture.write_source(&[("mirror/", "")]);
    let settings = Settings {
        destination: Some(fixture.source().join("mirror")),
        ..settings_for(&fixture, None)
    };

    let err = settings.validate().unwrap_err();
    assert!(matches!(err, Error::NestedPath { .. }), "{err}");
}
