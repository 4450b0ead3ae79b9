//! The activity log file produced by real cycles.

use chrono::Local;
use mirror_core::logfile::log_file_name;
use mirror_core::{ActivityLog, FileLog, SyncCycle, SyncEvent};
use mirror_test_utils::SyncFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn cycle_events_land_in_file_in_order() {
    let fixture = SyncFixture::new();
    fixture.write_source(&[("a.txt", "hi"), ("sub/b.txt", "yo")]);
    fixture.write_destination(&[("old.txt", "x")]);

    let mut log = FileLog::create_in(&fixture.logs()).unwrap().silent();
    SyncCycle::new(fixture.source(), fixture.destination())
        .run(&mut log)
        .unwrap();

    let content = fs::read_to_string(log.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);

    let line_format = predicate::str::is_match(r"^\[\d{2}:\d{2}:\d{2}\] - .+$").unwrap();
    assert!(lines.iter().all(|l| line_format.eval(l)), "{content}");

    let messages: Vec<&str> = lines.iter().map(|l| &l[13..]).collect();
    assert!(messages[0].starts_with("Deleted file: "));
    assert!(messages[1].starts_with("Copied file: "));
    assert!(messages[2].starts_with("Created directory: "));
    assert!(messages[3].starts_with("Copied file: "));
    assert_eq!(messages[4], "Sync finished.");

    let stamps: Vec<&str> = lines.iter().map(|l| &l[1..9]).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn log_file_name_follows_pattern() {
    let fixture = SyncFixture::new();

    let log = FileLog::create_in(&fixture.logs()).unwrap().silent();

    let name = log.path().file_name().unwrap().to_string_lossy().into_owned();
    let pattern = predicate::str::is_match(r"^\d{4}-\d{2}-\d{2}_FolderSync_Log_000\.txt$").unwrap();
    assert!(pattern.eval(&name), "{name}");
    assert_eq!(fixture.log_files(), vec![name]);
}

#[test]
fn reopened_log_appends() {
    let fixture = SyncFixture::new();
    let path = {
        let mut log = FileLog::create_in(&fixture.logs()).unwrap().silent();
        log.emit(&SyncEvent::Syncing).unwrap();
        log.path().to_path_buf()
    };

    let mut log = FileLog::open(&path).unwrap().silent();
    log.emit(&SyncEvent::Stopped).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.ends_with("- Syncing stopped\n"));
}

/// Name of today's log with the given counter.
fn todays_log(counter: u32) -> String {
    log_file_name(Local::now().date_naive(), counter)
}

#[test]
fn directory_in_first_slot_is_skipped() {
    let fixture = SyncFixture::new();
    fs::create_dir(fixture.logs().join(todays_log(0))).unwrap();

    let log = FileLog::create_in(&fixture.logs()).unwrap().silent();

    assert_eq!(log.path(), fixture.logs().join(todays_log(1)));
    assert!(log.path().is_file());
}

#[cfg(unix)]
#[test]
fn dangling_symlink_in_first_slot_is_skipped() {
    let fixture = SyncFixture::new();
    std::os::unix::fs::symlink(
        fixture.logs().join("nowhere"),
        fixture.logs().join(todays_log(0)),
    )
    .unwrap();

    let log = FileLog::create_in(&fixture.logs()).unwrap().silent();

    assert_eq!(log.path(), fixture.logs().join(todays_log(1)));
    assert!(!fixture.logs().join("nowhere").exists());
}
