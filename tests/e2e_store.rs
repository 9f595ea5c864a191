// WorkLog - tests/e2e_store.rs
//
// End-to-end tests for the log store against a real filesystem.
//
// These tests exercise real file creation, real appends, and real reloads
// in a temp directory — no mocks, no stubs. This is the full path from a
// user prompt result to lines on disk and back into the startup display.

use tempfile::TempDir;
use worklog::app::state::AppState;
use worklog::core::model::EntryKind;
use worklog::core::store::LogStore;

fn fresh_store() -> (TempDir, LogStore) {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path());
    (dir, store)
}

// =============================================================================
// Store E2E
// =============================================================================

/// Starting from no files: append "hello" then "world", reload, and get the
/// header followed by exactly those two lines in insertion order.
#[test]
fn e2e_message_sequence_round_trips_in_order() {
    let (_dir, store) = fresh_store();

    store.append(EntryKind::Message, "hello").unwrap();
    store.append(EntryKind::Message, "world").unwrap();

    let lines = store.load_all(EntryKind::Message);
    assert_eq!(lines, vec!["Message Log", "hello", "world"]);
}

/// The first append creates the backing file with the fixed header for the
/// kind as its first line; the summaries file stays untouched.
#[test]
fn e2e_first_append_creates_file_with_header() {
    let (dir, store) = fresh_store();

    store.append(EntryKind::Message, "first note").unwrap();

    let on_disk = std::fs::read_to_string(dir.path().join("messages.txt")).unwrap();
    assert!(on_disk.starts_with("Message Log\n"));
    assert!(!dir.path().join("summaries.txt").exists());
}

/// A multi-line summary reloads as its own lines followed by a blank line
/// before any subsequent summary.
#[test]
fn e2e_summary_blank_line_separates_entries() {
    let (_dir, store) = fresh_store();

    store.append(EntryKind::Summary, "did X\ndid Y").unwrap();
    store.append(EntryKind::Summary, "next day").unwrap();

    let lines = store.load_all(EntryKind::Summary);
    let x = lines.iter().position(|l| l == "did X").unwrap();
    assert_eq!(lines[x + 1], "did Y");
    assert_eq!(lines[x + 2], "", "blank separator must precede the next summary");
    assert_eq!(lines[x + 3], "next day");
}

/// clear_all removes both files; a subsequent load yields empty for both
/// kinds, and a fresh append starts over with the header.
#[test]
fn e2e_clear_then_reload_is_empty() {
    let (dir, store) = fresh_store();

    store.append(EntryKind::Message, "m").unwrap();
    store.append(EntryKind::Summary, "s").unwrap();

    let report = store.clear_all();
    assert!(report.all_ok(), "clear failed: {report:?}");
    assert!(!dir.path().join("messages.txt").exists());
    assert!(!dir.path().join("summaries.txt").exists());
    assert!(store.load_all(EntryKind::Message).is_empty());
    assert!(store.load_all(EntryKind::Summary).is_empty());

    store.append(EntryKind::Message, "fresh start").unwrap();
    assert_eq!(
        store.load_all(EntryKind::Message),
        vec!["Message Log", "fresh start"]
    );
}

/// Clearing when neither file was ever created is still a full success.
#[test]
fn e2e_clear_on_fresh_directory_is_ok() {
    let (_dir, store) = fresh_store();
    assert!(store.clear_all().all_ok());
}

// =============================================================================
// Startup display E2E
// =============================================================================

/// A restart (new AppState over the same directory) redisplays everything
/// that was logged, raw lines prefixed with the kind label.
#[test]
fn e2e_restart_redisplays_previous_session() {
    let dir = TempDir::new().unwrap();

    {
        let mut state = AppState::new(LogStore::new(dir.path()));
        state.add_message("wrote the parser");
        state.add_summary("good day");
        assert!(state.error_notice.is_none());
    }

    // Fresh state over the same directory, as the next launch would build.
    let mut state = AppState::new(LogStore::new(dir.path()));
    state.load_existing();

    let texts: Vec<&str> = state.display.iter().map(|l| l.text.as_str()).collect();
    assert!(texts.contains(&"Message: wrote the parser"));
    assert!(texts.contains(&"Message: Message Log"));
    assert!(texts.contains(&"good day"));
    assert!(texts.contains(&"Summary:"));
}
