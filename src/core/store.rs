// WorkLog - core/store.rs
//
// The append-only log store: two flat UTF-8 text files, one per entry kind.
//
// Contract:
// - append: opens the backing file in append mode (creating it if absent);
//   a fresh file gets the kind's one-line header before the first entry.
//   Messages are written as the bare text plus newline; summaries as the
//   text (which may span lines) plus a blank separator line.
// - load_all: reads the whole backing file line by line in file order,
//   header included. A missing file is an empty log; a read error mid-file
//   is logged and the lines read so far are returned. Never blocks startup.
// - clear_all: deletes both backing files, each attempted independently.
//   A file that is already missing counts as cleared.
//
// The store mutates only the on-disk files. The in-memory display is the
// caller's responsibility and must not be treated as changed when an append
// fails.

use crate::core::model::{ClearReport, EntryKind};
use crate::util::error::StoreError;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Append-only store for the two journal logs.
#[derive(Debug, Clone)]
pub struct LogStore {
    /// Directory the backing files live in.
    dir: PathBuf,
}

impl LogStore {
    /// Create a store rooted at `dir`. The directory is not created here;
    /// append reports a normal I/O failure if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the backing file for `kind`.
    pub fn path_for(&self, kind: EntryKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Append one entry to `kind`'s log.
    ///
    /// `text` is never empty: the UI discards empty or cancelled input before
    /// it reaches the store (invariant, not re-validated here).
    pub fn append(&self, kind: EntryKind, text: &str) -> Result<(), StoreError> {
        let path = self.path_for(kind);

        // Existence must be checked before the open below creates the file.
        let is_new = !path.exists();

        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| StoreError::Append {
                path: path.clone(),
                source,
            })?;

        let map_err = |source| StoreError::Append {
            path: path.clone(),
            source,
        };

        if is_new {
            writeln!(file, "{}", kind.header()).map_err(map_err)?;
        }

        match kind {
            EntryKind::Message => writeln!(file, "{text}").map_err(map_err)?,
            // Summaries get a blank separator line after the text.
            EntryKind::Summary => writeln!(file, "{text}\n").map_err(map_err)?,
        }

        tracing::debug!(
            kind = kind.label(),
            path = %path.display(),
            new_file = is_new,
            "Entry appended"
        );
        Ok(())
    }

    /// Read every line of `kind`'s log, in file order, header included.
    ///
    /// Missing file: empty vec (normal first run). A read error partway
    /// through is logged at warn level and the lines read so far are
    /// returned — load never fails and never blocks startup.
    pub fn load_all(&self, kind: EntryKind) -> Vec<String> {
        let path = self.path_for(kind);

        let file = match std::fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(kind = kind.label(), path = %path.display(), "No log file yet");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    kind = kind.label(),
                    path = %path.display(),
                    error = %e,
                    "Cannot open log file; treating log as empty"
                );
                return Vec::new();
            }
        };

        let mut lines = Vec::new();
        for line_result in std::io::BufReader::new(file).lines() {
            match line_result {
                Ok(line) => lines.push(line),
                Err(e) => {
                    tracing::warn!(
                        kind = kind.label(),
                        path = %path.display(),
                        lines_read = lines.len(),
                        error = %e,
                        "Read error; returning lines read so far"
                    );
                    break;
                }
            }
        }

        tracing::debug!(kind = kind.label(), lines = lines.len(), "Log loaded");
        lines
    }

    /// Delete both backing files.
    ///
    /// Each deletion is attempted independently so a failure on one log
    /// leaves the other cleared (the per-kind outcomes are reported
    /// separately in the returned report).
    pub fn clear_all(&self) -> ClearReport {
        ClearReport {
            messages: self.remove_log(EntryKind::Message),
            summaries: self.remove_log(EntryKind::Summary),
        }
    }

    fn remove_log(&self, kind: EntryKind) -> Result<(), StoreError> {
        let path = self.path_for(kind);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(kind = kind.label(), path = %path.display(), "Log cleared");
                Ok(())
            }
            // Already-missing file: the log is already empty.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(kind = kind.label(), path = %path.display(), "Log already absent");
                Ok(())
            }
            Err(source) => Err(StoreError::Clear { path, source }),
        }
    }

    /// The journal directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, LogStore) {
        let dir = TempDir::new().unwrap();
        let store = LogStore::new(dir.path());
        (dir, store)
    }

    /// First append to a missing file writes the kind's header as line one.
    #[test]
    fn test_first_append_writes_header() {
        let (_dir, store) = store();
        store.append(EntryKind::Message, "hello").unwrap();

        let lines = store.load_all(EntryKind::Message);
        assert_eq!(lines[0], "Message Log");
        assert_eq!(lines[1], "hello");
    }

    /// The header is written once, not on every append.
    #[test]
    fn test_header_not_repeated() {
        let (_dir, store) = store();
        store.append(EntryKind::Message, "hello").unwrap();
        store.append(EntryKind::Message, "world").unwrap();

        let lines = store.load_all(EntryKind::Message);
        assert_eq!(lines, vec!["Message Log", "hello", "world"]);
    }

    /// Round trip: the last line loaded equals the text appended.
    #[test]
    fn test_message_round_trip() {
        let (_dir, store) = store();
        store.append(EntryKind::Message, "fixed the build").unwrap();

        let lines = store.load_all(EntryKind::Message);
        assert_eq!(lines.last().map(String::as_str), Some("fixed the build"));
    }

    /// A multi-line summary keeps its internal lines and gains a blank
    /// separator line before any subsequent summary.
    #[test]
    fn test_summary_blank_line_separator() {
        let (_dir, store) = store();
        store.append(EntryKind::Summary, "did X\ndid Y").unwrap();
        store.append(EntryKind::Summary, "did Z").unwrap();

        let lines = store.load_all(EntryKind::Summary);
        assert_eq!(
            lines,
            vec!["Summary Log", "did X", "did Y", "", "did Z", ""]
        );
    }

    /// Loading a kind that has never been written yields an empty sequence.
    #[test]
    fn test_load_missing_file_is_empty() {
        let (_dir, store) = store();
        assert!(store.load_all(EntryKind::Summary).is_empty());
    }

    /// clear_all followed by load_all yields empty for both kinds.
    #[test]
    fn test_clear_all_empties_both_logs() {
        let (_dir, store) = store();
        store.append(EntryKind::Message, "m1").unwrap();
        store.append(EntryKind::Summary, "s1").unwrap();

        let report = store.clear_all();
        assert!(report.all_ok(), "clear failed: {report:?}");
        assert!(store.load_all(EntryKind::Message).is_empty());
        assert!(store.load_all(EntryKind::Summary).is_empty());
    }

    /// Clearing when one file was never created still succeeds for both.
    #[test]
    fn test_clear_with_missing_file_is_ok() {
        let (_dir, store) = store();
        store.append(EntryKind::Message, "only messages").unwrap();

        let report = store.clear_all();
        assert!(report.all_ok());
        assert!(report.failures().is_empty());
    }

    /// Append into a nonexistent directory fails with an Append error that
    /// names the backing file; nothing is created.
    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-subdir");
        let store = LogStore::new(&missing);

        let err = store
            .append(EntryKind::Message, "hello")
            .expect_err("append into a missing directory must fail");
        assert!(err.path().ends_with("messages.txt"), "got {err}");
        assert!(store.load_all(EntryKind::Message).is_empty());
    }

    /// The two kinds are backed by distinct files and never bleed into
    /// each other.
    #[test]
    fn test_kinds_are_isolated() {
        let (_dir, store) = store();
        store.append(EntryKind::Message, "a message").unwrap();
        store.append(EntryKind::Summary, "a summary").unwrap();

        let messages = store.load_all(EntryKind::Message);
        let summaries = store.load_all(EntryKind::Summary);
        assert!(!messages.iter().any(|l| l == "a summary"));
        assert!(!summaries.iter().any(|l| l == "a message"));
    }
}
