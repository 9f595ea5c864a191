// WorkLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use crate::util::error::StoreError;

// =============================================================================
// Entry kind
// =============================================================================

/// The two kinds of journal entry, each backed by its own append-only file.
///
/// Messages are short one-line notes logged through the day; summaries are
/// free-form (possibly multi-line) end-of-day write-ups that only unlock once
/// local time passes the summary cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Message,
    Summary,
}

impl EntryKind {
    /// Both kinds, in display order.
    pub fn all() -> &'static [EntryKind] {
        &[EntryKind::Message, EntryKind::Summary]
    }

    /// Human-readable label used as the display prefix.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Message => "Message",
            EntryKind::Summary => "Summary",
        }
    }

    /// Name of the backing file, relative to the journal directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            EntryKind::Message => constants::MESSAGES_FILE_NAME,
            EntryKind::Summary => constants::SUMMARIES_FILE_NAME,
        }
    }

    /// One-line header written when the backing file is first created.
    pub fn header(&self) -> &'static str {
        match self {
            EntryKind::Message => constants::MESSAGE_LOG_HEADER,
            EntryKind::Summary => constants::SUMMARY_LOG_HEADER,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Display line
// =============================================================================

/// One rendered line of the session display.
///
/// Carries the kind it came from so the journal panel can colour message and
/// summary lines differently. The text already includes any label or
/// timestamp prefix; the panel renders it verbatim.
#[derive(Debug, Clone)]
pub struct DisplayLine {
    pub kind: EntryKind,
    pub text: String,
}

impl DisplayLine {
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// =============================================================================
// Clear report
// =============================================================================

/// Per-log outcome of a clear-all operation.
///
/// Each backing file is deleted independently; one failure must not prevent
/// the attempt on the other, so the two results are carried separately rather
/// than collapsed into a single error.
#[derive(Debug)]
pub struct ClearReport {
    pub messages: Result<(), StoreError>,
    pub summaries: Result<(), StoreError>,
}

impl ClearReport {
    /// True when both deletions succeeded (a missing file counts as success).
    pub fn all_ok(&self) -> bool {
        self.messages.is_ok() && self.summaries.is_ok()
    }

    /// The kinds whose deletion failed, with the failure text for each.
    pub fn failures(&self) -> Vec<(EntryKind, String)> {
        let mut out = Vec::new();
        if let Err(e) = &self.messages {
            out.push((EntryKind::Message, e.to_string()));
        }
        if let Err(e) = &self.summaries {
            out.push((EntryKind::Summary, e.to_string()));
        }
        out
    }
}
