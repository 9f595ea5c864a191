// WorkLog - app/state.rs
//
// Application state management. Holds the log store, the session display,
// the prompt flags and input buffers, and the status line.
// Owned by the eframe::App implementation; every event handler receives
// an explicit &mut AppState rather than touching shared globals.

use crate::core::model::{DisplayLine, EntryKind};
use crate::core::store::LogStore;
use crate::util::constants;
use chrono::Local;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The append-only log store backing the session.
    pub store: LogStore,

    /// Rendered lines of the journal display, in insertion order.
    pub display: Vec<DisplayLine>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Pending store failure to surface as a blocking notification.
    pub error_notice: Option<String>,

    /// Whether the Add Message prompt is open.
    pub show_message_prompt: bool,

    /// Whether the Add Summary prompt is open.
    pub show_summary_prompt: bool,

    /// Whether the clear-all confirmation dialog is open.
    pub show_clear_confirm: bool,

    /// Input buffer for the Add Message prompt.
    pub message_input: String,

    /// Input buffer for the Add Summary prompt.
    pub summary_input: String,

    /// One-shot flag: scroll the journal to the bottom on the next frame.
    pub scroll_to_bottom: bool,
}

impl AppState {
    /// Create initial state around `store`.
    pub fn new(store: LogStore) -> Self {
        Self {
            store,
            display: Vec::new(),
            status_message: "Ready.".to_string(),
            error_notice: None,
            show_message_prompt: false,
            show_summary_prompt: false,
            show_clear_confirm: false,
            message_input: String::new(),
            summary_input: String::new(),
            scroll_to_bottom: false,
        }
    }

    /// Reload both logs from disk into the display (startup path).
    ///
    /// Every raw line comes back prefixed with its kind label, header line
    /// included; messages are prefixed inline, summaries get a label line of
    /// their own followed by a blank line.
    pub fn load_existing(&mut self) {
        self.display.clear();

        for line in self.store.load_all(EntryKind::Message) {
            self.display
                .push(DisplayLine::new(EntryKind::Message, format!("Message: {line}")));
        }
        for line in self.store.load_all(EntryKind::Summary) {
            self.display
                .push(DisplayLine::new(EntryKind::Summary, "Summary:"));
            self.display.push(DisplayLine::new(EntryKind::Summary, line));
            self.display.push(DisplayLine::new(EntryKind::Summary, ""));
        }

        if !self.display.is_empty() {
            self.scroll_to_bottom = true;
        }
        tracing::info!(lines = self.display.len(), "Existing entries loaded");
    }

    /// Append a message entry. `text` is never empty; the prompt discards
    /// empty or cancelled input before it reaches the state.
    ///
    /// The display is only updated when the write succeeded; on failure the
    /// error is queued for a blocking notification and the display is left
    /// untouched.
    pub fn add_message(&mut self, text: &str) {
        match self.store.append(EntryKind::Message, text) {
            Ok(()) => {
                self.display.push(DisplayLine::new(
                    EntryKind::Message,
                    format!("{} - Message: {text}", now_stamp()),
                ));
                self.scroll_to_bottom = true;
                self.status_message = "Message logged.".to_string();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save message");
                self.error_notice = Some(format!("Error saving message: {e}"));
                self.status_message = "Message not saved.".to_string();
            }
        }
    }

    /// Append a summary entry. `text` is never empty and may span multiple
    /// lines; the prompt trims trailing newlines so the blank-line separator
    /// between summaries stays intact.
    pub fn add_summary(&mut self, text: &str) {
        match self.store.append(EntryKind::Summary, text) {
            Ok(()) => {
                self.display.push(DisplayLine::new(
                    EntryKind::Summary,
                    format!("{} - Summary:", now_stamp()),
                ));
                for line in text.lines() {
                    self.display.push(DisplayLine::new(EntryKind::Summary, line));
                }
                self.display.push(DisplayLine::new(EntryKind::Summary, ""));
                self.scroll_to_bottom = true;
                self.status_message = "Summary logged.".to_string();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save summary");
                self.error_notice = Some(format!("Error saving summary: {e}"));
                self.status_message = "Summary not saved.".to_string();
            }
        }
    }

    /// Clear both logs (already confirmed by the user).
    ///
    /// Each file is deleted independently; the display is emptied either way
    /// (the next startup reloads whatever survived), and any per-log failures
    /// are named in a single notification.
    pub fn clear_all(&mut self) {
        let report = self.store.clear_all();
        self.display.clear();

        if report.all_ok() {
            self.status_message = "All messages and summaries cleared.".to_string();
        } else {
            let failed: Vec<String> = report
                .failures()
                .into_iter()
                .map(|(kind, err)| format!("{kind}: {err}"))
                .collect();
            tracing::error!(failures = ?failed, "Clear completed with failures");
            self.error_notice = Some(format!(
                "Error clearing data:\n{}",
                failed.join("\n")
            ));
            self.status_message = "Clear completed with errors.".to_string();
        }
    }
}

/// Current local time formatted for the live session display (HH:MM).
fn now_stamp() -> String {
    Local::now().format(constants::DISPLAY_TIME_FORMAT).to_string()
}
