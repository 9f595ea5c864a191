// WorkLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "WorkLog";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "WorkLog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log store
// =============================================================================

/// Backing file for message entries, relative to the journal directory.
pub const MESSAGES_FILE_NAME: &str = "messages.txt";

/// Backing file for summary entries, relative to the journal directory.
pub const SUMMARIES_FILE_NAME: &str = "summaries.txt";

/// Header written as the first line of a fresh messages file.
pub const MESSAGE_LOG_HEADER: &str = "Message Log";

/// Header written as the first line of a fresh summaries file.
pub const SUMMARY_LOG_HEADER: &str = "Summary Log";

// =============================================================================
// Summary cutoff
// =============================================================================

/// Local hour (24h clock) from which summary logging is permitted.
pub const SUMMARY_CUTOFF_HOUR: u32 = 21;

/// Minute component of the summary cutoff.
pub const SUMMARY_CUTOFF_MINUTE: u32 = 0;

/// How often the UI schedules a repaint to re-evaluate the cutoff gate while
/// it is still closed.  The gate itself is recomputed from the wall clock at
/// render time; this interval only bounds how stale the affordance can get
/// when the user is idle.
pub const CUTOFF_RECHECK_INTERVAL_SECS: u64 = 60;

// =============================================================================
// Display
// =============================================================================

/// chrono format string for the live session timestamp prefix (HH:MM).
pub const DISPLAY_TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
