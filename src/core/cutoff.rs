// WorkLog - core/cutoff.rs
//
// The summary cutoff gate: summary logging is permitted from 21:00 local
// time onward. The boundary is inclusive — at exactly 21:00 the affordance
// is enabled.
//
// The gate is recomputed from the wall clock at render time; there is no
// background task (the UI merely schedules a periodic repaint while the
// gate is closed so the flip appears without user interaction).

use crate::util::constants;
use chrono::{Local, NaiveTime, Timelike};

/// The fixed local time from which summary logging is permitted.
pub fn cutoff() -> NaiveTime {
    // Both components are in-range constants, so this cannot fail.
    NaiveTime::from_hms_opt(
        constants::SUMMARY_CUTOFF_HOUR,
        constants::SUMMARY_CUTOFF_MINUTE,
        0,
    )
    .unwrap_or(NaiveTime::MIN)
}

/// Whether summary logging is permitted at time `now`.
pub fn summary_allowed(now: NaiveTime) -> bool {
    now >= cutoff()
}

/// Whether summary logging is permitted right now (local wall clock).
pub fn summary_allowed_now() -> bool {
    summary_allowed(Local::now().time())
}

/// Human-readable note for the disabled affordance's hover text.
pub fn locked_hint() -> String {
    let c = cutoff();
    format!(
        "Summaries unlock at {:02}:{:02}",
        c.hour(),
        c.minute()
    )
}
