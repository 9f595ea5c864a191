// WorkLog - ui/theme.rs
//
// Colour scheme, entry-kind colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::EntryKind;
use egui::Color32;

/// Colour for a given entry kind in the journal display.
pub fn kind_colour(kind: EntryKind) -> Color32 {
    match kind {
        EntryKind::Message => Color32::from_rgb(209, 213, 219), // Gray 300
        EntryKind::Summary => Color32::from_rgb(252, 211, 77),  // Amber 300
    }
}

/// Layout constants.
pub const PROMPT_MIN_WIDTH: f32 = 380.0;
pub const SUMMARY_PROMPT_ROWS: usize = 6;
pub const CONTROLS_SPACING: f32 = 8.0;
