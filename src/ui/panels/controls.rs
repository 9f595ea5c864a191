// WorkLog - ui/panels/controls.rs
//
// The command row: Add Message, Add Summary (cutoff-gated), Clear.

use crate::app::state::AppState;
use crate::core::cutoff;
use crate::ui::theme;

/// Render the command buttons.
///
/// `summary_allowed` is the cutoff gate, already evaluated against the wall
/// clock this frame by the caller.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, summary_allowed: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::CONTROLS_SPACING;

        if ui.button("Add Message").clicked() {
            state.message_input.clear();
            state.show_message_prompt = true;
        }

        let summary_button = ui
            .add_enabled(summary_allowed, egui::Button::new("Add Summary"))
            .on_disabled_hover_text(cutoff::locked_hint());
        if summary_button.clicked() {
            state.summary_input.clear();
            state.show_summary_prompt = true;
        }

        if ui.button("Clear\u{2026}").clicked() {
            state.show_clear_confirm = true;
        }
    });
}
