// WorkLog - ui/panels/journal.rs
//
// The journal display: a read-only monospace view of every loaded and
// live-appended entry, newest at the bottom.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the journal display (central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.display.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No entries yet. Use Add Message to log your first note.");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for line in &state.display {
                ui.label(
                    egui::RichText::new(&line.text)
                        .monospace()
                        .color(theme::kind_colour(line.kind)),
                );
            }

            // One-shot: mirror the original's caret-to-end behaviour after
            // an append or a startup load.
            if state.scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                state.scroll_to_bottom = false;
            }
        });
}
