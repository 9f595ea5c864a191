// WorkLog - ui/panels/prompts.rs
//
// Modal-ish prompt windows: message input, summary input, clear
// confirmation, and the blocking store-error notification.
//
// Empty (after trim) or cancelled input is discarded without touching
// the store.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render whichever prompt windows are currently open.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    message_prompt(ctx, state);
    summary_prompt(ctx, state);
    clear_confirm(ctx, state);
    error_notice(ctx, state);
}

fn message_prompt(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_message_prompt {
        return;
    }

    egui::Window::new("Add Message")
        .collapsible(false)
        .resizable(false)
        .min_width(theme::PROMPT_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Enter what you are thinking now:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.message_input)
                    .desired_width(theme::PROMPT_MIN_WIDTH),
            );
            response.request_focus();

            // Enter submits, matching the input-dialog feel of the prompt.
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    // The persisted line is exactly the raw input; the trim
                    // only decides whether there is anything to keep.
                    let text = state.message_input.clone();
                    state.show_message_prompt = false;
                    if !text.trim().is_empty() {
                        state.add_message(&text);
                    }
                }
                if ui.button("Cancel").clicked() {
                    state.show_message_prompt = false;
                }
            });
        });
}

fn summary_prompt(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary_prompt {
        return;
    }

    egui::Window::new("Add Summary")
        .collapsible(false)
        .resizable(false)
        .min_width(theme::PROMPT_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Enter a summary of the day:");
            ui.add(
                egui::TextEdit::multiline(&mut state.summary_input)
                    .desired_width(theme::PROMPT_MIN_WIDTH)
                    .desired_rows(theme::SUMMARY_PROMPT_ROWS),
            );

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    // Trailing newlines would break the blank-line separator
                    // between summaries, so the end is trimmed before saving.
                    let text = state.summary_input.trim_end().to_string();
                    state.show_summary_prompt = false;
                    if !text.trim().is_empty() {
                        state.add_summary(&text);
                    }
                }
                if ui.button("Cancel").clicked() {
                    state.show_summary_prompt = false;
                }
            });
        });
}

fn clear_confirm(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_clear_confirm {
        return;
    }

    egui::Window::new("Clear Data")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Are you sure you want to clear all messages and summaries?");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    state.show_clear_confirm = false;
                    state.clear_all();
                }
                if ui.button("Cancel").clicked() {
                    state.show_clear_confirm = false;
                }
            });
        });
}

/// Blocking error notification for failed store operations.
///
/// The operation is never retried; dismissing the notice is the only way
/// forward (the process itself never aborts on a file error).
fn error_notice(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.error_notice.clone() else {
        return;
    };

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(egui::Color32::from_rgb(248, 113, 113), &notice);
            ui.add_space(4.0);
            if ui.button("Dismiss").clicked() {
                state.error_notice = None;
            }
        });
}
