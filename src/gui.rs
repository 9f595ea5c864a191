// WorkLog - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the journal display, the command row, and the prompt
// windows, and keeps the summary cutoff gate fresh.

use crate::app::state::AppState;
use crate::core::cutoff;
use crate::ui;
use crate::util::constants;

/// The WorkLog application.
pub struct WorkLogApp {
    pub state: AppState,
}

impl WorkLogApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for WorkLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The gate is recomputed from the wall clock every frame; while it is
        // closed, schedule a periodic repaint so the Add Summary button flips
        // at the cutoff even when the user is idle. No background task.
        let summary_allowed = cutoff::summary_allowed_now();
        if !summary_allowed {
            ctx.request_repaint_after(std::time::Duration::from_secs(
                constants::CUTOFF_RECHECK_INTERVAL_SECS,
            ));
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if summary_allowed {
                        ui.label("Summaries open");
                    } else {
                        ui.label(cutoff::locked_hint());
                    }
                });
            });
        });

        // Command row
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::controls::render(ui, &mut self.state, summary_allowed);
            ui.add_space(4.0);
        });

        // Central panel (journal display)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::journal::render(ui, &mut self.state);
        });

        // Prompt windows (modal-ish)
        ui::panels::prompts::render(ctx, &mut self.state);
    }
}
