// WorkLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. config.toml loading and validation
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use worklog::app;
pub use worklog::core;
pub use worklog::platform;
pub use worklog::ui;
pub use worklog::util;

use clap::Parser;
use std::path::PathBuf;

/// WorkLog - single-user desktop work journal.
///
/// Log short timestamped messages through the day; once local time passes
/// the evening cutoff, append a summary of the day. Entries persist to two
/// append-only text files and are redisplayed on startup.
#[derive(Parser, Debug)]
#[command(name = "WorkLog", version, about)]
struct Cli {
    /// Directory the journal files live in (default: working directory,
    /// unless overridden by [store] directory in config.toml).
    dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Apply theme and font size from the validated config to the egui context.
fn apply_ui_config(ctx: &egui::Context, config: &platform::config::AppConfig) {
    use egui::{FontFamily, FontId, TextStyle};

    if config.dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }

    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(config.font_size, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::new(config.font_size, FontFamily::Proportional));
    style.text_styles.insert(
        TextStyle::Monospace,
        FontId::new(config.font_size, FontFamily::Monospace),
    );
    ctx.set_style(style);
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging so the
    // configured level can participate in the filter priority.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "WorkLog starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // Journal directory: CLI override > config > working directory.
    let journal_dir = cli
        .dir
        .or_else(|| config.journal_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    tracing::info!(dir = %journal_dir.display(), "Journal directory resolved");

    // Create application state and reload existing entries for display.
    let store = core::store::LogStore::new(journal_dir);
    let mut state = app::state::AppState::new(store);
    state.load_existing();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            apply_ui_config(&cc.egui_ctx, &config);
            Ok(Box::new(gui::WorkLogApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch WorkLog GUI: {e}");
        std::process::exit(1);
    }
}
