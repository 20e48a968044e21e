//! Journal Times - Visualize when Day One journal entries were written.

mod core;
mod gui;

use crate::core::settings::AppSettings;
use crate::gui::JournalTimesApp;

const USAGE: &str = "\
Display graphs of journal entry times from a Day One JSON export.

usage: journal-times [-h]

optional arguments:
  -h, --help            show this help message and exit";

fn main() -> eframe::Result<()> {
    if std::env::args().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let settings = AppSettings::load();
    let window_size = settings.window_size.unwrap_or((1024.0, 768.0));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([window_size.0, window_size.1])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Journal Times",
        options,
        Box::new(move |cc| Ok(Box::new(JournalTimesApp::new(cc, settings)))),
    )
}
