//! GUI module for the journal viewer.
//!
//! This module contains the egui-based user interface: the main
//! application window, toolbar, chart renderers, and dialogs.

mod app;
mod dialogs;
mod dot_plot;
mod histogram;

pub use app::JournalTimesApp;
