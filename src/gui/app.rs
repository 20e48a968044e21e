//! Main application state and GUI logic.
//!
//! This module defines the main application struct and implements the
//! eframe::App trait: toolbar, chart panel, status messages, file loading,
//! and the error dialog wiring.

use eframe::egui;
use std::path::{Path, PathBuf};

use crate::core::chart::{self, ChartMode};
use crate::core::color::TagColors;
use crate::core::entry::Journal;
use crate::core::error::{self, AppError};
use crate::core::parser;
use crate::core::sample;
use crate::core::settings::AppSettings;

use super::dialogs::{ErrorDialogAction, ErrorDialogRenderer, ErrorDialogState};
use super::dot_plot::DotPlotRenderer;
use super::histogram::HistogramRenderer;

/// File extensions accepted by the open dialog and drag-and-drop.
const SUPPORTED_EXTENSIONS: [&str; 1] = ["json"];

/// Size of the generated sample export (days, entries per day).
const SAMPLE_SIZE: (u32, u32) = (100, 3);

/// Application state indicating the current loading status.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AppState {
    /// No file has been loaded yet (initial state)
    #[default]
    NoFileLoaded,
    /// A journal has been loaded and a chart is shown
    Ready,
    /// The last load attempt failed
    Error,
}

impl AppState {
    /// Returns true if the chart mode selector should be enabled.
    pub fn toolbar_enabled(&self) -> bool {
        matches!(self, AppState::Ready)
    }
}

/// Kind of status message to display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    /// Success message (shown in green)
    Success,
    /// Error message (shown in red)
    Error,
}

/// A status message with its kind and timestamp.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Kind of message (success/error)
    pub kind: StatusKind,
    /// When the message was created (for auto-dismiss)
    pub created_at: std::time::Instant,
}

impl StatusMessage {
    /// Create a new status message.
    pub fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: std::time::Instant::now(),
        }
    }

    /// Duration to show status messages before auto-dismissing.
    const DISPLAY_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

    /// Check if the message should still be displayed.
    pub fn is_visible(&self) -> bool {
        self.created_at.elapsed() < Self::DISPLAY_DURATION
    }

    /// Time left before the message auto-dismisses.
    pub fn time_until_dismiss(&self) -> std::time::Duration {
        Self::DISPLAY_DURATION.saturating_sub(self.created_at.elapsed())
    }
}

/// Main application state and GUI logic.
pub struct JournalTimesApp {
    /// Current application state
    state: AppState,
    /// Loaded journal (Some when state is Ready)
    journal: Option<Journal>,
    /// Tag colors for the loaded journal, computed once per load
    tag_colors: TagColors,
    /// Path to the currently loaded file
    loaded_file_path: Option<PathBuf>,
    /// Which chart the central panel shows
    chart_mode: ChartMode,
    /// Status message to display (success/error notifications)
    status_message: Option<StatusMessage>,
    /// Persistent settings
    settings: AppSettings,
    /// Settings changed since the last save
    settings_dirty: bool,
    /// Error dialog state
    error_dialog: ErrorDialogState,
}

impl JournalTimesApp {
    /// Create a new application instance from already-loaded settings.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self::from_settings(settings)
    }

    /// Build the app from already-loaded settings.
    fn from_settings(settings: AppSettings) -> Self {
        Self {
            state: AppState::NoFileLoaded,
            journal: None,
            tag_colors: TagColors::default(),
            loaded_file_path: None,
            chart_mode: settings.default_chart,
            status_message: None,
            settings,
            settings_dirty: false,
            error_dialog: ErrorDialogState::new(),
        }
    }

    /// Open a file dialog and load the selected export.
    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Day One JSON export", &SUPPORTED_EXTENSIONS)
            .set_title("Select Journal Export")
            .pick_file()
        {
            self.load_file(path);
        }
    }

    /// Load a journal export from the given path.
    fn load_file(&mut self, path: PathBuf) {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                self.set_error(error::from_io_error(path, e));
                return;
            }
        };

        match parser::parse_json(&content) {
            Ok(journal) => {
                let entry_count = journal.len();
                let tag_count = journal.tags().len();
                self.tag_colors = TagColors::from_journal(&journal);
                self.journal = Some(journal);
                self.loaded_file_path = Some(path.clone());
                self.state = AppState::Ready;
                self.settings.add_recent_file(path.clone());
                self.settings_dirty = true;
                self.status_message = Some(StatusMessage::new(
                    format!(
                        "Loaded: {} ({} entries, {} tags)",
                        file_display_name(&path),
                        entry_count,
                        tag_count
                    ),
                    StatusKind::Success,
                ));
            }
            Err(e) => {
                self.set_error(error::from_parse_error(Some(path), &e));
            }
        }
    }

    /// Load a file dropped onto the window, rejecting unsupported types.
    fn load_dropped_file(&mut self, path: PathBuf) {
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));

        if supported {
            self.load_file(path);
        } else {
            self.set_error(AppError::UnsupportedFileType {
                path,
                expected: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            });
        }
    }

    /// Set the error state, open the dialog, and show a status message.
    fn set_error(&mut self, error: AppError) {
        self.state = AppState::Error;
        self.status_message = Some(StatusMessage::new(
            error.brief_description(),
            StatusKind::Error,
        ));
        self.error_dialog.show(error);
    }

    /// Clear error state and return to the appropriate state.
    fn clear_error(&mut self) {
        if self.journal.is_some() {
            self.state = AppState::Ready;
        } else {
            self.state = AppState::NoFileLoaded;
        }
    }

    /// Switch the displayed chart; also becomes the default for next start.
    fn set_chart_mode(&mut self, mode: ChartMode) {
        if self.chart_mode != mode {
            self.chart_mode = mode;
            self.settings.default_chart = mode;
            self.settings_dirty = true;
        }
    }

    /// Record the current window size in memory.
    ///
    /// Resizing produces a new size every frame, so the value is only
    /// written to disk on exit, not here.
    fn track_window_size(&mut self, width: f32, height: f32) {
        if self.settings.window_size != Some((width, height)) {
            self.settings.set_window_size(width, height);
        }
    }

    /// Save settings if anything changed since the last save.
    fn persist_settings_if_dirty(&mut self) {
        if !self.settings_dirty {
            return;
        }
        self.settings_dirty = false;

        if let Err(reason) = self.settings.save() {
            let error = AppError::SettingsSaveError { reason };
            self.status_message = Some(StatusMessage::new(
                error.brief_description(),
                StatusKind::Error,
            ));
        }
    }
}

/// Display name of a file, falling back to the full path.
fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

impl eframe::App for JournalTimesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        // Remember the window size for the next start
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.track_window_size(rect.width(), rect.height());
        }

        self.render_toolbar(ctx);
        self.render_chart_panel(ctx);
        self.render_error_dialog(ctx);

        self.persist_settings_if_dirty();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Window size changes are only tracked in memory; flush them now
        self.settings_dirty = true;
        self.persist_settings_if_dirty();
    }
}

impl JournalTimesApp {
    /// Handle keyboard shortcuts: Ctrl+O opens a file, Ctrl+Q/Ctrl+W quit.
    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (open, quit) = ctx.input(|i| {
            let cmd = i.modifiers.command;
            (
                cmd && i.key_pressed(egui::Key::O),
                cmd && (i.key_pressed(egui::Key::Q) || i.key_pressed(egui::Key::W)),
            )
        });

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else if open {
            self.open_file_dialog();
        }
    }

    /// Load files dropped onto the window.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        // Only the first dropped file is loaded; the journal is one file
        if let Some(path) = dropped.into_iter().next() {
            self.load_dropped_file(path);
        }
    }

    /// Render the top toolbar section.
    ///
    /// Contains file loading, the recent files menu, the chart mode
    /// selector, and the status message.
    fn render_toolbar(&mut self, ctx: &egui::Context) {
        let toolbar_enabled = self.state.toolbar_enabled();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Journal Times");
                ui.separator();

                if ui.button("📂 Open File").on_hover_text("Ctrl+O").clicked() {
                    self.open_file_dialog();
                }

                self.render_recent_files_menu(ui);

                ui.separator();

                // Chart mode tabs (enabled only when a journal is loaded)
                ui.add_enabled_ui(toolbar_enabled, |ui| {
                    let mut selected: Option<ChartMode> = None;
                    for mode in ChartMode::ALL {
                        if ui
                            .selectable_label(self.chart_mode == mode, mode.label())
                            .clicked()
                        {
                            selected = Some(mode);
                        }
                    }
                    if let Some(mode) = selected {
                        self.set_chart_mode(mode);
                    }
                });

                // Show status message in toolbar (right-aligned)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_status_message(ui);
                });
            });
        });
    }

    /// Render the recent files dropdown menu.
    fn render_recent_files_menu(&mut self, ui: &mut egui::Ui) {
        let mut picked: Option<PathBuf> = None;
        let mut clear = false;

        ui.menu_button("Recent ⏷", |ui| {
            if self.settings.recent_files.is_empty() {
                ui.label("(no recent files)");
            } else {
                for path in &self.settings.recent_files {
                    if ui.button(file_display_name(path)).clicked() {
                        picked = Some(path.clone());
                        ui.close();
                    }
                }
                ui.separator();
                if ui.button("Clear list").clicked() {
                    clear = true;
                    ui.close();
                }
            }
        });

        if let Some(path) = picked {
            self.load_file(path);
        }
        if clear {
            self.settings.clear_recent_files();
            self.settings_dirty = true;
        }
    }

    /// Render the status message if one is active.
    fn render_status_message(&mut self, ui: &mut egui::Ui) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|msg| !msg.is_visible())
        {
            self.status_message = None;
            return;
        }

        let msg_info = self.status_message.as_ref().map(|msg| {
            let color = match msg.kind {
                StatusKind::Success => self.settings.colors.status_success_color(),
                StatusKind::Error => self.settings.colors.status_error_color(),
            };
            (color, msg.text.clone(), msg.time_until_dismiss())
        });

        if let Some((color, text, remaining)) = msg_info {
            // Wake up at the deadline so the message disappears even if
            // the window receives no input until then
            ui.ctx().request_repaint_after(remaining);

            let mut dismiss_clicked = false;

            ui.horizontal(|ui| {
                if ui.small_button("✕").clicked() {
                    dismiss_clicked = true;
                }
                ui.colored_label(color, &text);
            });

            if dismiss_clicked {
                self.status_message = None;
            }
        }
    }

    /// Render the central chart panel.
    fn render_chart_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match self.state {
            AppState::NoFileLoaded | AppState::Error => {
                if self.journal.is_some() {
                    // Keep the last chart visible behind the error dialog
                    self.render_loaded_chart(ui);
                } else {
                    self.render_no_file_placeholder(ui);
                }
            }
            AppState::Ready => {
                self.render_loaded_chart(ui);
            }
        });
    }

    /// Render the placeholder view when no file is loaded.
    fn render_no_file_placeholder(&mut self, ui: &mut egui::Ui) {
        let mut generate_clicked = false;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            ui.heading("📖 No Journal Loaded");
            ui.add_space(10.0);
            ui.label("Drag and drop a Day One JSON export to get started.");
            ui.label("Or use the \"Open File\" button in the toolbar (Ctrl+O).");

            ui.add_space(20.0);
            if ui
                .button("💾 Generate Sample Export")
                .on_hover_text("Write a dummy export to try the charts")
                .clicked()
            {
                generate_clicked = true;
            }

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(10.0);
            ui.colored_label(
                self.settings.colors.text_dim_color(),
                "The dot plot shows when each entry was written; \
                 the histogram shows how entries spread over the day.",
            );
        });

        if generate_clicked {
            self.generate_sample_export();
        }
    }

    /// Write a sample export to a user-chosen path and load it.
    fn generate_sample_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Day One JSON export", &SUPPORTED_EXTENSIONS)
            .set_title("Save Sample Export")
            .set_file_name("Dummy.json")
            .save_file()
        else {
            return;
        };

        let (days, per_day) = SAMPLE_SIZE;
        match sample::write_to(&path, days, per_day) {
            Ok(()) => self.load_file(path),
            Err(e) => self.set_error(AppError::IoError {
                path: Some(path),
                reason: format!("Failed to write sample export: {}", e),
            }),
        }
    }

    /// Render the chart view when a journal is loaded.
    fn render_loaded_chart(&self, ui: &mut egui::Ui) {
        let Some(ref journal) = self.journal else {
            return;
        };

        // File info header
        ui.horizontal(|ui| {
            ui.heading(match self.chart_mode {
                ChartMode::DotPlot => "📊 Entries by Date and Time of Day",
                ChartMode::Histogram => "📊 Entries per Hour of Day",
            });
            ui.separator();

            if let Some(ref path) = self.loaded_file_path {
                ui.label(format!("File: {}", file_display_name(path)));
                ui.separator();
            }

            ui.label(format!(
                "Entries: {} | Tags: {}",
                journal.len(),
                journal.tags().len()
            ));

            if let Some(ref version) = journal.metadata.version {
                ui.separator();
                ui.label(format!("Export v{}", version));
            }
        });

        ui.separator();
        ui.add_space(5.0);

        match self.chart_mode {
            ChartMode::DotPlot => {
                let data = chart::dot_points(journal);
                DotPlotRenderer::new(&data, &self.tag_colors, &self.settings.colors).render(ui);
            }
            ChartMode::Histogram => {
                let histogram = chart::hour_histogram(journal);
                HistogramRenderer::new(&histogram, &self.tag_colors, &self.settings.colors)
                    .render(ui);
            }
        }
    }

    /// Render the error dialog and react to its buttons.
    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let retry_path = self
            .error_dialog
            .error
            .as_ref()
            .and_then(|e| e.file_path().cloned());

        match ErrorDialogRenderer::new(&mut self.error_dialog).render(ctx) {
            Some(ErrorDialogAction::Retry) => {
                self.clear_error();
                if let Some(path) = retry_path {
                    self.load_file(path);
                }
            }
            Some(ErrorDialogAction::Close) => {
                self.clear_error();
            }
            None => {}
        }
    }
}
