//! Configuration and settings module.
//!
//! This module handles persistent settings: chart chrome colors, the
//! recent files list, the restored window size, and the default chart
//! mode. Settings live as JSON in the user's config directory.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::chart::ChartMode;

/// Settings filename for persistence.
const SETTINGS_FILENAME: &str = "config.json";

/// Maximum number of recent files to track.
const MAX_RECENT_FILES: usize = 10;

/// Colors for the chart chrome (backgrounds, grid, text).
///
/// Tag colors are assigned per journal and are not part of the settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartColors {
    /// Chart plot area background color
    pub background: [u8; 3],
    /// Axis label strip background color
    pub margin_background: [u8; 3],
    /// Major grid line color
    pub grid_major: [u8; 3],
    /// Minor grid line color
    pub grid_minor: [u8; 3],
    /// Axis tick label color
    pub text_label: [u8; 3],
    /// Placeholder/inactive text color
    pub text_dim: [u8; 3],
    /// Success status color
    pub status_success: [u8; 3],
    /// Error status color
    pub status_error: [u8; 3],
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            background: [30, 30, 35],
            margin_background: [40, 40, 45],
            grid_major: [60, 60, 65],
            grid_minor: [45, 45, 50],
            text_label: [211, 211, 211],
            text_dim: [105, 105, 105],
            status_success: [76, 175, 80],
            status_error: [244, 67, 54],
        }
    }
}

impl ChartColors {
    /// Convert an RGB array to a Color32.
    pub fn to_color32(rgb: [u8; 3]) -> Color32 {
        Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Get background color as Color32.
    pub fn background_color(&self) -> Color32 {
        Self::to_color32(self.background)
    }

    /// Get margin background color as Color32.
    pub fn margin_background_color(&self) -> Color32 {
        Self::to_color32(self.margin_background)
    }

    /// Get major grid color as Color32.
    pub fn grid_major_color(&self) -> Color32 {
        Self::to_color32(self.grid_major)
    }

    /// Get minor grid color as Color32.
    pub fn grid_minor_color(&self) -> Color32 {
        Self::to_color32(self.grid_minor)
    }

    /// Get tick label color as Color32.
    pub fn text_label_color(&self) -> Color32 {
        Self::to_color32(self.text_label)
    }

    /// Get dim text color as Color32.
    pub fn text_dim_color(&self) -> Color32 {
        Self::to_color32(self.text_dim)
    }

    /// Get success status color as Color32.
    pub fn status_success_color(&self) -> Color32 {
        Self::to_color32(self.status_success)
    }

    /// Get error status color as Color32.
    pub fn status_error_color(&self) -> Color32 {
        Self::to_color32(self.status_error)
    }
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Chart chrome colors.
    pub colors: ChartColors,

    /// Chart mode shown when a file is first loaded.
    #[serde(default)]
    pub default_chart: ChartMode,

    /// Recently opened files (most recent first).
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,

    /// Window size to restore on startup (width, height).
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            colors: ChartColors::default(),
            default_chart: ChartMode::default(),
            recent_files: Vec::new(),
            window_size: None,
        }
    }
}

impl AppSettings {
    /// Get the settings file path in the user's config directory.
    fn get_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("journal-times");
            path.push(SETTINGS_FILENAME);
            path
        })
    }

    /// Load settings from disk, returning defaults if loading fails.
    pub fn load() -> Self {
        Self::get_settings_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to disk.
    ///
    /// Returns an error message if saving fails.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_settings_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&path, content).map_err(|e| format!("Failed to write settings file: {}", e))
    }

    /// Add a file to the recent files list.
    ///
    /// The file is moved to the front of the list. If it already exists, it
    /// is moved to the front. The list is capped at MAX_RECENT_FILES
    /// entries.
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    /// Clear the recent files list.
    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
    }

    /// Set the window size.
    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_size = Some((width, height));
    }
}
