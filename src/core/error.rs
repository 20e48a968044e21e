//! Application error types for user-facing error handling.
//!
//! This module defines error types that are designed to be displayed to
//! users in error dialogs, with detailed information and retry support
//! where retrying can help.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application-level errors that can be displayed to users.
///
/// Every load failure is terminal for that attempt; the only recovery is
/// the user picking a file again (or pressing Retry for file errors).
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// File was not found at the specified path
    #[error("File not found")]
    FileNotFound {
        /// Path to the file that was not found
        path: PathBuf,
    },

    /// File exists but cannot be read (permissions, locked, etc.)
    #[error("Cannot read file")]
    FileReadError {
        /// Path to the file that could not be read
        path: PathBuf,
        /// Reason for the failure
        reason: String,
    },

    /// File content is not valid JSON or does not match the export schema
    #[error("Invalid export format")]
    InvalidFormat {
        /// Path to the file with invalid content
        path: Option<PathBuf>,
        /// Description of what's wrong
        message: String,
        /// Line number where the error occurred (1-indexed, for JSON)
        line: Option<usize>,
        /// Column/position where the error occurred
        column: Option<usize>,
    },

    /// File extension is not recognized (drag-and-drop of non-JSON files)
    #[error("Unsupported file type")]
    UnsupportedFileType {
        /// Path to the file
        path: PathBuf,
        /// Expected file extensions
        expected: Vec<String>,
    },

    /// Generic I/O error
    #[error("I/O error")]
    IoError {
        /// Path related to the error, if any
        path: Option<PathBuf>,
        /// Description of what went wrong
        reason: String,
    },

    /// Settings could not be saved
    #[error("Settings save error")]
    SettingsSaveError {
        /// Description of the failure
        reason: String,
    },
}

impl AppError {
    /// Returns true if this error supports the retry operation.
    ///
    /// File-related errors can potentially be retried after the user fixes
    /// the underlying issue (e.g., file permissions, file location).
    pub fn supports_retry(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::FileReadError { .. }
                | Self::IoError { path: Some(_), .. }
        )
    }

    /// Get the file path associated with this error, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileNotFound { path } => Some(path),
            Self::FileReadError { path, .. } => Some(path),
            Self::InvalidFormat { path, .. } => path.as_ref(),
            Self::UnsupportedFileType { path, .. } => Some(path),
            Self::IoError { path, .. } => path.as_ref(),
            Self::SettingsSaveError { .. } => None,
        }
    }

    /// Get the title for the error dialog.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "File Not Found",
            Self::FileReadError { .. } => "Cannot Read File",
            Self::InvalidFormat { .. } => "Invalid Export Format",
            Self::UnsupportedFileType { .. } => "Unsupported File Type",
            Self::IoError { .. } => "I/O Error",
            Self::SettingsSaveError { .. } => "Settings Error",
        }
    }

    /// Get a brief description of the error suitable for display.
    pub fn brief_description(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("The file '{}' could not be found.", file_name(path))
            }
            Self::FileReadError { path, .. } => {
                format!("Could not read the file '{}'.", file_name(path))
            }
            Self::InvalidFormat { message, .. } => message.clone(),
            Self::UnsupportedFileType { expected, .. } => {
                format!(
                    "Please use a file with one of these extensions: {}",
                    expected.join(", ")
                )
            }
            Self::IoError { reason, .. } => reason.clone(),
            Self::SettingsSaveError { reason } => format!("Could not save settings: {}", reason),
        }
    }

    /// Get detailed error information for technical support / bug reports.
    ///
    /// This includes full paths, line numbers, and other technical details
    /// that can help diagnose issues.
    pub fn detailed_info(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Error Type: {}", self.dialog_title()));
        lines.push(format!("Description: {}", self.brief_description()));

        match self {
            Self::FileNotFound { path } => {
                lines.push(format!("Full Path: {}", path.display()));
            }
            Self::FileReadError { path, reason } => {
                lines.push(format!("Full Path: {}", path.display()));
                lines.push(format!("Reason: {}", reason));
            }
            Self::InvalidFormat {
                path,
                message,
                line,
                column,
            } => {
                if let Some(p) = path {
                    lines.push(format!("File: {}", p.display()));
                }
                if let Some(l) = line {
                    lines.push(format!("Line: {}", l));
                }
                if let Some(c) = column {
                    lines.push(format!("Column: {}", c));
                }
                lines.push(format!("Details: {}", message));
            }
            Self::UnsupportedFileType { path, expected } => {
                lines.push(format!("File: {}", path.display()));
                lines.push(format!("Supported Extensions: {}", expected.join(", ")));
            }
            Self::IoError { path, reason } => {
                if let Some(p) = path {
                    lines.push(format!("Path: {}", p.display()));
                }
                lines.push(format!("Details: {}", reason));
            }
            Self::SettingsSaveError { reason } => {
                lines.push(format!("Details: {}", reason));
            }
        }

        lines.join("\n")
    }
}

/// Display name of a file, falling back to the full path.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Create an AppError from a file path and I/O error.
pub fn from_io_error(path: PathBuf, error: std::io::Error) -> AppError {
    match error.kind() {
        std::io::ErrorKind::NotFound => AppError::FileNotFound { path },
        std::io::ErrorKind::PermissionDenied => AppError::FileReadError {
            path,
            reason: "Permission denied".to_string(),
        },
        _ => AppError::FileReadError {
            path,
            reason: error.to_string(),
        },
    }
}

/// Create an AppError from a parse error with optional path context.
pub fn from_parse_error(
    path: Option<PathBuf>,
    error: &crate::core::parser::ParseError,
) -> AppError {
    use crate::core::parser::ParseError;

    match error {
        ParseError::JsonSyntax(e) => {
            // serde_json reports 1-indexed line/column, 0 when not applicable
            let (line, column) = extract_json_position(e);
            AppError::InvalidFormat {
                path,
                message: e.to_string(),
                line,
                column,
            }
        }
        ParseError::MissingField { .. }
        | ParseError::MissingTimestamp { .. }
        | ParseError::InvalidTimestamp { .. } => AppError::InvalidFormat {
            path,
            message: error.to_string(),
            line: None,
            column: None,
        },
    }
}

/// Extract line and column from a serde_json::Error if available.
fn extract_json_position(error: &serde_json::Error) -> (Option<usize>, Option<usize>) {
    let line = error.line();
    let column = error.column();

    let line = if line > 0 { Some(line) } else { None };
    let column = if column > 0 { Some(column) } else { None };

    (line, column)
}
