//! Error types for the settings crate.
//!
//! This module provides structured error types for layout configuration
//! loading, validation, and font lookup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The requested font is not present in any search directory.
    #[error("Font '{name}' not found (searched: {})", format_dirs(.searched))]
    FontNotFound { name: String, searched: Vec<PathBuf> },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML serialization/deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn format_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SettingsError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::LoadError("file not found".to_string());
        assert_eq!(err.to_string(), "Failed to load settings: file not found");

        let err = SettingsError::InvalidSetting {
            key: "feed_rate".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid setting 'feed_rate': must be positive");
    }

    #[test]
    fn test_font_not_found_lists_directories() {
        let err = SettingsError::FontNotFound {
            name: "normal.cxf".to_string(),
            searched: vec![PathBuf::from("./cxf_fonts"), PathBuf::from("/fonts")],
        };
        assert_eq!(
            err.to_string(),
            "Font 'normal.cxf' not found (searched: ./cxf_fonts, /fonts)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SettingsError = io_err.into();
        assert!(matches!(err, SettingsError::IoError(_)));

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SettingsError = json_err.into();
        assert!(matches!(err, SettingsError::JsonError(_)));
    }
}
