//! Error types for the engrave crate.

use std::io;
use textlaser_settings::SettingsError;
use thiserror::Error;

/// Errors that can occur while generating or writing G-code.
#[derive(Error, Debug)]
pub enum EngraveError {
    /// The layout configuration was rejected.
    #[error("Invalid layout: {0}")]
    Settings(#[from] SettingsError),

    /// Writing the program to its sink failed.
    #[error("Failed to write G-code: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for engraving operations.
pub type EngraveResult<T> = Result<T, EngraveError>;
