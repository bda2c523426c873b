//! Error types for the font crate.
//!
//! Only failures to read the font source are errors. Problems inside
//! individual glyph records are reported as
//! [`FontDiagnostic`](crate::FontDiagnostic)s and parsing carries on.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading a font.
#[derive(Error, Debug)]
pub enum FontError {
    /// The font source could not be read.
    #[error("Failed to read font '{name}': {source}")]
    Read {
        /// Name of the font source, usually its file name.
        name: String,
        #[source]
        source: io::Error,
    },

    /// I/O error outside of a named font source.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for font operations.
pub type FontResult<T> = Result<T, FontError>;
