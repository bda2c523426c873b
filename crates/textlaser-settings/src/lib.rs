//! textlaser Settings Crate
//!
//! Layout configuration for an engraving run and the font search path.

pub mod config;
pub mod error;
pub mod font_path;

pub use config::{parse_indent_list, LayoutConfig, LineSpacing, DEFAULT_POSTAMBLE, DEFAULT_PREAMBLE};
pub use error::{SettingsError, SettingsResult};
pub use font_path::{FontSearchPath, DEFAULT_FONT};
