//! Layout configuration
//!
//! Everything that controls one engraving run: where lines start, how they
//! are scaled and rotated, character spacing, laser power and the literal
//! preamble/postamble blocks. A [`LayoutConfig`] is built once (defaults,
//! optionally a TOML or JSON file, then command line overrides) and is only
//! read while G-code is generated.

use std::path::Path;

use serde::{Deserialize, Serialize};
use textlaser_font::GroupOrder;
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

pub const DEFAULT_PREAMBLE: &str = "
G21         ; Set units to mm
M4 S0       ; Enable Laser/Spindle (0 power)
";

pub const DEFAULT_POSTAMBLE: &str = "
M5          ; Disable Laser/Spindle
";

/// Vertical distance between consecutive text lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum LineSpacing {
    /// Tallest glyph times the Y scale
    #[default]
    FontHeight,
    /// Percentage of the scaled font height
    Percent(f64),
    /// Fixed distance in machine units
    Absolute(f64),
}

/// Layout and machine parameters for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// X of the first character on every line
    pub x_start: f64,
    /// Y of the first line's baseline
    pub y_start: f64,
    /// Extra X added to indented lines
    pub x_line_offset: f64,
    /// Zero-based indices of the lines that get `x_line_offset`
    pub indent_lines: Vec<usize>,
    pub line_spacing: LineSpacing,
    pub x_scale: f64,
    pub y_scale: f64,
    /// Rotation in degrees, counter-clockwise
    pub angle: f64,
    /// Gap between characters, in percent of the word space
    pub char_space_percent: f64,
    /// Width of a space, in percent of the widest glyph
    pub word_space_percent: f64,
    pub mirror: bool,
    pub flip: bool,
    /// Feed rate for engraving moves (mm/min)
    pub feed_rate: f64,
    /// S value of full laser power
    pub laser_max_power: f64,
    /// Engraving power as a fraction of `laser_max_power` (0-1)
    pub laser_power_fraction: f64,
    pub preamble: String,
    pub postamble: String,
    pub group_order: GroupOrder,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_start: 0.0,
            y_start: 0.0,
            x_line_offset: 0.0,
            indent_lines: Vec::new(),
            line_spacing: LineSpacing::FontHeight,
            x_scale: 1.0,
            y_scale: 1.0,
            angle: 0.0,
            char_space_percent: 25.0,
            word_space_percent: 100.0,
            mirror: false,
            flip: false,
            feed_rate: 1000.0,
            laser_max_power: 1000.0,
            laser_power_fraction: 0.2,
            preamble: DEFAULT_PREAMBLE.to_string(),
            postamble: DEFAULT_POSTAMBLE.to_string(),
            group_order: GroupOrder::Legacy,
        }
    }
}

impl LayoutConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.toml` or `.json` file and validate it.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::LoadError(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        debug!(path = %path.display(), "layout configuration loaded");
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let finite = [
            ("x_start", self.x_start),
            ("y_start", self.y_start),
            ("x_line_offset", self.x_line_offset),
            ("angle", self.angle),
            ("char_space_percent", self.char_space_percent),
            ("word_space_percent", self.word_space_percent),
        ];
        for (key, value) in finite {
            if !value.is_finite() {
                return Err(SettingsError::invalid(key, "must be a finite number"));
            }
        }

        for (key, value) in [("x_scale", self.x_scale), ("y_scale", self.y_scale)] {
            if !value.is_finite() || value == 0.0 {
                return Err(SettingsError::invalid(key, "must be finite and non-zero"));
            }
        }

        if !(self.feed_rate.is_finite() && self.feed_rate > 0.0) {
            return Err(SettingsError::invalid("feed_rate", "must be > 0"));
        }

        if !(self.laser_max_power.is_finite() && self.laser_max_power > 0.0) {
            return Err(SettingsError::invalid("laser_max_power", "must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.laser_power_fraction) {
            return Err(SettingsError::invalid(
                "laser_power_fraction",
                "must be between 0 and 1",
            ));
        }

        match self.line_spacing {
            LineSpacing::Percent(v) | LineSpacing::Absolute(v) if !v.is_finite() => {
                return Err(SettingsError::invalid("line_spacing", "must be finite"));
            }
            _ => {}
        }

        Ok(())
    }

    /// Distance between consecutive lines for a font of the given height.
    pub fn line_pitch(&self, font_height: f64) -> f64 {
        match self.line_spacing {
            LineSpacing::FontHeight => self.y_scale * font_height,
            LineSpacing::Percent(percent) => self.y_scale * font_height * percent / 100.0,
            LineSpacing::Absolute(pitch) => pitch,
        }
    }

    pub fn is_indented(&self, line: usize) -> bool {
        self.indent_lines.contains(&line)
    }

    /// X origin of the given line.
    pub fn line_x_start(&self, line: usize) -> f64 {
        if self.is_indented(line) {
            self.x_start + self.x_line_offset
        } else {
            self.x_start
        }
    }

    /// Y origin of the given line; lines stack downwards.
    pub fn line_y_start(&self, line: usize, pitch: f64) -> f64 {
        self.y_start - pitch * line as f64
    }

    /// S word value while engraving.
    pub fn operative_power(&self) -> f64 {
        self.laser_power_fraction * self.laser_max_power
    }
}

/// Parse an indent list such as `"1,3"` or `"0 2 4"`.
pub fn parse_indent_list(list: &str) -> SettingsResult<Vec<usize>> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>().map_err(|e| {
                SettingsError::invalid("indent_lines", format!("'{}' is not a line index: {}", s, e))
            })
        })
        .collect()
}
