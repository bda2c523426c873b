//! Command line interface
//!
//! Short options follow the classic `engrave-lines`/`text2laser` tools so
//! existing scripts keep working: numeric options take negative values and
//! `-M`/`-f` accept an optional `0` or `1`.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use textlaser_font::GroupOrder;
use textlaser_settings::{parse_indent_list, LayoutConfig, LineSpacing, SettingsResult, DEFAULT_FONT};

#[derive(Debug, Parser)]
#[command(
    name = "textlaser",
    version,
    about = "Generate laser/plotter G-code for lines of text set in a CXF stroke font",
    after_help = "Fonts are searched in ./cxf_fonts, $cxf_fonts and ~/.cxf_fonts.\n\
                  Example: textlaser -S0.4 -s0.5 -a'Line0' -a'Line1' -F4000 -L1000 -l20 > test.ngc"
)]
pub struct Cli {
    /// Start X value
    #[arg(short = 'X', value_name = "X", allow_negative_numbers = true)]
    pub x_start: Option<f64>,

    /// X offset applied to indented lines
    #[arg(short = 'x', value_name = "DX", allow_negative_numbers = true)]
    pub x_line_offset: Option<f64>,

    /// Lines to indent, e.g. '1,3'
    #[arg(short = 'i', value_name = "LINES")]
    pub indent: Option<String>,

    /// Start Y value
    #[arg(short = 'Y', value_name = "Y", allow_negative_numbers = true)]
    pub y_start: Option<f64>,

    /// Y offset between lines in % of the font height (0 = font height)
    #[arg(short = 'y', value_name = "PERCENT", allow_negative_numbers = true)]
    pub y_line_percent: Option<f64>,

    /// Y offset between lines as an absolute distance
    #[arg(
        long = "line-pitch",
        value_name = "DY",
        conflicts_with = "y_line_percent",
        allow_negative_numbers = true
    )]
    pub line_pitch: Option<f64>,

    /// Rotation angle in degrees
    #[arg(short = 'A', value_name = "DEGREES", allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// X scale
    #[arg(short = 'S', value_name = "SCALE", allow_negative_numbers = true)]
    pub x_scale: Option<f64>,

    /// Y scale
    #[arg(short = 's', value_name = "SCALE", allow_negative_numbers = true)]
    pub y_scale: Option<f64>,

    /// Character space in % of the word space
    #[arg(short = 'C', value_name = "PERCENT", allow_negative_numbers = true)]
    pub char_space: Option<f64>,

    /// Word space in % of the widest glyph
    #[arg(short = 'W', value_name = "PERCENT", allow_negative_numbers = true)]
    pub word_space: Option<f64>,

    /// Mirror horizontally (-M, -M1; -M0 turns it off)
    #[arg(
        short = 'M',
        value_name = "0|1",
        num_args = 0..=1,
        default_missing_value = "1",
        value_parser = BoolishValueParser::new()
    )]
    pub mirror: Option<bool>,

    /// Flip vertically (-f, -f1; -f0 turns it off)
    #[arg(
        short = 'f',
        value_name = "0|1",
        num_args = 0..=1,
        default_missing_value = "1",
        value_parser = BoolishValueParser::new()
    )]
    pub flip: Option<bool>,

    /// Feed rate
    #[arg(short = 'F', value_name = "RATE", allow_negative_numbers = true)]
    pub feed_rate: Option<f64>,

    /// Laser max power (S value at 100%)
    #[arg(short = 'L', value_name = "S", allow_negative_numbers = true)]
    pub laser_max: Option<f64>,

    /// Laser engrave power in %
    #[arg(short = 'l', value_name = "PERCENT", allow_negative_numbers = true)]
    pub laser_percent: Option<f64>,

    /// Preamble G-code
    #[arg(short = 'P', value_name = "GCODE")]
    pub preamble: Option<String>,

    /// Postamble G-code
    #[arg(short = 'p', value_name = "GCODE")]
    pub postamble: Option<String>,

    /// Append a line to engrave (repeatable)
    #[arg(short = 'a', value_name = "TEXT")]
    pub lines: Vec<String>,

    /// Font file name
    #[arg(long = "font", value_name = "FILE", default_value = DEFAULT_FONT)]
    pub font: String,

    /// Additional font directory, searched before the defaults (repeatable)
    #[arg(long = "font-dir", value_name = "DIR")]
    pub font_dirs: Vec<PathBuf>,

    /// Layout configuration file (.toml or .json)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stroke group ordering: "legacy" or "corrected"
    #[arg(long = "group-order", value_name = "MODE")]
    pub group_order: Option<GroupOrder>,

    /// Increase log verbosity (-v info, -vv debug); logs go to stderr
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the layout: defaults, then the config file, then options.
    pub fn layout(&self) -> SettingsResult<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::load_from_file(path)?,
            None => LayoutConfig::default(),
        };

        macro_rules! set {
            ($field:ident, $value:expr) => {
                if let Some(value) = $value {
                    config.$field = value;
                }
            };
        }

        set!(x_start, self.x_start);
        set!(y_start, self.y_start);
        set!(x_line_offset, self.x_line_offset);
        set!(angle, self.angle);
        set!(x_scale, self.x_scale);
        set!(y_scale, self.y_scale);
        set!(char_space_percent, self.char_space);
        set!(word_space_percent, self.word_space);
        set!(feed_rate, self.feed_rate);
        set!(laser_max_power, self.laser_max);
        set!(laser_power_fraction, self.laser_percent.map(|p| p / 100.0));
        set!(preamble, self.preamble.clone());
        set!(postamble, self.postamble.clone());
        set!(group_order, self.group_order);
        set!(mirror, self.mirror);
        set!(flip, self.flip);

        if let Some(list) = &self.indent {
            config.indent_lines = parse_indent_list(list)?;
        }

        if let Some(pitch) = self.line_pitch {
            config.line_spacing = LineSpacing::Absolute(pitch);
        } else if let Some(percent) = self.y_line_percent {
            config.line_spacing = if percent == 0.0 {
                LineSpacing::FontHeight
            } else {
                LineSpacing::Percent(percent)
            };
        }


        config.validate()?;
        Ok(config)
    }
}
