//! Text line to G-code emission
//!
//! Walks each text line character by character, places glyphs with the
//! configured spacing and transform, and emits travel and engraving moves.
//! The laser is switched off only when a new stroke group starts.

use std::io::Write;

use textlaser_font::{Font, FontDiagnostic, Glyph, Point};
use textlaser_settings::LayoutConfig;
use tracing::{debug, info, warn};

use crate::error::EngraveResult;
use crate::program::{write_program, LaserPower, ProgramLine};
use crate::transform::Transform;

const RULE: &str = "===================================================================";

/// Characters written unescaped in `character '...'` comments.
const PLAIN_PUNCTUATION: &str = " ~!@#$%^&*_+=-{}[]|\\:;\"<>,./?";

/// Spacing derived from the font once it is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Advance of a space character
    pub word_space: f64,
    /// Gap added after every engraved character
    pub char_space: f64,
    /// Vertical distance between text lines
    pub line_pitch: f64,
}

impl LayoutMetrics {
    pub fn new(font: &Font, config: &LayoutConfig) -> Self {
        let word_space = font.max_advance() * (config.word_space_percent / 100.0);
        let char_space = word_space * (config.char_space_percent / 100.0);
        Self {
            word_space,
            char_space,
            line_pitch: config.line_pitch(font.line_height()),
        }
    }
}

/// Output of one text line.
#[derive(Debug, Clone, PartialEq)]
pub struct EngravedLine {
    pub program: Vec<ProgramLine>,
    /// Horizontal advance accumulated over the line, in font units
    pub advance: f64,
}

/// Generates G-code for text lines set in one font.
#[derive(Debug)]
pub struct Engraver<'a> {
    font: &'a Font,
    config: &'a LayoutConfig,
    font_name: String,
    metrics: LayoutMetrics,
    transform: Transform,
}

impl<'a> Engraver<'a> {
    /// Create an engraver; the configuration is validated here.
    pub fn new(
        font: &'a Font,
        config: &'a LayoutConfig,
        font_name: impl Into<String>,
    ) -> EngraveResult<Self> {
        config.validate()?;
        let metrics = LayoutMetrics::new(font, config);
        debug!(?metrics, "layout metrics");
        Ok(Self {
            font,
            config,
            font_name: font_name.into(),
            metrics,
            transform: Transform::from_config(config),
        })
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Origin of line `index` in plotter space.
    pub fn line_origin(&self, index: usize) -> Point {
        Point::new(
            self.config.line_x_start(index),
            self.config.line_y_start(index, self.metrics.line_pitch),
        )
    }

    /// Emit the program for one text line. Line 0 carries the session header
    /// and preamble; `last` appends the postamble.
    pub fn engrave_line(&self, text: &str, index: usize, last: bool) -> EngravedLine {
        let mut program = Vec::new();
        if index == 0 {
            self.session_header(text, &mut program);
        } else {
            program.push(ProgramLine::comment(RULE));
            program.push(ProgramLine::comment(format!("Engraving: \"{}\" ", text)));
            program.push(ProgramLine::comment(format!("Line {} ", index)));
        }

        let origin = self.line_origin(index);
        let mut power = LaserPower::default();
        let mut advance = 0.0;

        for ch in text.chars() {
            if ch == ' ' {
                advance += self.metrics.word_space;
                continue;
            }

            match self.font.glyph_for(ch) {
                Some(glyph) => {
                    program.push(ProgramLine::Marker(format!("character '{}'", sanitize(ch))));
                    self.engrave_glyph(glyph, advance, origin, &mut power, &mut program);
                    advance += self.metrics.char_space + glyph.x_max();
                }
                None => {
                    warn!(code_point = ch as u32, line = index, "character not in font");
                    program.push(ProgramLine::comment(format!(
                        "warning: character '0x{:02X}' not found in font defn",
                        ch as u32
                    )));
                }
            }
            program.push(ProgramLine::Blank);
        }

        if last {
            program.push(ProgramLine::Literal(self.config.postamble.clone()));
        }

        debug!(line = index, commands = program.len(), advance, "line engraved");
        EngravedLine { program, advance }
    }

    fn session_header(&self, text: &str, program: &mut Vec<ProgramLine>) {
        let config = self.config;
        program.push(ProgramLine::comment("Code generated by textlaser"));
        program.push(ProgramLine::comment(format!("Engraving: \"{}\"", text)));
        program.push(ProgramLine::comment(format!("Fontfile: {}", self.font_name)));
        program.push(ProgramLine::comment(format!(
            "Origin: X{:.4} Y{:.4}  Line pitch: {:.4}",
            config.x_start, config.y_start, self.metrics.line_pitch
        )));
        program.push(ProgramLine::comment(format!(
            "Scale: X{:.4} Y{:.4}  Angle: {:.4}",
            config.x_scale, config.y_scale, config.angle
        )));
        program.push(ProgramLine::comment(format!(
            "Feed: F{:.0}  Power: S{:.0}",
            config.feed_rate,
            config.operative_power()
        )));
        program.push(ProgramLine::Literal(config.preamble.clone()));
    }

    fn engrave_glyph(
        &self,
        glyph: &Glyph,
        advance: f64,
        origin: Point,
        power: &mut LaserPower,
        program: &mut Vec<ProgramLine>,
    ) {
        let place = |raw: Point| {
            let p = self.transform.apply(raw, advance);
            (p.x + origin.x, p.y + origin.y)
        };

        for group in glyph.stroke_groups() {
            let Some(first) = group.segments().first() else {
                continue;
            };
            power.off();
            let (x, y) = place(first.start());
            program.push(ProgramLine::Rapid { x, y });
            power.on(self.config.operative_power());

            for stroke in group.segments() {
                let (x, y) = place(stroke.end());
                program.push(ProgramLine::Engrave {
                    x,
                    y,
                    power: power.level(),
                    feed: self.config.feed_rate,
                });
            }
        }
    }

    /// Write parser diagnostics as comment lines.
    pub fn write_diagnostics<W: Write>(
        sink: &mut W,
        diagnostics: &[FontDiagnostic],
    ) -> EngraveResult<()> {
        let lines: Vec<ProgramLine> = diagnostics
            .iter()
            .map(|d| ProgramLine::comment(d.to_string()))
            .collect();
        write_program(sink, &lines)
    }

    /// Engrave every text line in order and write the program to `sink`.
    pub fn run<W: Write, S: AsRef<str>>(&self, texts: &[S], sink: &mut W) -> EngraveResult<()> {
        for (index, text) in texts.iter().enumerate() {
            let engraved = self.engrave_line(text.as_ref(), index, index + 1 == texts.len());
            write_program(sink, &engraved.program)?;
        }
        sink.flush()?;
        info!(lines = texts.len(), font = %self.font_name, "engraving complete");
        Ok(())
    }
}

/// Printable form of a character for comments.
pub fn sanitize(ch: char) -> String {
    if ch.is_ascii_alphanumeric() || PLAIN_PUNCTUATION.contains(ch) {
        ch.to_string()
    } else {
        format!(" 0x{:02X} ", ch as u32)
    }
}
