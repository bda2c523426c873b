//! CXF font parser
//!
//! A CXF font is a line-oriented text file. Each glyph looks like
//!
//! ```text
//! [r] 3
//! L 0,0,0,6
//! L 0,6,2,6
//! A 2,5,1,0,90
//!
//! ```
//!
//! `[key] n` opens a glyph and declares how many stroke commands follow, `L`
//! adds a line, `A` a counter-clockwise arc, `AR` a clockwise arc (with the
//! two angles swapped) and a blank line closes the glyph. Everything else is
//! ignored.

use std::fmt;
use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::arc::{Arc, ArcTessellator, Winding, MAX_SWEEP_DEGREES};
use crate::error::{FontError, FontResult};
use crate::font::{Font, Glyph};
use crate::geometry::{Point, Segment};
use crate::grouping::GroupOrder;

static GLYPH_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*)\]\s(\d+)").expect("invalid glyph header regex"));
static LINE_CMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L (.*)").expect("invalid line command regex"));
static ARC_CMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A (.*)").expect("invalid arc command regex"));
static ARC_CW_CMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AR (.*)").expect("invalid reverse arc command regex"));

/// A recoverable problem found while parsing a font.
#[derive(Debug, Clone, PartialEq)]
pub enum FontDiagnostic {
    /// A glyph declared a different number of stroke commands than it had.
    CommandCountMismatch {
        source: String,
        line: usize,
        key: String,
        declared: usize,
        read: usize,
    },
    /// A record could not be understood and was skipped.
    MalformedCommand {
        source: String,
        line: usize,
        text: String,
        reason: String,
    },
}

impl fmt::Display for FontDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandCountMismatch {
                source,
                line,
                declared,
                read,
                ..
            } => write!(
                f,
                "warning: discrepancy in number of commands {source}, line {line}, {declared} != {read} "
            ),
            Self::MalformedCommand {
                source,
                line,
                text,
                reason,
            } => write!(
                f,
                "warning: skipped malformed record {source}, line {line}: '{text}' ({reason})"
            ),
        }
    }
}

/// Result of parsing a font: the glyph map plus every diagnostic raised.
#[derive(Debug, Clone, Default)]
pub struct ParsedFont {
    pub font: Font,
    pub diagnostics: Vec<FontDiagnostic>,
}

struct OpenGlyph {
    key: String,
    declared: usize,
    read: usize,
    strokes: Vec<Segment>,
}

/// Line-by-line CXF parser.
#[derive(Debug)]
pub struct FontParser {
    source: String,
    tessellator: ArcTessellator,
    group_order: GroupOrder,
}

impl FontParser {
    /// Create a parser; `source` names the font in diagnostics.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            tessellator: ArcTessellator::default(),
            group_order: GroupOrder::default(),
        }
    }

    pub fn with_group_order(mut self, order: GroupOrder) -> Self {
        self.group_order = order;
        self
    }

    pub fn with_tessellator(mut self, tessellator: ArcTessellator) -> Self {
        self.tessellator = tessellator;
        self
    }

    /// Parse a font from a buffered reader. Only read errors fail; a line that
    /// is not valid UTF-8 is decoded as Latin-1.
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> FontResult<ParsedFont> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| FontError::Read {
                    name: self.source.clone(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            lines.push(decode_line(&buf, lines.len() + 1));
        }
        Ok(self.parse_lines(lines))
    }

    /// Parse a font from any sequence of text lines.
    pub fn parse_lines<I, S>(&self, lines: I) -> ParsedFont
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = ParsedFont::default();
        let mut current: Option<OpenGlyph> = None;
        let mut line_num = 0;

        for raw in lines {
            line_num += 1;
            let text = raw.as_ref().trim_end_matches(['\n', '\r']);

            if text.is_empty() {
                if let Some(glyph) = current.take() {
                    self.finish(glyph, line_num, &mut parsed);
                }
                continue;
            }

            if let Some(caps) = GLYPH_HEADER.captures(text) {
                if let Some(glyph) = current.take() {
                    self.finish(glyph, line_num, &mut parsed);
                }
                match caps[2].parse::<usize>() {
                    Ok(declared) => {
                        current = Some(OpenGlyph {
                            key: caps[1].to_string(),
                            declared,
                            read: 0,
                            strokes: Vec::new(),
                        });
                    }
                    Err(e) => self.malformed(&mut parsed, line_num, text, e.to_string()),
                }
                continue;
            }

            let Some(glyph) = current.as_mut() else {
                if LINE_CMD.is_match(text) || ARC_CMD.is_match(text) || ARC_CW_CMD.is_match(text) {
                    debug!(line = line_num, "stroke command outside of a glyph ignored");
                }
                continue;
            };

            if let Some(caps) = LINE_CMD.captures(text) {
                match parse_fields::<4>(&caps[1]) {
                    Ok([x1, y1, x2, y2]) => {
                        glyph.read += 1;
                        glyph.strokes.push(Segment::from_coords(x1, y1, x2, y2));
                    }
                    Err(reason) => self.malformed(&mut parsed, line_num, text, reason),
                }
            } else if let Some(caps) = ARC_CMD.captures(text) {
                match parse_arc(&caps[1], Winding::CounterClockwise) {
                    Ok(arc) => {
                        glyph.read += 1;
                        glyph.strokes.extend(self.tessellator.tessellate(&arc));
                    }
                    Err(reason) => self.malformed(&mut parsed, line_num, text, reason),
                }
            } else if let Some(caps) = ARC_CW_CMD.captures(text) {
                match parse_arc(&caps[1], Winding::Clockwise) {
                    Ok(arc) => {
                        glyph.read += 1;
                        glyph.strokes.extend(self.tessellator.tessellate(&arc));
                    }
                    Err(reason) => self.malformed(&mut parsed, line_num, text, reason),
                }
            }
        }

        if let Some(glyph) = current.take() {
            self.finish(glyph, line_num, &mut parsed);
        }

        info!(
            font = %self.source,
            glyphs = parsed.font.len(),
            diagnostics = parsed.diagnostics.len(),
            "font parsed"
        );
        parsed
    }

    fn finish(&self, glyph: OpenGlyph, line: usize, parsed: &mut ParsedFont) {
        if glyph.declared != glyph.read {
            let diagnostic = FontDiagnostic::CommandCountMismatch {
                source: self.source.clone(),
                line,
                key: glyph.key.clone(),
                declared: glyph.declared,
                read: glyph.read,
            };
            warn!(key = %glyph.key, "{}", diagnostic);
            parsed.diagnostics.push(diagnostic);
        }

        debug!(
            key = %glyph.key,
            strokes = glyph.strokes.len(),
            "glyph finalized"
        );
        let finished = Glyph::new(glyph.key, glyph.strokes, self.group_order);
        parsed.font.insert(finished);
    }

    fn malformed(&self, parsed: &mut ParsedFont, line: usize, text: &str, reason: String) {
        let diagnostic = FontDiagnostic::MalformedCommand {
            source: self.source.clone(),
            line,
            text: text.to_string(),
            reason,
        };
        warn!("{}", diagnostic);
        parsed.diagnostics.push(diagnostic);
    }
}

impl Font {
    /// Parse a font from a reader with the default parser settings.
    pub fn from_reader<R: BufRead>(source: impl Into<String>, reader: R) -> FontResult<ParsedFont> {
        FontParser::new(source).parse_reader(reader)
    }
}

fn decode_line(bytes: &[u8], line: usize) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!(line, "line is not UTF-8, reading it as Latin-1");
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

/// Parse the five fields of an `A` or `AR` record. `AR` lists the end angle
/// before the start angle.
fn parse_arc(args: &str, winding: Winding) -> Result<Arc, String> {
    let [cx, cy, radius, first, second] = parse_fields::<5>(args)?;
    let (start_angle, end_angle) = match winding {
        Winding::CounterClockwise => (first, second),
        Winding::Clockwise => (second, first),
    };
    let arc = Arc {
        center: Point::new(cx, cy),
        radius,
        start_angle,
        end_angle,
        winding,
    };
    if arc.sweep() > MAX_SWEEP_DEGREES {
        return Err(format!(
            "arc sweep {} exceeds {MAX_SWEEP_DEGREES} degrees",
            arc.sweep()
        ));
    }
    Ok(arc)
}

/// Parse exactly `N` comma separated finite numbers.
fn parse_fields<const N: usize>(args: &str) -> Result<[f64; N], String> {
    let mut values = [0.0; N];
    let mut count = 0;
    for field in args.split(',') {
        if count == N {
            return Err(format!("expected {N} values, found more"));
        }
        let value: f64 = field
            .trim()
            .parse()
            .map_err(|e| format!("invalid number '{}': {e}", field.trim()))?;
        if !value.is_finite() {
            return Err(format!("non-finite value '{}'", field.trim()));
        }
        values[count] = value;
        count += 1;
    }
    if count != N {
        return Err(format!("expected {N} values, found {count}"));
    }
    Ok(values)
}
