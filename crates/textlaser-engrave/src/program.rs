//! G-code program lines
//!
//! The emitter produces [`ProgramLine`]s; rendering them to text happens only
//! when they are written to a sink.

use std::fmt;
use std::io::Write;

use crate::error::EngraveResult;

/// One line of the output program.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramLine {
    /// `; text`
    Comment(String),
    /// `;text`, the per-character marker
    Marker(String),
    /// Empty separator line
    Blank,
    /// Laser off, rapid travel
    Rapid { x: f64, y: f64 },
    /// Engraving move at the current power
    Engrave { x: f64, y: f64, power: f64, feed: f64 },
    /// Caller supplied text written verbatim (preamble, postamble)
    Literal(String),
}

impl ProgramLine {
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    pub fn is_motion(&self) -> bool {
        matches!(self, Self::Rapid { .. } | Self::Engrave { .. })
    }
}

impl fmt::Display for ProgramLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) => write!(f, "; {}", text),
            Self::Marker(text) => write!(f, ";{}", text),
            Self::Blank => Ok(()),
            Self::Rapid { x, y } => write!(f, "G00 X{:.6} Y{:.6}", x, y),
            Self::Engrave { x, y, power, feed } => {
                write!(f, "G01 X{:.6} Y{:.6} S{:.0} F{:.0}", x, y, power, feed)
            }
            Self::Literal(text) => f.write_str(text),
        }
    }
}

/// Modal laser power. G00 moves run with the laser off; every G01 carries the
/// current level in its `S` word.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaserPower {
    level: f64,
}

impl LaserPower {
    pub fn off(&mut self) {
        self.level = 0.0;
    }

    pub fn on(&mut self, level: f64) {
        self.level = level;
    }

    pub fn level(&self) -> f64 {
        self.level
    }
}

/// Write program lines, one per output line.
pub fn write_program<W: Write>(sink: &mut W, lines: &[ProgramLine]) -> EngraveResult<()> {
    for line in lines {
        writeln!(sink, "{}", line)?;
    }
    Ok(())
}
