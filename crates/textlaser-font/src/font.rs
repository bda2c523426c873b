//! Font and glyph model
//!
//! A [`Font`] maps character keys to [`Glyph`] records. It is built once by the
//! parser and only read afterwards.

use std::collections::HashMap;

use crate::geometry::Segment;
use crate::grouping::{flatten, group_strokes, order_groups, GroupOrder, StrokeGroup};

/// Stroke geometry of one character.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    key: String,
    strokes: Vec<Segment>,
    groups: Vec<StrokeGroup>,
    ordered: Vec<Segment>,
    x_max: f64,
    y_max: f64,
}

impl Glyph {
    /// Builds a glyph and computes its ordered stroke groups once.
    pub fn new(key: impl Into<String>, strokes: Vec<Segment>, order: GroupOrder) -> Self {
        let mut groups = group_strokes(&strokes);
        order_groups(&mut groups, order);
        let ordered = flatten(&groups);

        let x_max = strokes
            .iter()
            .map(Segment::x_max)
            .reduce(f64::max)
            .unwrap_or(0.0);
        let y_max = strokes
            .iter()
            .map(Segment::y_max)
            .reduce(f64::max)
            .unwrap_or(0.0);

        Self {
            key: key.into(),
            strokes,
            groups,
            ordered,
            x_max,
            y_max,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Strokes in declaration order.
    pub fn strokes(&self) -> &[Segment] {
        &self.strokes
    }

    /// Stroke groups in draw order.
    pub fn stroke_groups(&self) -> &[StrokeGroup] {
        &self.groups
    }

    /// All strokes in draw order.
    pub fn ordered_strokes(&self) -> &[Segment] {
        &self.ordered
    }

    /// Right-most extent; the glyph's advance width. Zero for an empty glyph.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Top-most extent. Zero for an empty glyph.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }
}

/// A loaded stroke font.
#[derive(Debug, Clone, Default)]
pub struct Font {
    glyphs: HashMap<String, Glyph>,
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a glyph, replacing any earlier definition of the same key.
    pub fn insert(&mut self, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(glyph.key.clone(), glyph)
    }

    pub fn glyph(&self, key: &str) -> Option<&Glyph> {
        self.glyphs.get(key)
    }

    pub fn glyph_for(&self, ch: char) -> Option<&Glyph> {
        let mut buf = [0u8; 4];
        self.glyph(ch.encode_utf8(&mut buf))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    /// Tallest glyph extent; defines the line pitch. Zero for an empty font.
    pub fn line_height(&self) -> f64 {
        self.glyphs
            .values()
            .map(Glyph::y_max)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Widest glyph extent; the base of word and character spacing.
    pub fn max_advance(&self) -> f64 {
        self.glyphs
            .values()
            .map(Glyph::x_max)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }
}
