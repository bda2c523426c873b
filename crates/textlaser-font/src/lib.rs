//! # textlaser font
//!
//! Loads single-stroke CXF fonts into typed geometry.
//!
//! - **Geometry**: points, extents and immutable line segments
//! - **Arc tessellation**: `A`/`AR` arcs approximated by line segments
//! - **Parser**: the line-oriented CXF format, with recoverable diagnostics
//! - **Grouping**: pen-continuous stroke groups and their draw order

pub mod arc;
pub mod error;
pub mod font;
pub mod geometry;
pub mod grouping;
pub mod parser;

pub use arc::{Arc, ArcTessellator, ArcTessellatorConfig, Winding, MAX_SWEEP_DEGREES};
pub use error::{FontError, FontResult};
pub use font::{Font, Glyph};
pub use geometry::{Bounds, Point, Segment};
pub use grouping::{group_strokes, order_groups, GroupOrder, StrokeGroup, CONTINUITY_TOLERANCE};
pub use parser::{FontDiagnostic, FontParser, ParsedFont};
