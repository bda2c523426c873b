//! Arc tessellation
//!
//! CXF fonts describe round strokes as circular arcs. The engraver scales X and
//! Y independently, so arcs cannot be emitted as native G2/G3 moves and are
//! approximated with straight segments instead.

use std::f64::consts::PI;

use crate::geometry::{Point, Segment};

/// Largest sweep a single font record may describe.
pub const MAX_SWEEP_DEGREES: f64 = 360.0;

/// Hard cap on the segments produced for one arc.
const MAX_SEGMENTS: usize = 1 << 16;

/// Direction in which an arc is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// `A` records: start at the start angle, increase towards the end angle.
    CounterClockwise,
    /// `AR` records: start at the end angle, decrease towards the start angle.
    Clockwise,
}

/// A circular arc as declared by an `A` or `AR` record. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub winding: Winding,
}

impl Arc {
    /// Angle covered going forward from start to end, in degrees. An end
    /// angle below the start wraps through a full turn.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.forward_start()
    }

    fn forward_start(&self) -> f64 {
        if self.end_angle < self.start_angle {
            self.start_angle - 360.0
        } else {
            self.start_angle
        }
    }

    fn point_at(&self, degrees: f64) -> Point {
        let radians = degrees * PI / 180.0;
        Point::new(
            radians.cos() * self.radius + self.center.x,
            radians.sin() * self.radius + self.center.y,
        )
    }
}

/// Tessellation configuration
#[derive(Debug, Clone)]
pub struct ArcTessellatorConfig {
    /// Upper bound on the angle covered by one segment, in degrees
    pub step_degrees: f64,
}

impl Default for ArcTessellatorConfig {
    fn default() -> Self {
        Self { step_degrees: 20.0 }
    }
}

/// Converts arcs to line segments
#[derive(Debug, Default)]
pub struct ArcTessellator {
    config: ArcTessellatorConfig,
}

impl ArcTessellator {
    /// Create a new arc tessellator
    pub fn new(config: ArcTessellatorConfig) -> Self {
        Self { config }
    }

    /// Number of segments used for a sweep, never less than one and never
    /// more than `MAX_SEGMENTS`.
    pub fn segment_count(&self, sweep: f64) -> usize {
        let steps = (sweep / self.config.step_degrees).trunc();
        if steps.is_finite() && steps > 0.0 {
            (steps as usize).saturating_add(1).min(MAX_SEGMENTS)
        } else {
            1
        }
    }

    /// Approximate an arc with a pen-continuous run of segments.
    ///
    /// When the end angle is below the start angle the start is moved back by
    /// a full turn, so the sweep is always measured forward from start to end.
    pub fn tessellate(&self, arc: &Arc) -> Vec<Segment> {
        let start_angle = arc.forward_start();
        let sweep = arc.end_angle - start_angle;
        let count = self.segment_count(sweep);
        let increment = sweep / count as f64;

        let (mut angle, step) = match arc.winding {
            Winding::CounterClockwise => (start_angle, increment),
            Winding::Clockwise => (arc.end_angle, -increment),
        };

        let mut from = arc.point_at(angle);
        let mut segments = Vec::with_capacity(count);
        for _ in 0..count {
            angle += step;
            let to = arc.point_at(angle);
            segments.push(Segment::new(from, to));
            from = to;
        }
        segments
    }
}
