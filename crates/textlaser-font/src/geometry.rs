//! Geometry primitives shared by the parser, the grouping pass and the engraver.
//!
//! All coordinates are in font-design units.

/// A point in font-design space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Extents that contain nothing; the identity for [`Bounds::union`].
    pub const EMPTY: Bounds = Bounds {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A single straight stroke of a glyph.
///
/// Extents are computed on construction; the segment cannot be mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    bounds: Bounds,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        let bounds = Bounds {
            x_min: start.x.min(end.x),
            x_max: start.x.max(end.x),
            y_min: start.y.min(end.y),
            y_max: start.y.max(end.y),
        };
        Self { start, end, bounds }
    }

    /// Builds a segment from the `x1,y1,x2,y2` tuple used by `L` records.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn x_min(&self) -> f64 {
        self.bounds.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.bounds.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.bounds.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.bounds.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_bounds_are_ordered() {
        let seg = Segment::from_coords(4.0, -1.0, 1.0, 3.0);
        assert_eq!(seg.x_min(), 1.0);
        assert_eq!(seg.x_max(), 4.0);
        assert_eq!(seg.y_min(), -1.0);
        assert_eq!(seg.y_max(), 3.0);
    }

    #[test]
    fn test_bounds_union_with_empty() {
        let seg = Segment::from_coords(0.0, 0.0, 2.0, 5.0);
        let merged = Bounds::EMPTY.union(seg.bounds());
        assert_eq!(merged, *seg.bounds());
        assert!(Bounds::EMPTY.is_empty());
        assert!(!merged.is_empty());
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
