//! Glyph-to-plotter coordinate transform
//!
//! Raw glyph coordinates are scaled along the unrotated axes first and the
//! scaled point is then rotated about the line origin. Scale and rotation do
//! not commute; this order is what existing output was produced with.

use std::f64::consts::PI;

use textlaser_font::Point;
use textlaser_settings::LayoutConfig;

const DEG_TO_RAD: f64 = 2.0 * PI / 360.0;

/// Scale `(x, y)` by `(x_scale, y_scale)` and rotate by `angle` degrees.
pub fn scale_rotate(x: f64, y: f64, x_scale: f64, y_scale: f64, angle: f64) -> (f64, f64) {
    let xx = x * x_scale;
    let yy = y * y_scale;
    let radius = (xx * xx + yy * yy).sqrt();
    let theta = yy.atan2(xx);
    let rotated = theta + angle * DEG_TO_RAD;
    (radius * rotated.cos(), radius * rotated.sin())
}

/// Per-run glyph transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x_scale: f64,
    pub y_scale: f64,
    /// Rotation in degrees
    pub angle: f64,
    pub mirror: bool,
    pub flip: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x_scale: 1.0,
            y_scale: 1.0,
            angle: 0.0,
            mirror: false,
            flip: false,
        }
    }
}

impl Transform {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            x_scale: config.x_scale,
            y_scale: config.y_scale,
            angle: config.angle,
            mirror: config.mirror,
            flip: config.flip,
        }
    }

    /// Negate X and/or Y as configured.
    pub fn reflect(&self, x: f64, y: f64) -> (f64, f64) {
        let x = if self.mirror { -x } else { x };
        let y = if self.flip { -y } else { y };
        (x, y)
    }

    /// Map a raw glyph point, shifted right by `advance`, into plotter space
    /// relative to the line origin.
    pub fn apply(&self, raw: Point, advance: f64) -> Point {
        let (x, y) = self.reflect(raw.x + advance, raw.y);
        let (x, y) = scale_rotate(x, y, self.x_scale, self.y_scale, self.angle);
        Point::new(x, y)
    }
}
