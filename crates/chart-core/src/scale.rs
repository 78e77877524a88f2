// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transform for the plot rectangle.

use crate::axis::Axis;

/// Maps axis ranges onto a plot rectangle given in pixels.
/// Y grows downward on screen, so the value axis is flipped.
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    pub left_px: f32,
    pub top_px: f32,
    pub right_px: f32,
    pub bottom_px: f32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotScale {
    pub fn new(rect: (i32, i32, i32, i32), x: &Axis, y: &Axis) -> Self {
        let (l, t, r, b) = rect;
        Self {
            left_px: l as f32,
            top_px: t as f32,
            right_px: r as f32,
            bottom_px: b as f32,
            x_min: x.min,
            x_max: x.max,
            y_min: y.min,
            y_max: y.max,
        }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        let span = (self.x_max - self.x_min).max(1e-9);
        self.left_px + ((x - self.x_min) / span) as f32 * (self.right_px - self.left_px)
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        let span = (self.y_max - self.y_min).max(1e-9);
        self.bottom_px - ((y - self.y_min) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
