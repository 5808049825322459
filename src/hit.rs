// Axis-aligned hit testing for clickable widgets.

use crate::types::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub origin: Point,
    pub size: Size,
}

impl HitRegion {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let x_in = x >= self.origin.x && x <= self.origin.x + self.size.w;
        let y_in = y >= self.origin.y && y <= self.origin.y + self.size.h;
        x_in && y_in
    }
}
