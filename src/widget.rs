// Retained-mode elements drawn every frame on top of the sketch.

use std::time::Instant;

use tracing::info;

use crate::hit::HitRegion;
use crate::input::{Handled, PointerEvent, PointerHandler};
use crate::raster;
use crate::surface::PixelSurface;
use crate::types::{Color, Point, Size};

/// A retained element: hit-tested by the scene, redrawn every frame.
pub trait Widget: PointerHandler {
    fn draw(&self, surface: &mut PixelSurface);
}

/// Clickable bordered rectangle. Turns red while pressed.
pub struct Button {
    region: HitRegion,
    fill: Color,
    border: Color,
    idle_fill: Color,
    pressed_fill: Color,
    armed: bool,
}

impl Button {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            region: HitRegion::new(position, size),
            fill: Color::white(),
            border: Color::black(),
            idle_fill: Color::white(),
            pressed_fill: Color::red(),
            armed: false,
        }
    }

    pub fn region(&self) -> HitRegion {
        self.region
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn has_point(&self, x: f64, y: f64) -> bool {
        self.region.contains(x, y)
    }
}

impl PointerHandler for Button {
    fn on_pointer(&mut self, event: PointerEvent, _now: Instant) -> Handled {
        match event {
            PointerEvent::Down(p) if self.has_point(p.x, p.y) => {
                self.fill = self.pressed_fill;
                self.armed = true;
                Handled::Consumed
            }
            PointerEvent::Up(p) => {
                // Any release restores the idle look, wherever it happens.
                self.fill = self.idle_fill;
                let clicked = self.armed && self.has_point(p.x, p.y);
                self.armed = false;
                if clicked {
                    info!(x = p.x, y = p.y, "button clicked");
                    Handled::Clicked
                } else {
                    Handled::Ignored
                }
            }
            _ => Handled::Ignored,
        }
    }
}

impl Widget for Button {
    fn draw(&self, surface: &mut PixelSurface) {
        raster::draw_rect(surface, self.region.origin, self.region.size, self.border, Some(self.fill));
    }
}
