// Finalized figures and the append-only log that replays them every frame.
// Visual: shapes you finished drawing stay on screen after each clear.

use crate::raster;
use crate::surface::PixelSurface;
use crate::types::{Color, FigureKind, Point};

/// A finalized figure. Corners are kept as dragged; each shape carries the
/// color it was drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point, color: Color },
    RectOutline { from: Point, to: Point, color: Color },
    RectFill { from: Point, to: Point, color: Color },
}

impl Shape {
    pub fn new(kind: FigureKind, from: Point, to: Point, color: Color) -> Self {
        match kind {
            FigureKind::Line => Shape::Line { from, to, color },
            FigureKind::RectOutline => Shape::RectOutline { from, to, color },
            FigureKind::RectFilled => Shape::RectFill { from, to, color },
        }
    }

    pub fn kind(&self) -> FigureKind {
        match self {
            Shape::Line { .. } => FigureKind::Line,
            Shape::RectOutline { .. } => FigureKind::RectOutline,
            Shape::RectFill { .. } => FigureKind::RectFilled,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Shape::Line { color, .. }
            | Shape::RectOutline { color, .. }
            | Shape::RectFill { color, .. } => color,
        }
    }

    /// Rasterize with the shape's own color.
    pub fn draw(&self, surface: &mut PixelSurface) {
        match *self {
            Shape::Line { from, to, color } => raster::draw_line(surface, from, to, color),
            Shape::RectOutline { from, to, color } => {
                raster::draw_rect_between(surface, from, to, color)
            }
            Shape::RectFill { from, to, color } => {
                raster::draw_fill_rect_between(surface, from, to, color)
            }
        }
    }
}

/// Insertion order is drawing order is replay order. Nothing is ever removed.
#[derive(Debug, Default, Clone)]
pub struct ShapeLog {
    shapes: Vec<Shape>,
}

impl ShapeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn replay(&self, surface: &mut PixelSurface) {
        for shape in &self.shapes {
            shape.draw(surface);
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}
