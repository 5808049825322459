// Core value types shared by the surface, the rasterizer and the scene.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// A coordinate in surface space. y grows downward (screen convention).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same point shifted by (dx, dy).
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width/height pair. Non-negative by convention only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Size of the box spanned by two corners, in either order.
    pub fn between(a: Point, b: Point) -> Self {
        Self::new((a.x - b.x).abs(), (a.y - b.y).abs())
    }
}

/// RGBA color, 8 bits per channel. Writes are opaque overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::rgba(255, 255, 255, 255)
    }

    pub const fn red() -> Self {
        Self::rgba(255, 0, 0, 255)
    }

    pub const fn yellow() -> Self {
        Self::rgba(255, 255, 0, 255)
    }

    pub const fn green() -> Self {
        Self::rgba(0, 255, 0, 255)
    }

    /// Pack as 0x00RRGGBB for minifb (alpha is dropped).
    #[inline]
    pub fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Named colors accepted by the `select_color` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorName {
    Black,
    White,
    Red,
    Yellow,
    Green,
}

impl ColorName {
    pub fn color(self) -> Color {
        match self {
            ColorName::Black => Color::black(),
            ColorName::White => Color::white(),
            ColorName::Red => Color::red(),
            ColorName::Yellow => Color::yellow(),
            ColorName::Green => Color::green(),
        }
    }
}

impl FromStr for ColorName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(ColorName::Black),
            "white" => Ok(ColorName::White),
            "red" => Ok(ColorName::Red),
            "yellow" => Ok(ColorName::Yellow),
            "green" => Ok(ColorName::Green),
            _ => Err(Error::UnknownColor(s.to_string())),
        }
    }
}

/// Which figure the next drag records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigureKind {
    #[default]
    Line,
    RectOutline,
    RectFilled,
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FigureKind::Line => "line",
            FigureKind::RectOutline => "rect",
            FigureKind::RectFilled => "fillrect",
        };
        f.write_str(name)
    }
}
