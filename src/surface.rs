// The in-memory RGBA frame and the host "present" contract.
// Visual: whatever is in `bytes` when `present` runs is what the window shows.

use crate::error::Error;
use crate::types::Color;

pub const BYTES_PER_PIXEL: usize = 4;

/// A width x height RGBA buffer. Pixel (x, y) lives at byte offset
/// `(y * width + x) * 4`; the buffer length never changes after `new`.
#[derive(Clone)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelSurface {
    /// Allocate a surface filled with `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::SurfaceSize { width, height });
        }
        let mut surface = Self {
            width,
            height,
            bytes: vec![0u8; width * height * BYTES_PER_PIXEL],
        };
        surface.clear(background);
        Ok(surface)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write one pixel. Coordinates are floored, then mapped row-major.
    ///
    /// There is no per-axis bounds check here: an `x` at or past `width`
    /// lands in the next row. Callers go through `raster::draw_point`, which
    /// pre-validates. The only guard is on the final byte offset, so a write
    /// that would fall before the start or past the end of the buffer is
    /// dropped instead of panicking.
    pub fn set_pixel(&mut self, x: f64, y: f64, color: Color) {
        let Some(i) = self.offset(x, y) else {
            return;
        };
        self.bytes[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
    }

    /// Read back the pixel at integer coordinates, if it is on the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        let p = &self.bytes[i..i + BYTES_PER_PIXEL];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Paint every pixel with `color`. O(w*h), once per frame.
    pub fn clear(&mut self, color: Color) {
        for x in 0..self.width {
            for y in 0..self.height {
                self.set_pixel(x as f64, y as f64, color);
            }
        }
    }

    /// Convert to 0x00RRGGBB words for minifb, reusing `out`.
    pub fn write_rgb_u32(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(
            self.bytes
                .chunks_exact(BYTES_PER_PIXEL)
                .map(|p| Color::rgba(p[0], p[1], p[2], p[3]).to_rgb_u32()),
        );
    }

    #[inline]
    fn offset(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        // Casts saturate, so huge coordinates must not reach plain arithmetic.
        let (x, y) = (x.floor() as i64, y.floor() as i64);
        let i = y
            .checked_mul(self.width as i64)
            .and_then(|row| row.checked_add(x))
            .and_then(|px| px.checked_mul(BYTES_PER_PIXEL as i64))?;
        if i < 0 || i as usize + BYTES_PER_PIXEL > self.bytes.len() {
            return None;
        }
        Some(i as usize)
    }
}

/// Host display contract: push the surface to the visible output.
pub trait Present {
    fn present(&mut self, surface: &PixelSurface) -> Result<(), Error>;
}
