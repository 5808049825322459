// Stateless drawing primitives over a PixelSurface.
// Visual: points, lines and rectangles appear in the frame buffer; nothing is
// shown until the caller presents the surface.

use crate::surface::PixelSurface;
use crate::types::{Color, Point, Size};

/// Distance between consecutive samples along a line's independent axis.
pub const LINE_STEP: f64 = 0.01;

/// Plot one point if it lies inside the surface, edges included.
///
/// The bound is inclusive on the far edges (`x == width`, `y == height`), so
/// a point on the right edge is written through `set_pixel`'s row-major
/// addressing into column 0 of the next row, and a point on the bottom edge
/// falls past the buffer and is dropped there.
pub fn draw_point(surface: &mut PixelSurface, point: Point, color: Color) {
    let (w, h) = (surface.width() as f64, surface.height() as f64);
    if point.x >= 0.0 && point.x <= w && point.y >= 0.0 && point.y <= h {
        surface.set_pixel(point.x, point.y, color);
    }
}

/// Draw a segment by dense point sampling.
///
/// The independent axis is x, or y when the segment is vertical. It is walked
/// from the smaller to the larger end in `LINE_STEP` increments and the other
/// coordinate comes from the line equation. Every pixel is over-plotted many
/// times; cost grows with `|dx| / LINE_STEP` (or `|dy|`), not with the
/// number of pixels touched. Both endpoints are always plotted explicitly.
/// The walk is clipped to the surface's `[0, width]` (or `[0, height]`)
/// span first, since samples outside it would be dropped anyway.
///
/// Unlike the canvas this was modelled on, a right-to-left segment is filled
/// in too (there only its endpoints were plotted), and the recorded-rect
/// helpers below anchor at the top-left of the two corners rather than at the
/// first corner dragged.
pub fn draw_line(surface: &mut PixelSurface, p1: Point, p2: Point, color: Color) {
    draw_point(surface, p1, color);
    let (w, h) = (surface.width() as f64, surface.height() as f64);

    let finite = [p1.x, p1.y, p2.x, p2.y].iter().all(|v| v.is_finite());
    if finite {
        if p1.x == p2.x {
            let (lo, hi) = if p1.y <= p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
            let mut y = lo.max(0.0);
            while y <= hi.min(h) {
                draw_point(surface, Point::new(p1.x, y), color);
                y += LINE_STEP;
            }
        } else {
            // Equation taken from the left end so both drag directions agree.
            let (a, b) = if p1.x < p2.x { (p1, p2) } else { (p2, p1) };
            let slope = (a.y - b.y) / (a.x - b.x);
            let intercept = a.y - slope * a.x;
            let mut x = a.x.max(0.0);
            while x <= b.x.min(w) {
                draw_point(surface, Point::new(x, slope * x + intercept), color);
                x += LINE_STEP;
            }
        }
    }

    draw_point(surface, p2, color);
}

/// Unfilled rectangle: four edges from `upper_left`, width to the right and
/// height downward. Zero-sized edges are drawn like any other.
pub fn draw_rect_outline(surface: &mut PixelSurface, upper_left: Point, size: Size, border: Color) {
    let upper_right = upper_left.offset(size.w, 0.0);
    let down_left = upper_left.offset(0.0, size.h);
    let down_right = upper_left.offset(size.w, size.h);

    draw_line(surface, upper_left, upper_right, border);
    draw_line(surface, upper_left, down_left, border);
    draw_line(surface, down_left, down_right, border);
    draw_line(surface, upper_right, down_right, border);
}

/// Filled rectangle without a border.
///
/// Scanlines run from `(x, y + py)` to `(x + w - 2, y + py)` for
/// `py` in `[0, h - 1)`. The last row and the last two columns of the box are
/// never written. Combined with the one-pixel offset in `draw_rect`, this
/// makes the fill land exactly inside the outline.
pub fn draw_rect_filled(surface: &mut PixelSurface, upper_left: Point, size: Size, fill: Color) {
    let Point { x, y } = upper_left;
    let Size { w, h } = size;
    if !(y.is_finite() && h.is_finite()) {
        return;
    }

    // Rows above the surface are skipped whole steps at a time so the
    // scanline phase is unchanged; rows below it draw nothing.
    let mut py = if y < 0.0 { y + (-y).floor() } else { y };
    let end = (y + h - 1.0).min(surface.height() as f64 + 1.0);
    while py < end {
        draw_line(surface, Point::new(x, py), Point::new(x + w - 2.0, py), fill);
        py += 1.0;
    }
}

/// Outline, plus an optional fill shifted by (1, 1) with the same size.
pub fn draw_rect(
    surface: &mut PixelSurface,
    upper_left: Point,
    size: Size,
    border: Color,
    fill: Option<Color>,
) {
    draw_rect_outline(surface, upper_left, size, border);
    if let Some(fill) = fill {
        draw_rect_filled(surface, upper_left.offset(1.0, 1.0), size, fill);
    }
}

/// Outline of the box spanned by two opposite corners, in any order.
pub fn draw_rect_between(surface: &mut PixelSurface, a: Point, b: Point, border: Color) {
    draw_rect(surface, min_corner(a, b), Size::between(a, b), border, None);
}

/// Borderless fill of the box spanned by two opposite corners, in any order.
pub fn draw_fill_rect_between(surface: &mut PixelSurface, a: Point, b: Point, fill: Color) {
    draw_rect_filled(surface, min_corner(a, b), Size::between(a, b), fill);
}

fn min_corner(a: Point, b: Point) -> Point {
    Point::new(a.x.min(b.x), a.y.min(b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::white();

    fn surface(w: usize, h: usize) -> PixelSurface {
        PixelSurface::new(w, h, BG).unwrap()
    }

    /// Integer pixels currently holding `color`.
    fn painted(s: &PixelSurface, color: Color) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..s.height() {
            for x in 0..s.width() {
                if s.pixel(x, y) == Some(color) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn draw_point_touches_only_the_addressed_bytes() {
        let (w, h) = (6usize, 5usize);
        for y in 0..=h {
            for x in 0..=w {
                let mut s = surface(w, h);
                let before = s.as_bytes().to_vec();
                draw_point(&mut s, Point::new(x as f64, y as f64), Color::red());

                let target = (y * w + x) * 4;
                for (i, (now, was)) in s.as_bytes().iter().zip(&before).enumerate() {
                    if i >= target && i < target + 4 {
                        assert_eq!(*now, Color::red().to_array()[i - target]);
                    } else {
                        assert_eq!(now, was, "byte {i} changed for point ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn draw_point_outside_bounds_is_a_noop() {
        let mut s = surface(6, 5);
        let before = s.as_bytes().to_vec();
        for p in [
            Point::new(-0.5, 1.0),
            Point::new(1.0, -0.01),
            Point::new(6.01, 1.0),
            Point::new(1.0, 5.5),
            Point::new(f64::NAN, 1.0),
            Point::new(f64::INFINITY, 1.0),
        ] {
            draw_point(&mut s, p, Color::red());
        }
        assert_eq!(s.as_bytes(), &before[..]);
    }

    #[test]
    fn degenerate_line_sets_its_pixel() {
        let mut s = surface(8, 8);
        draw_line(&mut s, Point::new(3.0, 4.0), Point::new(3.0, 4.0), Color::green());
        assert_eq!(painted(&s, Color::green()), vec![(3, 4)]);
    }

    #[test]
    fn line_endpoints_are_always_set() {
        let cases = [
            (Point::new(0.0, 0.0), Point::new(9.0, 7.0)),
            (Point::new(9.0, 1.0), Point::new(0.3, 8.7)),
            (Point::new(2.0, 9.0), Point::new(2.0, 0.0)),
            (Point::new(1.0, 1.0), Point::new(7.99, 1.0)),
        ];
        for (a, b) in cases {
            let mut s = surface(10, 10);
            draw_line(&mut s, a, b, Color::red());
            assert_eq!(s.pixel(a.x as usize, a.y as usize), Some(Color::red()));
            assert_eq!(s.pixel(b.x as usize, b.y as usize), Some(Color::red()));
        }
    }

    #[test]
    fn vertical_line_stays_in_its_column() {
        let mut s = surface(10, 10);
        draw_line(&mut s, Point::new(4.0, 8.0), Point::new(4.0, 1.0), Color::red());
        let px = painted(&s, Color::red());
        assert_eq!(px.len(), 8);
        assert!(px.iter().all(|&(x, _)| x == 4));
    }

    #[test]
    fn horizontal_line_covers_the_whole_run() {
        let mut s = surface(10, 10);
        draw_line(&mut s, Point::new(2.0, 3.0), Point::new(7.0, 3.0), Color::red());
        let expected: Vec<_> = (2..=7).map(|x| (x, 3)).collect();
        assert_eq!(painted(&s, Color::red()), expected);
    }

    #[test]
    fn reversed_line_matches_forward_line() {
        let (a, b) = (Point::new(1.0, 2.0), Point::new(8.0, 6.0));
        let mut forward = surface(10, 10);
        let mut backward = surface(10, 10);
        draw_line(&mut forward, a, b, Color::red());
        draw_line(&mut backward, b, a, Color::red());
        assert_eq!(painted(&forward, Color::red()), painted(&backward, Color::red()));
    }

    #[test]
    fn diagonal_line_hits_every_column() {
        let mut s = surface(10, 10);
        draw_line(&mut s, Point::new(0.0, 0.0), Point::new(9.0, 9.0), Color::red());
        for i in 0..10 {
            assert_eq!(s.pixel(i, i), Some(Color::red()), "missing ({i}, {i})");
        }
    }

    #[test]
    fn outline_sets_all_four_edges() {
        let mut s = surface(12, 12);
        draw_rect_outline(&mut s, Point::new(2.0, 3.0), Size::new(6.0, 4.0), Color::black());
        for x in 2..=8 {
            assert_eq!(s.pixel(x, 3), Some(Color::black()), "top ({x}, 3)");
            assert_eq!(s.pixel(x, 7), Some(Color::black()), "bottom ({x}, 7)");
        }
        for y in 3..=7 {
            assert_eq!(s.pixel(2, y), Some(Color::black()), "left (2, {y})");
            assert_eq!(s.pixel(8, y), Some(Color::black()), "right (8, {y})");
        }
        assert_eq!(s.pixel(5, 5), Some(BG));
    }

    #[test]
    fn zero_height_outline_is_a_single_run() {
        let mut s = surface(10, 10);
        draw_rect_outline(&mut s, Point::new(1.0, 4.0), Size::new(5.0, 0.0), Color::black());
        let expected: Vec<_> = (1..=6).map(|x| (x, 4)).collect();
        assert_eq!(painted(&s, Color::black()), expected);
    }

    #[test]
    fn fill_skips_last_row_and_columns() {
        let mut s = surface(12, 12);
        draw_rect_filled(&mut s, Point::new(2.0, 2.0), Size::new(5.0, 4.0), Color::green());
        let mut expected = Vec::new();
        for y in 2..=4 {
            for x in 2..=5 {
                expected.push((x, y));
            }
        }
        assert_eq!(painted(&s, Color::green()), expected);
        for y in 0..12 {
            assert_ne!(s.pixel(6, y), Some(Color::green()));
            assert_ne!(s.pixel(7, y), Some(Color::green()));
        }
        for x in 0..12 {
            assert_ne!(s.pixel(x, 5), Some(Color::green()));
            assert_ne!(s.pixel(x, 6), Some(Color::green()));
        }
    }

    #[test]
    fn bordered_rect_fill_lands_inside_the_outline() {
        let mut s = surface(8, 8);
        draw_rect(&mut s, Point::new(1.0, 1.0), Size::new(4.0, 4.0), Color::black(), Some(Color::red()));

        let mut interior = Vec::new();
        for y in 2..=4 {
            for x in 2..=4 {
                interior.push((x, y));
            }
        }
        assert_eq!(painted(&s, Color::red()), interior);
        assert_eq!(painted(&s, Color::black()).len(), 16);
    }

    #[test]
    fn fractional_point_floors_to_its_pixel() {
        let mut s = surface(6, 5);
        draw_point(&mut s, Point::new(5.5, 4.9), Color::red());
        assert_eq!(painted(&s, Color::red()), vec![(5, 4)]);
    }

    #[test]
    fn far_off_surface_segments_return_without_drawing() {
        let mut s = surface(8, 8);
        let before = s.as_bytes().to_vec();
        draw_line(&mut s, Point::new(1e16, 0.0), Point::new(1e16 + 64.0, 0.0), Color::red());
        draw_line(&mut s, Point::new(-1e16, 2.0), Point::new(-1e16 + 64.0, 2.0), Color::red());
        draw_line(&mut s, Point::new(3.0, 1e17), Point::new(3.0, 2e17), Color::red());
        draw_rect_filled(&mut s, Point::new(0.0, 1e17), Size::new(4.0, 64.0), Color::red());
        assert_eq!(s.as_bytes(), &before[..]);
    }

    #[test]
    fn spans_reaching_past_the_surface_are_clipped_not_lost() {
        let mut s = surface(8, 8);
        draw_line(&mut s, Point::new(-1e15, 3.0), Point::new(1e15, 3.0), Color::red());
        let row: Vec<_> = (0..8).map(|x| (x, 3)).collect();
        assert_eq!(painted(&s, Color::red())[..8], row[..]);

        let mut s = surface(8, 8);
        draw_rect_filled(&mut s, Point::new(1.0, -1e16), Size::new(4.0, 2e16), Color::green());
        for y in 0..8 {
            for x in 1..=3 {
                assert_eq!(s.pixel(x, y), Some(Color::green()), "missing ({x}, {y})");
            }
        }
    }

    #[test]
    fn corner_helpers_accept_any_corner_order() {
        let mut a = surface(10, 10);
        let mut b = surface(10, 10);
        draw_rect_between(&mut a, Point::new(1.0, 2.0), Point::new(6.0, 8.0), Color::black());
        draw_rect_between(&mut b, Point::new(6.0, 8.0), Point::new(1.0, 2.0), Color::black());
        assert_eq!(a.as_bytes(), b.as_bytes());

        let mut c = surface(10, 10);
        let mut d = surface(10, 10);
        draw_fill_rect_between(&mut c, Point::new(6.0, 2.0), Point::new(1.0, 8.0), Color::green());
        draw_rect_filled(&mut d, Point::new(1.0, 2.0), Size::new(5.0, 6.0), Color::green());
        assert_eq!(c.as_bytes(), d.as_bytes());
    }
}
