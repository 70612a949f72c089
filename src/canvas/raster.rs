//! Shape rasterization primitives.
//!
//! All primitives take dot-grid coordinates and a [`Style`] applied to every
//! touched dot. Each primitive comes in two flavors matching the visual
//! rendering modes:
//!
//! - **point** variants light exactly the dots on the shape, for braille
//!   rendering where every dot is individually visible.
//! - **block** variants draw two parallel strokes one dot apart, so the shape
//!   stays visible when cells are collapsed into coarser block glyphs.
//!
//! Lines use integer Bresenham stepping and always light both endpoints.
//! Circles and ellipses use midpoint stepping; filled variants rasterize the
//! same boundary and join it with horizontal spans, so a filled shape always
//! covers its outline.

use super::Canvas;
use crate::style::Style;

impl Canvas {
    /// Draw a straight segment between two dots.
    pub fn draw_point_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: Style) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.plot(x, y, style);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a thickened segment: the point line plus a parallel stroke one
    /// dot away on the minor axis.
    pub fn draw_block_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: Style) {
        self.draw_point_line(x0, y0, x1, y1, style);
        if (x1 - x0).abs() >= (y1 - y0).abs() {
            self.draw_point_line(x0, y0 + 1, x1, y1 + 1, style);
        } else {
            self.draw_point_line(x0 + 1, y0, x1 + 1, y1, style);
        }
    }

    /// Draw a circle outline centered at `(cx, cy)`.
    ///
    /// A non-positive radius degenerates to a single dot.
    pub fn draw_point_circle(&mut self, cx: i32, cy: i32, radius: i32, style: Style) {
        self.circle_raster(cx, cy, radius, style, false);
    }

    /// Draw a filled disk centered at `(cx, cy)`.
    pub fn draw_point_circle_filled(&mut self, cx: i32, cy: i32, radius: i32, style: Style) {
        self.circle_raster(cx, cy, radius, style, true);
    }

    /// Draw a thickened circle outline: concentric strokes at `radius` and
    /// `radius + 1`.
    pub fn draw_block_circle(&mut self, cx: i32, cy: i32, radius: i32, style: Style) {
        self.circle_raster(cx, cy, radius, style, false);
        self.circle_raster(cx, cy, radius + 1, style, false);
    }

    /// Draw a thickened filled disk covering both block outline strokes.
    pub fn draw_block_circle_filled(&mut self, cx: i32, cy: i32, radius: i32, style: Style) {
        self.circle_raster(cx, cy, radius, style, true);
        self.circle_raster(cx, cy, radius + 1, style, true);
    }

    /// Draw an ellipse outline inscribed in the bounding box of the two
    /// corner dots. The corners need not be ordered.
    pub fn draw_point_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: Style) {
        let (l, t, r, b) = normalize_box(x0, y0, x1, y1);
        self.ellipse_raster(l, t, r, b, style, false);
    }

    /// Draw a filled ellipse inscribed in the bounding box of the two corner
    /// dots.
    pub fn draw_point_ellipse_filled(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: Style) {
        let (l, t, r, b) = normalize_box(x0, y0, x1, y1);
        self.ellipse_raster(l, t, r, b, style, true);
    }

    /// Draw a thickened ellipse outline: the inscribed stroke plus a second
    /// stroke one dot out.
    pub fn draw_block_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: Style) {
        let (l, t, r, b) = normalize_box(x0, y0, x1, y1);
        self.ellipse_raster(l, t, r, b, style, false);
        self.ellipse_raster(l, t, r + 1, b + 1, style, false);
    }

    /// Draw a thickened filled ellipse covering both block outline strokes.
    pub fn draw_block_ellipse_filled(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: Style) {
        let (l, t, r, b) = normalize_box(x0, y0, x1, y1);
        self.ellipse_raster(l, t, r, b, style, true);
        self.ellipse_raster(l, t, r + 1, b + 1, style, true);
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, style: Style) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.plot(x, y, style);
        }
    }

    fn circle_raster(&mut self, cx: i32, cy: i32, radius: i32, style: Style, filled: bool) {
        let r = radius.max(0);
        let mut x = 0;
        let mut y = r;
        let mut d = 1 - r;
        while x <= y {
            if filled {
                self.hline(cx - y, cx + y, cy - x, style);
                self.hline(cx - y, cx + y, cy + x, style);
                self.hline(cx - x, cx + x, cy - y, style);
                self.hline(cx - x, cx + x, cy + y, style);
            } else {
                self.plot(cx + x, cy + y, style);
                self.plot(cx - x, cy + y, style);
                self.plot(cx + x, cy - y, style);
                self.plot(cx - x, cy - y, style);
                self.plot(cx + y, cy + x, style);
                self.plot(cx - y, cy + x, style);
                self.plot(cx + y, cy - x, style);
                self.plot(cx - y, cy - x, style);
            }
            x += 1;
            if d < 0 {
                d += 2 * x + 1;
            } else {
                y -= 1;
                d += 2 * (x - y) + 1;
            }
        }
    }

    fn ellipse_raster(&mut self, left: i32, top: i32, right: i32, bottom: i32, style: Style, filled: bool) {
        let cx = (left + right) / 2;
        let cy = (top + bottom) / 2;
        let rx = i64::from((right - left) / 2);
        let ry = i64::from((bottom - top) / 2);

        // Degenerate boxes collapse to a segment (or a dot).
        if rx == 0 || ry == 0 {
            self.draw_point_line(cx, cy - ry as i32, cx, cy + ry as i32, style);
            self.draw_point_line(cx - rx as i32, cy, cx + rx as i32, cy, style);
            return;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let mut x: i64 = 0;
        let mut y: i64 = ry;
        let mut dx: i64 = 0;
        let mut dy: i64 = 2 * rx2 * y;

        // Region 1: gradient > -1, step in x.
        let mut p = ry2 - rx2 * ry + rx2 / 4;
        while dx < dy {
            self.ellipse_emit(cx, cy, x as i32, y as i32, style, filled);
            x += 1;
            dx += 2 * ry2;
            if p < 0 {
                p += dx + ry2;
            } else {
                y -= 1;
                dy -= 2 * rx2;
                p += dx - dy + ry2;
            }
        }

        // Region 2: step in y down to the horizontal axis.
        let mut p2 = ry2 * (2 * x + 1) * (2 * x + 1) / 4 + rx2 * (y - 1) * (y - 1) - rx2 * ry2;
        while y >= 0 {
            self.ellipse_emit(cx, cy, x as i32, y as i32, style, filled);
            y -= 1;
            dy -= 2 * rx2;
            if p2 > 0 {
                p2 += rx2 - dy;
            } else {
                x += 1;
                dx += 2 * ry2;
                p2 += dx - dy + rx2;
            }
        }
    }

    fn ellipse_emit(&mut self, cx: i32, cy: i32, x: i32, y: i32, style: Style, filled: bool) {
        if filled {
            self.hline(cx - x, cx + x, cy - y, style);
            self.hline(cx - x, cx + x, cy + y, style);
        } else {
            self.plot(cx + x, cy + y, style);
            self.plot(cx - x, cy + y, style);
            self.plot(cx + x, cy - y, style);
            self.plot(cx - x, cy - y, style);
        }
    }
}

/// Order two corner points into `(left, top, right, bottom)`.
fn normalize_box(x0: i32, y0: i32, x1: i32, y1: i32) -> (i32, i32, i32, i32) {
    (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}
