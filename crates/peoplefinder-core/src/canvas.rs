//! Canvas - RGB raster for annotation output
//!
//! Pixels are stored row-major as 32-bit `0xRRGGBBAA` words (see
//! [`crate::color`]). Drawing primitives clip silently at the border.

use crate::color;
use crate::error::{Error, Result};
use crate::point::Point;

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    /// Magenta color
    pub const MAGENTA: Color = Color {
        r: 255,
        g: 0,
        b: 255,
    };

    /// Compose as 32-bit RGBA pixel
    pub fn to_pixel32(&self) -> u32 {
        color::compose_rgb(self.r, self.g, self.b)
    }

    /// Convert to grayscale value (0-255)
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// RGB image of `rows x cols` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: u32,
    cols: u32,
    data: Vec<u32>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(rows: u32, cols: u32, background: Color) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![background.to_pixel32(); rows as usize * cols as usize],
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Get the `(r, g, b)` value at `(row, col)`.
    pub fn get_rgb(&self, row: u32, col: u32) -> Option<(u8, u8, u8)> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let pixel = self.data[row as usize * self.cols as usize + col as usize];
        Some(color::extract_rgb(pixel))
    }

    /// Set one pixel. Points off the canvas are ignored.
    pub fn set_color(&mut self, p: Point, c: Color) {
        if !p.within(0, 0, self.rows as i32, self.cols as i32) {
            return;
        }
        let idx = p.row as usize * self.cols as usize + p.col as usize;
        self.data[idx] = c.to_pixel32();
    }

    /// Paint every point in `pts`.
    pub fn render_points(&mut self, pts: &[Point], c: Color) {
        for &p in pts {
            self.set_color(p, c);
        }
    }

    /// Draw an 8-connected line between two points.
    pub fn render_line(&mut self, from: Point, to: Point, c: Color) {
        let pts = generate_line_points(from, to);
        self.render_points(&pts, c);
    }

    /// Draw a one-pixel circle outline.
    pub fn render_circle(&mut self, center: Point, radius: u32, c: Color) {
        let pts = generate_circle_outline_points(center, radius);
        self.render_points(&pts, c);
    }
}

/// Generate the points of a line using Bresenham's integer algorithm.
///
/// The line connects `from` to `to` with 8-connectivity, endpoints included.
pub fn generate_line_points(from: Point, to: Point) -> Vec<Point> {
    if from == to {
        return vec![from];
    }

    let dr = (to.row - from.row).abs();
    let dc = (to.col - from.col).abs();
    let sr = if to.row > from.row { 1i32 } else { -1 };
    let sc = if to.col > from.col { 1i32 } else { -1 };

    let npts = dr.max(dc) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut row = from.row;
    let mut col = from.col;

    if dc >= dr {
        // Step along columns (more horizontal)
        let mut err = dc / 2;
        for _ in 0..npts {
            pts.push(Point::new(row, col));
            err -= dr;
            if err < 0 {
                row += sr;
                err += dc;
            }
            col += sc;
        }
    } else {
        // Step along rows (more vertical)
        let mut err = dr / 2;
        for _ in 0..npts {
            pts.push(Point::new(row, col));
            err -= dc;
            if err < 0 {
                col += sc;
                err += dr;
            }
            row += sr;
        }
    }

    pts
}

/// Generate the points of a circle outline of the given radius.
pub fn generate_circle_outline_points(center: Point, radius: u32) -> Vec<Point> {
    if radius == 0 {
        return vec![center];
    }

    let r_outer = radius as f32 + 0.5;
    let r_inner = radius as f32 - 0.5;
    let r_outer_sq = r_outer * r_outer;
    let r_inner_sq = r_inner * r_inner;
    let extent = (r_outer + 1.0) as i32;

    let mut pts = Vec::with_capacity(8 * radius as usize);
    for dr in -extent..=extent {
        for dc in -extent..=extent {
            let dist_sq = (dr * dr + dc * dc) as f32;
            if dist_sq <= r_outer_sq && dist_sq >= r_inner_sq {
                pts.push(center.offset(dr, dc));
            }
        }
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endpoints_included() {
        let pts = generate_line_points(Point::new(0, 0), Point::new(3, 6));
        assert_eq!(pts.first(), Some(&Point::new(0, 0)));
        assert_eq!(pts.last(), Some(&Point::new(3, 6)));
        assert_eq!(pts.len(), 7);
    }

    #[test]
    fn test_vertical_line() {
        let pts = generate_line_points(Point::new(5, 2), Point::new(1, 2));
        assert_eq!(pts.len(), 5);
        assert!(pts.iter().all(|p| p.col == 2));
    }

    #[test]
    fn test_circle_is_symmetric() {
        let c = Point::new(10, 10);
        let pts = generate_circle_outline_points(c, 2);
        assert!(pts.contains(&Point::new(8, 10)));
        assert!(pts.contains(&Point::new(12, 10)));
        assert!(pts.contains(&Point::new(10, 8)));
        assert!(pts.contains(&Point::new(10, 12)));
        assert!(!pts.contains(&c));
    }

    #[test]
    fn test_render_clips() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK).unwrap();
        canvas.render_line(Point::new(-2, -2), Point::new(6, 6), Color::GREEN);
        assert_eq!(canvas.get_rgb(0, 0), Some((0, 255, 0)));
        assert_eq!(canvas.get_rgb(3, 3), Some((0, 255, 0)));
        assert_eq!(canvas.get_rgb(0, 3), Some((0, 0, 0)));
    }
}
