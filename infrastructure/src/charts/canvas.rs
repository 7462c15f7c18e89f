//! Minimal raster plotting surface: axes, grid, polylines and markers in
//! data coordinates. No text rendering; labels live in the reply.

use image::{Rgb, RgbImage};

pub(crate) const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub(crate) const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
pub(crate) const GRID: Rgb<u8> = Rgb([225, 225, 225]);
pub(crate) const BLUE: Rgb<u8> = Rgb([31, 119, 180]);
pub(crate) const ORANGE: Rgb<u8> = Rgb([255, 127, 14]);
pub(crate) const GREEN: Rgb<u8> = Rgb([44, 160, 44]);
pub(crate) const RED: Rgb<u8> = Rgb([214, 39, 40]);

const MARGIN: u32 = 48;
const GRID_LINES: u32 = 10;

/// Closed interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Tight bounds of `values` with 5% padding; flat data gets ±1.
    pub fn padded(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if !min.is_finite() {
            return Self::new(0.0, 1.0);
        }
        if (max - min).abs() < f64::EPSILON {
            return Self::new(min - 1.0, max + 1.0);
        }
        let pad = (max - min) * 0.05;
        Self::new(min - pad, max + pad)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }
}

pub(crate) struct Canvas {
    image: RgbImage,
    x: Range,
    y: Range,
}

impl Canvas {
    pub fn new(width: u32, height: u32, x: Range, y: Range) -> Self {
        let mut canvas = Self {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
            x,
            y,
        };
        canvas.draw_frame();
        canvas
    }

    fn plot_left(&self) -> f64 {
        f64::from(MARGIN)
    }

    fn plot_right(&self) -> f64 {
        f64::from(self.image.width().saturating_sub(MARGIN / 2))
    }

    fn plot_top(&self) -> f64 {
        f64::from(MARGIN / 2)
    }

    fn plot_bottom(&self) -> f64 {
        f64::from(self.image.height().saturating_sub(MARGIN))
    }

    /// Data coordinates to pixel coordinates (y grows downwards).
    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let px = self.plot_left() + (x - self.x.min) / self.x.span() * (self.plot_right() - self.plot_left());
        let py = self.plot_bottom() - (y - self.y.min) / self.y.span() * (self.plot_bottom() - self.plot_top());
        (px.round() as i64, py.round() as i64)
    }

    fn draw_frame(&mut self) {
        let (left, right) = (self.plot_left() as i64, self.plot_right() as i64);
        let (top, bottom) = (self.plot_top() as i64, self.plot_bottom() as i64);

        for i in 0..=GRID_LINES {
            let t = f64::from(i) / f64::from(GRID_LINES);
            let gx = left + ((right - left) as f64 * t).round() as i64;
            let gy = top + ((bottom - top) as f64 * t).round() as i64;
            self.line_px((gx, top), (gx, bottom), GRID);
            self.line_px((left, gy), (right, gy), GRID);
        }

        self.line_px((left, bottom), (right, bottom), AXIS);
        self.line_px((left, top), (left, bottom), AXIS);
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Bresenham line between two pixels.
    fn line_px(&mut self, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
        let (mut x0, mut y0) = from;
        let (x1, y1) = to;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Two-pixel-thick line through consecutive data points.
    pub fn polyline(&mut self, points: &[(f64, f64)], color: Rgb<u8>) {
        for pair in points.windows(2) {
            let a = self.to_pixel(pair[0].0, pair[0].1);
            let b = self.to_pixel(pair[1].0, pair[1].1);
            self.line_px(a, b, color);
            self.line_px((a.0, a.1 + 1), (b.0, b.1 + 1), color);
        }
    }

    /// Filled square marker centred on a data point.
    pub fn marker(&mut self, x: f64, y: f64, color: Rgb<u8>) {
        let (cx, cy) = self.to_pixel(x, y);
        for dy in -3..=3 {
            for dx in -3..=3 {
                self.put(cx + dx, cy + dy, color);
            }
        }
    }

    /// Dashed guide lines from a point down to the x axis and across to the y axis.
    pub fn guides(&mut self, x: f64, y: f64, color: Rgb<u8>) {
        let (px, py) = self.to_pixel(x, y);
        let (left, bottom) = (self.plot_left() as i64, self.plot_bottom() as i64);
        for yy in (py..bottom).step_by(6) {
            self.line_px((px, yy), (px, (yy + 2).min(bottom)), color);
        }
        for xx in (left..px).step_by(6) {
            self.line_px((xx, py), ((xx + 2).min(px), py), color);
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
