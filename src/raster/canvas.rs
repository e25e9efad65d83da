//! In-memory truecolor canvas and drawing primitives.
//!
//! Coordinates are signed so primitives can compute off-canvas points;
//! any write outside `[0, width) x [0, height)` is dropped.

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Length of the two arrowhead barbs
const ARROW_BARB_LEN: f64 = 8.0;
/// Barb angle relative to the shaft, in radians (about 149 degrees)
const ARROW_BARB_ANGLE: f64 = 2.6;

const GLYPH_WIDTH: i32 = 4;
const GLYPH_HEIGHT: i32 = 6;
const GLYPH_ADVANCE: i32 = 6;
const TEXT_MAX_CHARS: usize = 30;

/// Fixed-size RGB pixel grid, origin top-left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let len = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(len * 3);
        for _ in 0..len {
            pixels.extend_from_slice(&[background.r, background.g, background.b]);
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major RGB bytes, `width * height * 3` long
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One scanline of RGB bytes
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * 3;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }

    /// Color at (x, y), or `None` off-canvas
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| Rgb::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.r;
            self.pixels[i + 1] = color.g;
            self.pixels[i + 2] = color.b;
        }
    }

    /// Integer Bresenham line, both endpoints included
    ///
    /// Endpoints are put in a canonical order first, so swapping them
    /// plots exactly the same pixels.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let ((mut x, mut y), (x1, y1)) = if (x0, y0) <= (x1, y1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };

        let dx = (x1 - x).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let dy = -(y1 - y).abs();
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);
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

    /// Filled rectangle over `[x0, x1) x [y0, y1)`, clipped to the canvas
    pub fn rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let x_start = x0.max(0);
        let y_start = y0.max(0);
        let x_end = x1.min(self.width.min(i32::MAX as u32) as i32);
        let y_end = y1.min(self.height.min(i32::MAX as u32) as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Circle outline sampled at 360 one-degree steps
    ///
    /// Large radii leave gaps between samples.
    pub fn circle_outline(&mut self, cx: i32, cy: i32, r: i32, color: Rgb) {
        for deg in 0..360 {
            let rad = f64::from(deg).to_radians();
            let x = (f64::from(cx) + f64::from(r) * rad.cos()).round() as i32;
            let y = (f64::from(cy) + f64::from(r) * rad.sin()).round() as i32;
            self.set_pixel(x, y, color);
        }
    }

    /// Line with a two-barb arrowhead at (x1, y1)
    pub fn arrow(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        self.line(x0, y0, x1, y1, color);

        let angle = f64::from(y1 - y0).atan2(f64::from(x1 - x0));
        for delta in [ARROW_BARB_ANGLE, -ARROW_BARB_ANGLE] {
            let hx = (f64::from(x1) + ARROW_BARB_LEN * (angle + delta).cos()).round() as i32;
            let hy = (f64::from(y1) + ARROW_BARB_LEN * (angle + delta).sin()).round() as i32;
            self.line(x1, y1, hx, hy, color);
        }
    }

    /// Stamp a 4x6 block for each non-space character, 6px apart
    ///
    /// Placeholder glyphs only mark where a label sits; text past
    /// 30 characters is cut.
    pub fn text_block(&mut self, x: i32, y: i32, text: &str, color: Rgb) {
        for (i, ch) in text.chars().take(TEXT_MAX_CHARS).enumerate() {
            if ch == ' ' {
                continue;
            }
            let left = x + i as i32 * GLYPH_ADVANCE;
            self.rectangle(left, y, left + GLYPH_WIDTH, y + GLYPH_HEIGHT, color);
        }
    }
}
