//! Pixel canvas
//!
//! Data is stored as row-major order (C-format), 3 bytes per pixel

use crate::color::Rgb8;
use crate::error::Result;

use std::ops::Index;
use std::path::Path;

/// Rgb Pixel Buffer
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Canvas {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

const BPP: usize = 3;

impl Canvas {
    /// Create a new canvas of width * height, all black
    pub fn new(width: usize, height: usize) -> Self {
        Canvas { width, height, data: vec![0u8; width * height * BPP] }
    }
    /// Set all pixels to `c`
    pub fn clear(&mut self, c: Rgb8) {
        for pix in self.data.chunks_mut(BPP) {
            pix.copy_from_slice(&[c.r, c.g, c.b]);
        }
    }
    /// Color of pixel at (`x`,`y`)
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        let p = &self[(x,y)];
        Rgb8::new(p[0], p[1], p[2])
    }
    /// Set pixel at (`x`,`y`), locations outside the canvas are ignored
    pub fn set(&mut self, x: i64, y: i64, c: Rgb8) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * BPP;
        self.data[i..i+BPP].copy_from_slice(&[c.r, c.g, c.b]);
    }
    /// Pixel range covered by [a,b), clipped to 0..n
    fn span(a: f64, b: f64, n: usize) -> (i64, i64) {
        let lo = a.round().max(0.0) as i64;
        let hi = b.round().min(n as f64) as i64;
        (lo, hi)
    }
    /// Fill the rectangle from (`x1`,`y1`) to (`x2`,`y2`)
    ///
    /// Pixels whose centers are inside the rectangle are set
    pub fn fill_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, c: Rgb8) {
        let (xa, xb) = Self::span(x1, x2, self.width);
        let (ya, yb) = Self::span(y1, y2, self.height);
        for y in ya .. yb {
            for x in xa .. xb {
                self.set(x, y, c);
            }
        }
    }
    /// Fill a circle centered at (`cx`,`cy`)
    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, c: Rgb8) {
        let (xa, xb) = Self::span(cx - r, cx + r + 1.0, self.width);
        let (ya, yb) = Self::span(cy - r, cy + r + 1.0, self.height);
        for y in ya .. yb {
            for x in xa .. xb {
                let (dx, dy) = (x as f64 + 0.5 - cx, y as f64 + 0.5 - cy);
                if dx * dx + dy * dy <= r * r {
                    self.set(x, y, c);
                }
            }
        }
    }
    /// Draw a segment of `width` from (`x1`,`y1`) to (`x2`,`y2`)
    ///
    /// Segments thinner than a pixel are drawn one pixel wide
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, c: Rgb8) {
        let hw = (width / 2.0).max(0.5);
        let (xa, xb) = Self::span(x1.min(x2) - hw, x1.max(x2) + hw + 1.0, self.width);
        let (ya, yb) = Self::span(y1.min(y2) - hw, y1.max(y2) + hw + 1.0, self.height);
        for y in ya .. yb {
            for x in xa .. xb {
                let d = dist_to_segment(x as f64 + 0.5, y as f64 + 0.5, x1, y1, x2, y2);
                if d <= hw {
                    self.set(x, y, c);
                }
            }
        }
    }
    /// Draw a dashed segment, `dash` drawn then `gap` skipped
    pub fn dashed_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64,
                       width: f64, dash: f64, gap: f64, c: Rgb8) {
        let len = ((x2-x1).powi(2) + (y2-y1).powi(2)).sqrt();
        if len == 0.0 || dash <= 0.0 {
            return;
        }
        let (ux, uy) = ((x2-x1) / len, (y2-y1) / len);
        let mut s = 0.0;
        while s < len {
            let e = (s + dash).min(len);
            self.line(x1 + ux * s, y1 + uy * s, x1 + ux * e, y1 + uy * e, width, c);
            s = e + gap;
        }
    }
    /// Write the canvas to an image file, format chosen by the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        image::save_buffer(filename, &self.data,
                           self.width as u32, self.height as u32,
                           image::RGB(8))?;
        Ok(())
    }
    /// Read a canvas from an image file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Canvas> {
        let img = image::open(filename)?.to_rgb();
        let (w, h) = img.dimensions();
        Ok(Canvas { width: w as usize, height: h as usize, data: img.into_raw() })
    }
}

fn dist_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (dx, dy) = (x2-x1, y2-y1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - x1) * dx + (py - y1) * dy) / len2).max(0.0).min(1.0)
    };
    let (qx, qy) = (x1 + t * dx, y1 + t * dy);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

impl Index<(usize,usize)> for Canvas {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * BPP;
        &self.data[i..i+BPP]
    }
}
