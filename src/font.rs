//! Outlines from installed fonts
//!
//! Fonts are found by family with font-loader and decoded by FreeType.
//!   Only fonts with quadratic outlines (TrueType) can be used.

use crate::error::Error;
use crate::error::Result;
use crate::math::Point;
use crate::paths::Path;
use crate::transform::Transform;

use font_loader::system_fonts;
use freetype::face::LoadFlag;
use freetype::outline::Curve;

pub use freetype as ft;

/// Glyph outlines from a single font face
pub struct Font {
    face: ft::Face,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.face.family_name())
            .field("em_size", &self.face.em_size())
            .finish()
    }
}

impl Font {
    /// Load the regular face of an installed font family
    pub fn system(family: &str) -> Result<Self> {
        let property = system_fonts::FontPropertyBuilder::new()
            .family(family)
            .build();
        let (data, index) = system_fonts::get(&property)
            .ok_or_else(|| Error::FontNotFound(family.to_string()))?;
        log::debug!("font {}: {} bytes, face {}", family, data.len(), index);
        let lib = ft::Library::init()?;
        let face = lib.new_memory_face(data, index as isize)?;
        Ok(Self { face })
    }
    /// Load a font file
    pub fn from_file<P: AsRef<std::path::Path>>(filename: P) -> Result<Self> {
        let lib = ft::Library::init()?;
        let face = lib.new_face(filename.as_ref(), 0)?;
        Ok(Self { face })
    }
    /// Font units per em
    pub fn em_size(&self) -> f64 {
        f64::from(self.face.em_size())
    }
    /// Transform placing a glyph of this font on a grid `height` pixels tall
    ///
    /// The em box spans 80% of the grid, with the baseline at 78%
    pub fn transform(&self, height: usize) -> Transform {
        let h = height as f64;
        Transform::glyph_to_pixel(0.8 * h / self.em_size(), 0.78 * h)
    }
    /// Outline of `ch` in font units, y up
    ///
    /// Every contour is closed with a line back to its start when it does
    ///   not already end there
    pub fn glyph(&self, ch: char) -> Result<Path> {
        self.face.load_char(ch as usize, LoadFlag::NO_SCALE)?;
        let outline = self.face.glyph().outline()
            .ok_or(Error::MissingOutline(ch))?;
        let mut path = Path::new();
        for contour in outline.contours_iter() {
            let start = to_point(contour.start());
            path.move_to(start.x, start.y);
            let mut last = start;
            for curve in contour {
                match curve {
                    Curve::Line(p) => {
                        last = to_point(&p);
                        path.line_to(last.x, last.y);
                    },
                    Curve::Bezier2(c, p) => {
                        let c = to_point(&c);
                        last = to_point(&p);
                        path.curve3(c.x, c.y, last.x, last.y);
                    },
                    Curve::Bezier3(..) => {
                        return Err(Error::UnsupportedCurve(ch));
                    },
                }
            }
            if last != start {
                path.line_to(start.x, start.y);
            }
        }
        log::debug!("glyph {:?}: {} commands", ch, path.len());
        Ok(path)
    }
}

fn to_point(v: &ft::Vector) -> Point {
    Point::new(v.x as f64, v.y as f64)
}
