//! Built in outline: a lowercase "e"
//!
//! Coordinates are in glyph units, y up, two closed sub-paths: the
//!   outer contour and the counter.

use crate::paths::Path;
use crate::paths::CurveList;
use crate::transform::Transform;

/// Glyph units to pixels
pub const SCALE: f64 = 0.065;
/// Baseline location in pixels
pub const OFFSET: f64 = 30.0;

/// Transform placing the outline on a 32x32 grid
pub fn transform() -> Transform {
    Transform::glyph_to_pixel(SCALE, OFFSET)
}

/// Outline of the letter "e"
pub fn letter_e() -> Path {
    let mut p = Path::new();
    p.move_to(358.0, 109.0);
    p.line_to(370.0, 97.0);
    p.curve3(326.0, 46.0, 271.0, 17.5);
    p.curve3(216.0, -11.0, 163.0, -11.0);
    p.curve3(104.0, -11.0, 67.5, 27.0);
    p.curve3(31.0, 65.0, 31.0, 126.0);
    p.curve3(31.0, 199.0, 76.0, 273.0);
    p.curve3(121.0, 347.0, 191.5, 394.0);
    p.curve3(262.0, 441.0, 332.0, 441.0);
    p.curve3(369.0, 441.0, 390.5, 423.0);
    p.curve3(412.0, 405.0, 412.0, 373.0);
    p.curve3(412.0, 308.0, 340.0, 257.0);
    p.curve3(268.0, 206.0, 156.0, 190.0);
    p.line_to(128.0, 186.0);
    p.curve3(118.0, 146.0, 118.0, 124.0);
    p.curve3(118.0, 83.0, 143.5, 58.5);
    p.curve3(169.0, 34.0, 212.0, 34.0);
    p.curve3(244.0, 34.0, 274.0, 49.5);
    p.curve3(304.0, 65.0, 358.0, 109.0);

    p.move_to(135.0, 208.0);
    p.curve3(189.0, 221.0, 229.5, 240.0);
    p.curve3(270.0, 259.0, 291.5, 277.0);
    p.curve3(313.0, 295.0, 326.0, 316.0);
    p.curve3(339.0, 337.0, 342.5, 351.0);
    p.curve3(346.0, 365.0, 346.0, 379.0);
    p.curve3(346.0, 396.0, 336.5, 407.0);
    p.curve3(327.0, 418.0, 311.0, 418.0);
    p.curve3(273.0, 418.0, 225.0, 368.5);
    p.curve3(177.0, 319.0, 152.0, 252.0);
    p.line_to(135.0, 208.0);
    p
}

/// Curves of the letter "e" in pixel space
pub fn letter_e_curves() -> CurveList {
    letter_e().to_curves(&transform())
}
