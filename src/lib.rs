//! Scanline rasterization of quadratic Bezier outlines
//!
//! How does this work
//!    path   = Path( move_to, line_to, curve3 )
//!    curves = path.to_curves( transform )   -- once, glyph to pixel space
//!    ras    = RasterizerScanline( width, height )
//!  Per Frame
//!    ras.frame(curves, options)
//!      Scanline::sweep(curves, y)  -- every row, center at y + 0.5
//!        intersect(curve, y)       -- roots of a t^2 + b t + c in [0,1]
//!        Intersection( x(t), y'(t) )
//!      winding_number(x)           -- crossings right of x + 0.5
//!      FillingRule::is_inside      -- nonzero by default
//!     Output: Cells with State and Winding, Active Curves, Crossings
//!  Render
//!    Render::render(frame)         -- Png or Svg
//!    Animator::run                 -- one row revealed per tick
//!
//!     use scanline::{glyph, RasterizerScanline, DrawOptions, CellState};
//!
//!     let curves = glyph::letter_e_curves();
//!     let ras = RasterizerScanline::new(32, 32);
//!     let frame = ras.frame(&curves, &DrawOptions::new().max_y(32));
//!     assert!(frame.count(CellState::Filled) > 0);
//!     assert_eq!(frame.count(CellState::Pending), 0);
//!

pub mod math;
pub mod transform;
pub mod paths;
pub mod scan;
pub mod raster;
pub mod cell;
pub mod color;
pub mod canvas;
pub mod render;
pub mod anim;
pub mod glyph;
pub mod font;
pub mod error;

pub use crate::math::*;
pub use crate::transform::*;
pub use crate::paths::*;
pub use crate::scan::*;
pub use crate::raster::*;
pub use crate::cell::*;
pub use crate::color::*;
pub use crate::canvas::*;
pub use crate::render::*;
pub use crate::anim::*;
pub use crate::font::*;
pub use crate::error::*;
