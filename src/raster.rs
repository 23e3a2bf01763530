//! Winding numbers along scanlines

use crate::math::derivative;
use crate::math::evaluate;
use crate::paths::CurveList;
use crate::scan::intersect;
use crate::cell::Cell;
use crate::cell::CellState;
use crate::cell::DrawOptions;
use crate::cell::Frame;

/// Curve crossing of a scanline
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Intersection {
    /// x location of the crossing
    pub x: f64,
    /// y component of the curve tangent at the crossing
    pub dy: f64,
}

impl Intersection {
    /// Contribution to the winding number of points left of the crossing
    pub fn direction(&self) -> i64 {
        if self.dy > 0.0 { -1 } else { 1 }
    }
}

/// Rule deciding if a winding number is inside the outline
#[derive(Debug,PartialEq,Copy,Clone)]
pub enum FillingRule {
    NonZero,
    EvenOdd,
}
impl Default for FillingRule {
    fn default() -> FillingRule {
        FillingRule::NonZero
    }
}

impl FillingRule {
    pub fn is_inside(&self, winding: i64) -> bool {
        match self {
            FillingRule::NonZero => winding != 0,
            FillingRule::EvenOdd => winding % 2 != 0,
        }
    }
}

/// All crossings of the outline on a single row
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Scanline {
    /// Row index
    pub y: usize,
    /// Crossings, in curve order
    pub intersections: Vec<Intersection>,
    /// Indices of curves crossing this row
    pub active: Vec<usize>,
}

impl Scanline {
    /// Intersect every curve with the center of row `y`
    pub fn sweep(curves: &CurveList, y: usize) -> Self {
        let ys = y as f64 + 0.5;
        let mut intersections = vec![];
        let mut active = vec![];
        for (i, curve) in curves.iter().enumerate() {
            let ts = intersect(curve, ys);
            if ! ts.is_empty() {
                active.push(i);
            }
            intersections.extend(ts.iter().map(|&t| {
                Intersection { x: evaluate(curve, t).x,
                               dy: derivative(curve, t).y }
            }));
        }
        log::trace!("SWEEP SCANLINE: y {} crossings {}", y, intersections.len());
        Self { y, intersections, active }
    }
    /// Winding number at the center of column `x`
    ///
    /// Only crossings strictly right of the center are counted
    pub fn winding_number(&self, x: usize) -> i64 {
        let xc = x as f64 + 0.5;
        self.intersections.iter()
            .filter(|i| i.x > xc)
            .map(|i| i.direction())
            .sum()
    }
}

/// Grid rasterizer
///
/// Every call recomputes from the curves; nothing is cached between
///   rows or frames.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct RasterizerScanline {
    pub width: usize,
    pub height: usize,
    filling_rule: FillingRule,
}

impl Default for RasterizerScanline {
    fn default() -> Self {
        Self::new(32, 32)
    }
}

impl RasterizerScanline {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, filling_rule: FillingRule::NonZero }
    }
    pub fn filling_rule(mut self, filling_rule: FillingRule) -> Self {
        self.filling_rule = filling_rule;
        self
    }
    pub fn rule(&self) -> FillingRule {
        self.filling_rule
    }
    pub fn scanline(&self, curves: &CurveList, y: usize) -> Scanline {
        Scanline::sweep(curves, y)
    }
    pub fn winding_number(&self, curves: &CurveList, x: usize, y: usize) -> i64 {
        self.scanline(curves, y).winding_number(x)
    }
    pub fn is_inside(&self, curves: &CurveList, x: usize, y: usize) -> bool {
        self.filling_rule.is_inside(self.winding_number(curves, x, y))
    }
    /// Sweep every row and classify every cell
    ///
    /// Rows above `max_y` are filled or empty, row `max_y` is the active
    ///   scanline and rows below are pending.
    pub fn frame<'a>(&self, curves: &'a CurveList, options: &DrawOptions) -> Frame<'a> {
        let max_y = options.max_y;
        let mut cells = Vec::with_capacity(self.width * self.height);
        let mut active = vec![false; curves.len()];
        let mut crossings = vec![];
        for y in 0 .. self.height {
            let sl = self.scanline(curves, y);
            if y == max_y {
                for &i in &sl.active {
                    active[i] = true;
                }
                crossings = sl.intersections.clone();
            }
            for x in 0 .. self.width {
                let winding = sl.winding_number(x);
                let state = if y == max_y {
                    CellState::Active
                } else if y < max_y {
                    if self.filling_rule.is_inside(winding) {
                        CellState::Filled
                    } else {
                        CellState::Empty
                    }
                } else {
                    CellState::Pending
                };
                cells.push(Cell { state, winding });
            }
        }
        log::debug!("FRAME: max_y {} active curves {} crossings {}",
                    max_y, active.iter().filter(|&&a| a).count(), crossings.len());
        Frame { width: self.width, height: self.height,
                options: *options, curves,
                cells, active, crossings }
    }
}
