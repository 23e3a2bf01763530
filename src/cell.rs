//! Grid cells and the per-frame classification handed to renderers

use crate::math::QuadCurve;
use crate::paths::CurveList;
use crate::raster::Intersection;

/// Classification of a single grid cell
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum CellState {
    /// Below the reveal cursor, not drawn yet
    Pending,
    /// On the active scanline
    Active,
    /// Inside the outline
    Filled,
    /// Outside the outline
    Empty,
}

impl Default for CellState {
    fn default() -> CellState {
        CellState::Pending
    }
}

#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Cell {
    pub state: CellState,
    /// Winding number at the cell center
    pub winding: i64,
}

/// Options for drawing a frame
///
///     use scanline::DrawOptions;
///
///     let opts = DrawOptions::new().curves(true).intersections(true).max_y(5);
///     assert!(opts.draw_curves);
///     assert!(! opts.draw_controls);
///     assert_eq!(opts.max_y, 5);
///
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct DrawOptions {
    /// Overlay curve outlines
    pub draw_curves: bool,
    /// Mark crossings on the active scanline
    pub draw_intersections: bool,
    /// Mark sample dots within each cell
    pub draw_centers: bool,
    /// Overlay control polygons
    pub draw_controls: bool,
    /// Row of the reveal cursor
    pub max_y: usize,
}

impl DrawOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn curves(mut self, v: bool) -> Self {
        self.draw_curves = v;
        self
    }
    pub fn intersections(mut self, v: bool) -> Self {
        self.draw_intersections = v;
        self
    }
    pub fn centers(mut self, v: bool) -> Self {
        self.draw_centers = v;
        self
    }
    pub fn controls(mut self, v: bool) -> Self {
        self.draw_controls = v;
        self
    }
    pub fn max_y(mut self, max_y: usize) -> Self {
        self.max_y = max_y;
        self
    }
}

/// Result of sweeping every row of the grid once
#[derive(Debug,Clone,PartialEq)]
pub struct Frame<'a> {
    pub width: usize,
    pub height: usize,
    pub options: DrawOptions,
    pub curves: &'a CurveList,
    /// Cells in row-major order
    pub cells: Vec<Cell>,
    /// Curves crossing the active scanline, indexed as `curves`
    pub active: Vec<bool>,
    /// Crossings on the active scanline
    pub crossings: Vec<Intersection>,
}

impl<'a> Frame<'a> {
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.width, "request {} >= {} width :: cell", x, self.width);
        assert!(y < self.height, "request {} >= {} height :: cell", y, self.height);
        self.cells[y * self.width + x]
    }
    pub fn row(&self, y: usize) -> &[Cell] {
        assert!(y < self.height, "request {} >= {} height :: row", y, self.height);
        &self.cells[y * self.width .. (y + 1) * self.width]
    }
    /// Cells with their (x,y) location
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let w = self.width;
        self.cells.iter().enumerate().map(move |(i, &c)| (i % w, i / w, c))
    }
    /// Curves with their active flag
    pub fn curves(&self) -> impl Iterator<Item = (&QuadCurve, bool)> + '_ {
        self.curves.iter().zip(self.active.iter().cloned())
    }
    /// Scanline y value of the active row, if it lies on the grid
    pub fn active_y(&self) -> Option<f64> {
        if self.options.max_y < self.height {
            Some(self.options.max_y as f64 + 0.5)
        } else {
            None
        }
    }
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }
}
