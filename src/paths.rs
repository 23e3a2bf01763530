//! Path commands and the curve list built from them

use crate::math::Point;
use crate::math::QuadCurve;
use crate::math::Rectangle;
use crate::transform::Transform;

use std::ops::Deref;

/// Drawing command
///
/// Each command continues from the end point of the previous one
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path at a point
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Quadratic curve through a control point to an end point
    Curve3(Point, Point),
}

impl PathCommand {
    /// End point of the command
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) |
            PathCommand::LineTo(p) |
            PathCommand::Curve3(_, p) => p,
        }
    }
}

/// Sequence of Path Commands
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self { commands: vec![] }
    }
    pub fn remove_all(&mut self) {
        self.commands.clear();
    }
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push( PathCommand::MoveTo(Point::new(x,y)) );
    }
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push( PathCommand::LineTo(Point::new(x,y)) );
    }
    pub fn curve3(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.commands.push( PathCommand::Curve3(Point::new(x1,y1),
                                                Point::new(x,y)) );
    }
    pub fn len(&self) -> usize {
        self.commands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
    /// Convert the path into quadratic curves in the space given by `trans`
    ///
    /// Sub-paths are expected to be closed already; nothing is added to
    ///   close them.
    pub fn to_curves(&self, trans: &Transform) -> CurveList {
        CurveList::from_commands(&self.commands, trans)
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Path {
        Path { commands }
    }
}

/// Outline as quadratic curves in pixel space
///
/// Built once and only read afterwards.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct CurveList {
    curves: Vec<QuadCurve>,
}

impl CurveList {
    /// Fold the commands into curves, carrying the current point along
    pub fn from_commands(commands: &[PathCommand], trans: &Transform) -> Self {
        let init : (Option<Point>, Vec<QuadCurve>) = (None, vec![]);
        let (_, curves) = commands.iter().fold(init, |(cur, mut curves), cmd| {
            let end = trans.apply(cmd.end());
            match (*cmd, cur) {
                (PathCommand::MoveTo(_), _) => { },
                (PathCommand::LineTo(_), Some(p0)) => {
                    curves.push( QuadCurve::line(p0, end) );
                },
                (PathCommand::Curve3(ctrl, _), Some(p0)) => {
                    curves.push( QuadCurve::new(p0, trans.apply(ctrl), end) );
                },
                (_, None) => {
                    log::warn!("{:?} without a current point, treated as a move", cmd);
                },
            }
            (Some(end), curves)
        });
        log::debug!("CURVES: {} from {} commands", curves.len(), commands.len());
        Self { curves }
    }
    pub fn curves(&self) -> &[QuadCurve] {
        &self.curves
    }
    /// Bounds of all curve points, control points included
    ///
    /// The curves lie within this rectangle
    pub fn bounding_box(&self) -> Option<Rectangle> {
        let first = self.curves.first()?;
        let mut r = Rectangle::new(first.p0.x, first.p0.y, first.p0.x, first.p0.y);
        for c in &self.curves {
            for p in &[c.p0, c.p1, c.p2] {
                r.expand(p.x, p.y);
            }
        }
        Some(r)
    }
}

impl Deref for CurveList {
    type Target = [QuadCurve];
    fn deref(&self) -> &[QuadCurve] {
        &self.curves
    }
}

impl From<Vec<QuadCurve>> for CurveList {
    fn from(curves: Vec<QuadCurve>) -> CurveList {
        CurveList { curves }
    }
}
