//! Points and quadratic Bezier curves

use std::ops::Add;
use std::ops::Sub;
use std::ops::Mul;

/// Location in pixel space
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Direction, e.g. the tangent of a curve
pub type Vector = Point;

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        Point::new(self * rhs.x, self * rhs.y)
    }
}

/// Quadratic Bezier curve: start, control and end point
///
/// A straight segment is stored with the control point equal to the
/// end point.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct QuadCurve {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadCurve {
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }
    /// Straight segment from `p0` to `p2`
    pub fn line(p0: Point, p2: Point) -> Self {
        Self::new(p0, p2, p2)
    }
    /// Point on the curve at `t`
    pub fn point_at(&self, t: f64) -> Point {
        evaluate(self, t)
    }
    /// Tangent of the curve at `t`
    pub fn tangent_at(&self, t: f64) -> Vector {
        derivative(self, t)
    }
    /// Points along the curve at `n` equal parameter steps, end points included
    pub fn flatten(&self, n: usize) -> Vec<Point> {
        let n = std::cmp::max(1, n);
        (0 ..= n).map(|i| evaluate(self, i as f64 / n as f64)).collect()
    }
}

/// Evaluate the curve at `t` in [0,1]
///
///   (1-t)^2 p0 + 2 (1-t) t p1 + t^2 p2
///
///     use scanline::{Point,QuadCurve,evaluate};
///
///     let c = QuadCurve::new(Point::new(0.,0.), Point::new(1.,2.), Point::new(2.,0.));
///     assert_eq!(evaluate(&c, 0.0), c.p0);
///     assert_eq!(evaluate(&c, 0.5), Point::new(1.0, 1.0));
///     assert_eq!(evaluate(&c, 1.0), c.p2);
///
pub fn evaluate(c: &QuadCurve, t: f64) -> Point {
    let s = 1.0 - t;
    Point::new(s * s * c.p0.x + 2.0 * s * t * c.p1.x + t * t * c.p2.x,
               s * s * c.p0.y + 2.0 * s * t * c.p1.y + t * t * c.p2.y)
}

/// Derivative of the curve at `t`
///
///   2 (1-t) (p1-p0) + 2 t (p2-p1)
pub fn derivative(c: &QuadCurve, t: f64) -> Vector {
    2.0 * (1.0 - t) * (c.p1 - c.p0) + 2.0 * t * (c.p2 - c.p1)
}

/// Axis aligned rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (x1,x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1,y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1, y1, x2, y2 }
    }
    pub fn expand(&mut self, x: f64, y: f64) {
        self.x1 = self.x1.min(x);
        self.x2 = self.x2.max(x);
        self.y1 = self.y1.min(y);
        self.y2 = self.y2.max(y);
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}
