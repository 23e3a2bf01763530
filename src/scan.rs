//! Intersection of a curve with a horizontal scanline

use crate::math::QuadCurve;

/// Parameters `t` in [0,1] where the curve crosses `y = ys`
///
/// The curve's y coordinate is written as `a t^2 + b t + c` with
///
///   a = y2 - 2 y1 + y0
///   b = 2 y1 - 2 y0
///   c = y0 - ys
///
/// and the roots of the quadratic are kept if they fall in [0,1],
///   end points included.  A curve that is flat in y (a = b = 0)
///   never crosses.  Root order is not significant.
///
///     use scanline::{Point,QuadCurve,intersect};
///
///     let c = QuadCurve::line(Point::new(0.,0.), Point::new(0.,10.));
///     assert_eq!(intersect(&c, 5.0).len(), 1);
///     assert!(intersect(&c, 12.0).is_empty());
///
pub fn intersect(curve: &QuadCurve, ys: f64) -> Vec<f64> {
    let (y0, y1, y2) = (curve.p0.y, curve.p1.y, curve.p2.y);
    let a = y2 - 2.0 * y1 + y0;
    let b = 2.0 * y1 - 2.0 * y0;
    let c = y0 - ys;

    let mut ts = Vec::with_capacity(2);
    if a == 0.0 {
        // Linear in t
        if b != 0.0 {
            push_unit(&mut ts, -c / b);
        }
        return ts;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return ts;
    }
    if discriminant == 0.0 {
        push_unit(&mut ts, -b / (2.0 * a));
        return ts;
    }
    let sqrt_d = discriminant.sqrt();
    push_unit(&mut ts, (-b - sqrt_d) / (2.0 * a));
    push_unit(&mut ts, (-b + sqrt_d) / (2.0 * a));
    ts
}

fn push_unit(ts: &mut Vec<f64>, t: f64) {
    if t >= 0.0 && t <= 1.0 {
        ts.push(t);
    }
}
