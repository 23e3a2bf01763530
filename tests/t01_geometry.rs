
extern crate scanline;

use scanline::{Point,QuadCurve,evaluate,derivative};

fn curves() -> Vec<QuadCurve> {
    vec![
        QuadCurve::new(Point::new(0.,0.), Point::new(10.,20.), Point::new(20.,0.)),
        QuadCurve::new(Point::new(-3.25,7.1), Point::new(1e3,-4.5), Point::new(0.1,0.2)),
        QuadCurve::line(Point::new(1.5,2.5), Point::new(8.0,-6.0)),
    ]
}

#[test]
fn t01_end_points_exact() {
    for c in curves() {
        assert_eq!(evaluate(&c, 0.0), c.p0);
        assert_eq!(evaluate(&c, 1.0), c.p2);
    }
}

#[test]
fn t01_midpoint() {
    let c = &curves()[0];
    assert_eq!(evaluate(c, 0.5), Point::new(10.0, 10.0));
    // Flat at the peak
    assert_eq!(derivative(c, 0.5).y, 0.0);
    assert!(derivative(c, 0.25).y > 0.0);
    assert!(derivative(c, 0.75).y < 0.0);
}

#[test]
fn t01_derivative_end_points() {
    for c in curves() {
        let d0 = derivative(&c, 0.0);
        let d1 = derivative(&c, 1.0);
        assert!((d0.x - 2.0 * (c.p1.x - c.p0.x)).abs() < 1e-9);
        assert!((d0.y - 2.0 * (c.p1.y - c.p0.y)).abs() < 1e-9);
        assert!((d1.x - 2.0 * (c.p2.x - c.p1.x)).abs() < 1e-9);
        assert!((d1.y - 2.0 * (c.p2.y - c.p1.y)).abs() < 1e-9);
    }
}

#[test]
fn t01_line_is_straight() {
    let c = &curves()[2];
    for i in 0 ..= 10 {
        let p = c.point_at(i as f64 / 10.0);
        // Cross product with the segment direction
        let cross = (p.x - c.p0.x) * (c.p2.y - c.p0.y) - (p.y - c.p0.y) * (c.p2.x - c.p0.x);
        assert!(cross.abs() < 1e-9, "{:?} off the line", p);
    }
    let pts = c.flatten(4);
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[0], c.p0);
    assert_eq!(pts[4], c.p2);
}
