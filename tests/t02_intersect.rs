
extern crate scanline;

use scanline::{Path,Point,QuadCurve,Transform,RasterizerScanline,DrawOptions};
use scanline::{evaluate,intersect};

#[test]
fn t02_linear_single_root() {
    // Control point at the midpoint: a == 0, b != 0
    let c = QuadCurve::new(Point::new(0.,0.), Point::new(5.,5.), Point::new(10.,10.));
    for &ys in &[0.0, 2.5, 3.7, 9.99, 10.0] {
        let ts = intersect(&c, ys);
        assert_eq!(ts.len(), 1, "ys {}", ys);
        assert!((evaluate(&c, ts[0]).y - ys).abs() < 1e-9);
    }
    assert!(intersect(&c, -0.5).is_empty());
    assert!(intersect(&c, 10.5).is_empty());
}

#[test]
fn t02_horizontal_has_no_roots() {
    let c = QuadCurve::line(Point::new(0.,3.), Point::new(10.,3.));
    assert!(intersect(&c, 3.0).is_empty());
    assert!(intersect(&c, 3.5).is_empty());
    let c = QuadCurve::new(Point::new(0.,3.), Point::new(4.,3.), Point::new(10.,3.));
    assert!(intersect(&c, 3.0).is_empty());
}

#[test]
fn t02_glyph_baseline_line() {
    // Line along y = 0 in glyph space
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(10.0, 0.0);
    let curves = path.to_curves(&Transform::glyph_to_pixel(0.065, 30.0));
    assert_eq!(curves.len(), 1);
    let ys = curves[0].p0.y;
    assert_eq!(ys, 30.0);
    assert!(intersect(&curves[0], ys).is_empty());
    let ras = RasterizerScanline::new(32, 32);
    assert!(ras.scanline(&curves, 29).intersections.is_empty());
    assert!(ras.scanline(&curves, 30).intersections.is_empty());
}

#[test]
fn t02_double_root() {
    let c = QuadCurve::new(Point::new(0.,10.), Point::new(5.,0.), Point::new(10.,10.));
    assert_eq!(intersect(&c, 5.0), vec![0.5]);

    // Vertex at t = -1, outside the curve
    let c = QuadCurve::new(Point::new(0.,0.), Point::new(5.,10.), Point::new(10.,30.));
    assert!(intersect(&c, -10.0).is_empty());
}

#[test]
fn t02_negative_discriminant() {
    let c = QuadCurve::new(Point::new(0.,10.), Point::new(5.,0.), Point::new(10.,10.));
    assert!(intersect(&c, 4.0).is_empty());
    assert!(intersect(&c, -100.0).is_empty());
}

#[test]
fn t02_two_roots() {
    let c = QuadCurve::new(Point::new(0.,31.), Point::new(10.,11.), Point::new(20.,31.));
    let mut ts = intersect(&c, 21.5);
    ts.sort_by(|a,b| a.partial_cmp(b).unwrap());
    assert_eq!(ts.len(), 2);
    assert!((ts[0] - 0.388_196_6).abs() < 1e-6);
    assert!((ts[1] - 0.611_803_4).abs() < 1e-6);
    for t in ts {
        assert!((evaluate(&c, t).y - 21.5).abs() < 1e-9);
    }
}

#[test]
fn t02_end_points_inclusive() {
    let c = QuadCurve::line(Point::new(0.,2.), Point::new(0.,8.));
    assert_eq!(intersect(&c, 2.0).len(), 1);
    assert_eq!(intersect(&c, 8.0).len(), 1);
}

#[test]
fn t02_arc_at_peak_row() {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.curve3(10.0, 20.0, 20.0, 0.0);
    let curves = path.to_curves(&Transform::glyph_to_pixel(0.065, 30.0));
    let c = curves[0];
    let peak = c.point_at(0.5);
    let row = peak.y.floor() as usize;
    assert_eq!(row, 29);

    let ts = intersect(&c, row as f64 + 0.5);
    assert_eq!(ts.len(), 2);
    let mut xs : Vec<_> = ts.iter().map(|&t| evaluate(&c, t).x).collect();
    xs.sort_by(|a,b| a.partial_cmp(b).unwrap());
    assert!(c.p0.x < xs[0] && xs[0] < peak.x);
    assert!(peak.x < xs[1] && xs[1] < c.p2.x);

    let ras = RasterizerScanline::new(32, 32);
    let frame = ras.frame(&curves, &DrawOptions::new().max_y(row));
    assert_eq!(frame.active, vec![true]);
    assert_eq!(frame.crossings.len(), 2);
    let frame = ras.frame(&curves, &DrawOptions::new().max_y(row - 1));
    assert_eq!(frame.active, vec![false]);
    assert!(frame.crossings.is_empty());
}
