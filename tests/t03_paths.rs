
extern crate scanline;

use scanline::{Path,PathCommand,Point,QuadCurve,Transform,CurveList,glyph};

#[test]
fn t03_line_is_degenerate_curve() {
    let mut path = Path::new();
    path.move_to(1.0, 2.0);
    path.line_to(5.0, 6.0);
    path.curve3(7.0, 8.0, 9.0, 10.0);
    let curves = path.to_curves(&Transform::new());
    assert_eq!(curves.curves(), &[
        QuadCurve::new(Point::new(1.,2.), Point::new(5.,6.), Point::new(5.,6.)),
        QuadCurve::new(Point::new(5.,6.), Point::new(7.,8.), Point::new(9.,10.)),
    ]);
}

#[test]
fn t03_transform_applied() {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.curve3(10.0, 20.0, 20.0, 0.0);
    let curves = path.to_curves(&Transform::glyph_to_pixel(0.5, 30.0));
    assert_eq!(curves[0], QuadCurve::new(Point::new(0.,30.),
                                         Point::new(5.,20.),
                                         Point::new(10.,30.)));
}

#[test]
fn t03_move_starts_new_subpath() {
    let path = Path::from(vec![
        PathCommand::MoveTo(Point::new(0.,0.)),
        PathCommand::LineTo(Point::new(1.,0.)),
        PathCommand::MoveTo(Point::new(5.,5.)),
        PathCommand::LineTo(Point::new(6.,5.)),
    ]);
    let curves = path.to_curves(&Transform::new());
    assert_eq!(curves.len(), 2);
    assert_eq!(curves[1].p0, Point::new(5.,5.));
}

#[test]
fn t03_draw_before_move() {
    let path = Path::from(vec![
        PathCommand::LineTo(Point::new(1.,0.)),
        PathCommand::LineTo(Point::new(2.,0.)),
    ]);
    let curves = path.to_curves(&Transform::new());
    assert_eq!(curves.len(), 1);
    assert_eq!(curves[0].p0, Point::new(1.,0.));
}

#[test]
fn t03_empty_path() {
    let curves = Path::new().to_curves(&Transform::new());
    assert!(curves.is_empty());
    assert_eq!(curves.bounding_box(), None);
    assert_eq!(CurveList::default(), curves);
}

#[test]
fn t03_letter_e() {
    let path = glyph::letter_e();
    assert_eq!(path.len(), 30);
    let curves = glyph::letter_e_curves();
    assert_eq!(curves.len(), 28);

    // Both sub-paths are closed
    assert_eq!(curves[17].p2, curves[0].p0);
    assert_eq!(curves[27].p2, curves[18].p0);

    let r = curves.bounding_box().unwrap();
    assert!((r.x1 - 31.0 * 0.065).abs() < 1e-9);
    assert!((r.x2 - 412.0 * 0.065).abs() < 1e-9);
    assert!((r.y1 - (30.0 - 441.0 * 0.065)).abs() < 1e-9);
    assert!((r.y2 - (30.0 + 11.0 * 0.065)).abs() < 1e-9);
}
