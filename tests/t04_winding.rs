
extern crate scanline;

use scanline::{Path,Transform,CurveList,RasterizerScanline,FillingRule,Intersection,glyph};

fn square(path: &mut Path, x1: f64, y1: f64, x2: f64, y2: f64) {
    path.move_to(x1, y1);
    path.line_to(x2, y1);
    path.line_to(x2, y2);
    path.line_to(x1, y2);
    path.line_to(x1, y1);
}

fn one_square() -> CurveList {
    let mut path = Path::new();
    square(&mut path, 4.0, 4.0, 20.0, 20.0);
    path.to_curves(&Transform::new())
}

#[test]
fn t04_direction() {
    assert_eq!(Intersection { x: 0.0, dy: 1.0 }.direction(), -1);
    assert_eq!(Intersection { x: 0.0, dy: -1.0 }.direction(), 1);
    assert_eq!(Intersection { x: 0.0, dy: 0.0 }.direction(), 1);
}

#[test]
fn t04_square_matches_geometry() {
    let curves = one_square();
    let ras = RasterizerScanline::new(32, 32);
    for y in 0 .. 32 {
        let sl = ras.scanline(&curves, y);
        for x in 0 .. 32 {
            let inside = x >= 4 && x < 20 && y >= 4 && y < 20;
            let w = sl.winding_number(x);
            assert_eq!(w != 0, inside, "x,y {} {} winding {}", x, y, w);
            assert_eq!(ras.is_inside(&curves, x, y), inside);
        }
    }
    // Right edge runs down, left edge up
    assert_eq!(ras.winding_number(&curves, 10, 10), -1);
}

#[test]
fn t04_outside_bounding_box_is_zero() {
    let curves = glyph::letter_e_curves();
    let r = curves.bounding_box().unwrap();
    let ras = RasterizerScanline::new(32, 32);
    for y in 0 .. 32 {
        let sl = ras.scanline(&curves, y);
        for x in 0 .. 32 {
            if ! r.contains(x as f64 + 0.5, y as f64 + 0.5) {
                assert_eq!(sl.winding_number(x), 0, "x,y {} {}", x, y);
            }
        }
    }
}

#[test]
fn t04_letter_e() {
    let curves = glyph::letter_e_curves();
    let ras = RasterizerScanline::new(32, 32);
    assert!(ras.scanline(&curves, 0).intersections.is_empty());
    assert!(ras.scanline(&curves, 31).intersections.is_empty());
    // Bottom of the bowl
    assert!(ras.is_inside(&curves, 13, 28));
    // Left stem
    assert!(ras.is_inside(&curves, 4, 20));
    // Counter
    assert!(! ras.is_inside(&curves, 18, 8));
    // Open side of the "e"
    assert!(! ras.is_inside(&curves, 20, 20));
    // Crossings come in pairs on a closed outline
    for y in 0 .. 32 {
        let sl = ras.scanline(&curves, y);
        assert_eq!(sl.intersections.len() % 2, 0, "row {}", y);
        assert_eq!(sl.winding_number(0), 0, "row {}", y);
    }
}

#[test]
fn t04_filling_rules() {
    let mut path = Path::new();
    square(&mut path, 4.0, 4.0, 20.0, 20.0);
    square(&mut path, 12.0, 4.0, 28.0, 20.0);
    let curves = path.to_curves(&Transform::new());

    let nonzero = RasterizerScanline::new(32, 32);
    let evenodd = RasterizerScanline::new(32, 32).filling_rule(FillingRule::EvenOdd);
    assert_eq!(nonzero.rule(), FillingRule::NonZero);
    assert_eq!(evenodd.rule(), FillingRule::EvenOdd);

    // Overlap
    assert_eq!(nonzero.winding_number(&curves, 15, 10), -2);
    assert!(nonzero.is_inside(&curves, 15, 10));
    assert!(! evenodd.is_inside(&curves, 15, 10));
    // Single coverage
    assert!(nonzero.is_inside(&curves, 8, 10));
    assert!(evenodd.is_inside(&curves, 8, 10));
    assert!(evenodd.is_inside(&curves, 24, 10));
    // Outside
    assert!(! nonzero.is_inside(&curves, 30, 10));
    assert!(! evenodd.is_inside(&curves, 30, 10));
}
