
extern crate scanline;

use scanline::{Font,Error,RasterizerScanline,DrawOptions,CellState};

// Depends on the fonts installed on the machine
fn any_font() -> Option<Font> {
    for family in &["DejaVu Sans", "Liberation Sans", "Arial", "Helvetica"] {
        match Font::system(family) {
            Ok(font) => return Some(font),
            Err(Error::FontNotFound(_)) => { },
            Err(e) => panic!("{}: {}", family, e),
        }
    }
    None
}

#[test]
fn t08_font_not_found() {
    match Font::system("No Such Font Family 0123") {
        Err(Error::FontNotFound(name)) => assert_eq!(name, "No Such Font Family 0123"),
        Err(e) => panic!("unexpected error {}", e),
        Ok(_) => { },
    }
}

#[test]
fn t08_glyph_outline() {
    let font = match any_font() {
        Some(font) => font,
        None => return,
    };
    let path = match font.glyph('o') {
        Ok(path) => path,
        // Postscript outlines
        Err(Error::UnsupportedCurve(_)) => return,
        Err(e) => panic!("{}", e),
    };
    assert!(! path.is_empty());
    let ras = RasterizerScanline::new(32, 32);
    let curves = path.to_curves(&font.transform(ras.height));
    let frame = ras.frame(&curves, &DrawOptions::new().max_y(32));
    assert!(frame.count(CellState::Filled) > 0);
    // Top row is above the x-height
    assert!(ras.scanline(&curves, 0).intersections.is_empty());
}
