//! Colors

/// Color as Red, Green, and Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub const fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub const fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub const fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Create a color from 0xRRGGBB
    pub const fn from_hex(v: u32) -> Self {
        Self::new(((v >> 16) & 0xff) as u8,
                  ((v >> 8) & 0xff) as u8,
                  (v & 0xff) as u8)
    }
    /// Color as `#rrggbb`
    ///
    ///     use scanline::Rgb8;
    ///     assert_eq!(Rgb8::from_hex(0xF2C94C).to_hex(), "#f2c94c");
    ///
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors used when drawing a frame
pub mod palette {
    use super::Rgb8;

    pub const BACKGROUND   : Rgb8 = Rgb8::white();
    pub const FILLED       : Rgb8 = Rgb8::black();
    pub const ACTIVE_ROW   : Rgb8 = Rgb8::from_hex(0xF2C94C);
    pub const GRID         : Rgb8 = Rgb8::from_hex(0x888888);
    pub const SAMPLE_OUT   : Rgb8 = Rgb8::from_hex(0xCCCCCC);
    pub const SAMPLE_IN    : Rgb8 = Rgb8::white();
    pub const SCANLINE     : Rgb8 = Rgb8::from_hex(0x219653);
    pub const CROSSING     : Rgb8 = Rgb8::from_hex(0x2F80ED);
    pub const CURVE_EVEN   : Rgb8 = Rgb8::from_hex(0xBDBDBD);
    pub const CURVE_ODD    : Rgb8 = Rgb8::from_hex(0x4F4F4F);
    pub const CURVE_ACTIVE : Rgb8 = Rgb8::from_hex(0xEB5757);
    pub const CONTROL      : Rgb8 = Rgb8::black();
    pub const START_POINT  : Rgb8 = Rgb8::from_hex(0xEB5757);
    pub const CONTROL_POINT: Rgb8 = Rgb8::from_hex(0x2F80ED);

    /// Stroke color of curve `i`
    pub fn curve(i: usize, active: bool) -> Rgb8 {
        if active {
            CURVE_ACTIVE
        } else if i % 2 == 1 {
            CURVE_ODD
        } else {
            CURVE_EVEN
        }
    }
}
