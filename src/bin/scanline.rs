//! Animated scanline demo
//!
//! Writes one image per tick into OUT_DIR (default `frames`), revealing
//!   one row at a time.  FRAMES defaults to a single full cycle.
//!   Log level is read from SCANLINE_LOG (default `info`).

use scanline::{Animator, DrawOptions, Font, Format, FrameSequence, RasterizerScanline};

use clap::Parser;
use env_logger::Env;

#[derive(Debug, Parser)]
#[command(version, about = "Scanline rasterization of a glyph, one row per frame")]
struct Args {
    /// Output directory for the frames
    #[arg(default_value = "frames")]
    dir: String,

    /// Number of frames to write, one full cycle by default
    frames: Option<usize>,

    /// Write svg frames instead of png
    #[arg(long)]
    svg: bool,

    /// Outline a character of an installed font instead of the built in "e"
    #[arg(long, num_args = 2, value_names = ["FAMILY", "CHAR"])]
    font: Option<Vec<String>>,
}

impl Args {
    fn format(&self) -> Format {
        if self.svg { Format::Svg } else { Format::Png }
    }
    /// Font family and character from `--font`
    fn font(&self) -> Option<(&str, char)> {
        match self.font.as_deref() {
            Some([family, ch]) => ch.chars().next().map(|c| (family.as_str(), c)),
            _ => None,
        }
    }
}

fn run(args: &Args) -> scanline::Result<()> {
    let ras = RasterizerScanline::new(32, 32);
    let curves = match args.font() {
        Some((family, ch)) => {
            let font = Font::system(family)?;
            font.glyph(ch)?.to_curves(&font.transform(ras.height))
        },
        None => scanline::glyph::letter_e_curves(),
    };
    let options = DrawOptions::new()
        .curves(true)
        .centers(true)
        .intersections(true);
    let mut anim = Animator::default();
    let frames = args.frames.unwrap_or_else(|| anim.period());
    let mut out = FrameSequence::new(&args.dir, args.format(), 16)?;
    anim.run(&ras, &curves, options, &mut out, Some(frames))?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("SCANLINE_LOG", "info")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
