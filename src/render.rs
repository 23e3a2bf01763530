//! Renderers
//!
//! A renderer draws a [Frame]: the grid cells, then the optional sample
//!   dots, scanline and crossings, curves and control polygons, in that
//!   order.
//!
//! [Frame]: ../cell/struct.Frame.html

use crate::canvas::Canvas;
use crate::cell::CellState;
use crate::cell::Frame;
use crate::color::palette;
use crate::color::Rgb8;
use crate::error::Result;
use crate::transform::Transform;

use svg::Document;
use svg::node::element;
use svg::node::element::Group;
use svg::node::element::path::Data;

use std::path::Path;
use std::path::PathBuf;

/// Grid line width when sample dots are drawn
const GRID_WIDTH: f64 = 0.05;
const SCANLINE_WIDTH: f64 = 0.15;
const CURVE_WIDTH: f64 = 0.1;
const SAMPLE_RADIUS: f64 = 0.1;
const CROSSING_RADIUS: f64 = 0.3;
const POINT_RADIUS: f64 = 0.2;
const DASH: (f64, f64) = (0.1, 0.2);
/// Offsets of the sample dots within a cell
const SAMPLES: [(f64, f64); 4] = [(0.3, 0.3), (0.3, 0.7), (0.7, 0.3), (0.7, 0.7)];
/// Straight pieces used to draw a single curve
const CURVE_STEPS: usize = 24;

/// Draw a Frame
pub trait Render {
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

fn fill_color(state: CellState) -> Option<Rgb8> {
    match state {
        CellState::Active  => Some(palette::ACTIVE_ROW),
        CellState::Filled  => Some(palette::FILLED),
        CellState::Empty |
        CellState::Pending => None,
    }
}

/// Raster renderer, each grid cell `pixels` wide
#[derive(Debug,Default,Clone)]
pub struct ImageRenderer {
    pub pixels: f64,
    pub canvas: Canvas,
    trans: Transform,
}

impl ImageRenderer {
    pub fn new(pixels: usize) -> Self {
        let pixels = pixels as f64;
        Self { pixels, canvas: Canvas::new(0,0),
               trans: Transform::new_scale(pixels, pixels) }
    }
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, c: Rgb8) {
        let (x1,y1) = self.trans.transform(x1,y1);
        let (x2,y2) = self.trans.transform(x2,y2);
        self.canvas.line(x1, y1, x2, y2, width * self.pixels, c);
    }
    fn dashed(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, c: Rgb8) {
        let (x1,y1) = self.trans.transform(x1,y1);
        let (x2,y2) = self.trans.transform(x2,y2);
        let s = self.pixels;
        self.canvas.dashed_line(x1, y1, x2, y2, CURVE_WIDTH * s,
                                DASH.0 * s, DASH.1 * s, c);
    }
    fn circle(&mut self, cx: f64, cy: f64, r: f64, c: Rgb8) {
        let (cx,cy) = self.trans.transform(cx,cy);
        self.canvas.fill_circle(cx, cy, r * self.pixels, c);
    }
    fn rect(&mut self, x: f64, y: f64, c: Rgb8) {
        let (x1,y1) = self.trans.transform(x,y);
        let (x2,y2) = self.trans.transform(x + 1.0, y + 1.0);
        self.canvas.fill_rect(x1, y1, x2, y2, c);
    }
    /// Write the last rendered frame to an image file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        self.canvas.to_file(filename)
    }
}

impl Render for ImageRenderer {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        let opts = frame.options;
        let w = (frame.width as f64 * self.pixels).round() as usize;
        let h = (frame.height as f64 * self.pixels).round() as usize;
        self.canvas = Canvas::new(w, h);
        self.canvas.clear(palette::BACKGROUND);

        for (x, y, cell) in frame.iter() {
            let (xf, yf) = (x as f64, y as f64);
            if let Some(c) = fill_color(cell.state) {
                self.rect(xf, yf, c);
            }
            if opts.draw_centers {
                let (gx, gy) = (xf + 1.0, yf + 1.0);
                self.line(gx, yf, gx, gy, GRID_WIDTH, palette::GRID);
                self.line(xf, gy, gx, gy, GRID_WIDTH, palette::GRID);
                if y < opts.max_y {
                    let c = sample_color(cell.winding);
                    for (dx, dy) in SAMPLES.iter() {
                        self.circle(xf + dx, yf + dy, SAMPLE_RADIUS, c);
                    }
                }
            }
        }
        if opts.draw_intersections {
            if let Some(ys) = frame.active_y() {
                self.line(0.0, ys, frame.width as f64, ys, SCANLINE_WIDTH, palette::SCANLINE);
                for i in &frame.crossings {
                    self.circle(i.x, ys, CROSSING_RADIUS, palette::CROSSING);
                }
            }
        }
        if opts.draw_curves {
            for (i, (curve, active)) in frame.curves().enumerate() {
                let c = palette::curve(i, active);
                let pts = curve.flatten(CURVE_STEPS);
                for seg in pts.windows(2) {
                    self.line(seg[0].x, seg[0].y, seg[1].x, seg[1].y, CURVE_WIDTH, c);
                }
            }
        }
        if opts.draw_controls {
            for (curve, _) in frame.curves() {
                let (p0, p1, p2) = (curve.p0, curve.p1, curve.p2);
                self.dashed(p0.x, p0.y, p1.x, p1.y, palette::CONTROL);
                self.dashed(p1.x, p1.y, p2.x, p2.y, palette::CONTROL);
                self.circle(p0.x, p0.y, POINT_RADIUS, palette::START_POINT);
                self.circle(p1.x, p1.y, POINT_RADIUS, palette::CONTROL_POINT);
            }
        }
        Ok(())
    }
}

fn sample_color(winding: i64) -> Rgb8 {
    if winding == 0 {
        palette::SAMPLE_OUT
    } else {
        palette::SAMPLE_IN
    }
}

/// Svg renderer, coordinates in grid units
#[derive(Debug,Clone)]
pub struct SvgRenderer {
    pub document: Document,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self { document: Document::new() }
    }
    /// Write the last rendered frame to an svg file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        svg::save(filename, &self.document)?;
        Ok(())
    }
}

fn circle(cx: f64, cy: f64, r: f64, c: Rgb8) -> element::Circle {
    element::Circle::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", r)
        .set("fill", c.to_hex())
}

fn stroke(data: Data, c: Rgb8, width: f64) -> element::Path {
    element::Path::new()
        .set("d", data)
        .set("stroke", c.to_hex())
        .set("stroke-width", width)
        .set("fill", "none")
}

fn xy(x: f64, y: f64) -> (f32, f32) {
    (x as f32, y as f32)
}

impl Render for SvgRenderer {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        let opts = frame.options;
        let mut g = Group::new();
        let stroke_width = if opts.draw_centers { GRID_WIDTH } else { 0.0 };
        for (x, y, cell) in frame.iter() {
            let fill = fill_color(cell.state).map(|c| c.to_hex())
                .unwrap_or_else(|| "none".to_string());
            g = g.add(element::Rectangle::new()
                      .set("x", x)
                      .set("y", y)
                      .set("width", 1)
                      .set("height", 1)
                      .set("stroke", palette::GRID.to_hex())
                      .set("fill", fill)
                      .set("stroke-width", stroke_width));
            if opts.draw_centers && y < opts.max_y {
                let c = sample_color(cell.winding);
                for (dx, dy) in SAMPLES.iter() {
                    g = g.add(circle(x as f64 + dx, y as f64 + dy, SAMPLE_RADIUS, c));
                }
            }
        }
        if opts.draw_intersections {
            if let Some(ys) = frame.active_y() {
                let d = Data::new()
                    .move_to(xy(0.0, ys))
                    .line_to(xy(frame.width as f64, ys));
                g = g.add(stroke(d, palette::SCANLINE, SCANLINE_WIDTH));
                for i in &frame.crossings {
                    g = g.add(circle(i.x, ys, CROSSING_RADIUS, palette::CROSSING));
                }
            }
        }
        if opts.draw_curves {
            for (i, (c, active)) in frame.curves().enumerate() {
                let d = Data::new()
                    .move_to(xy(c.p0.x, c.p0.y))
                    .quadratic_curve_to((c.p1.x as f32, c.p1.y as f32,
                                         c.p2.x as f32, c.p2.y as f32));
                g = g.add(stroke(d, palette::curve(i, active), CURVE_WIDTH));
            }
        }
        if opts.draw_controls {
            for (c, _) in frame.curves() {
                let d = Data::new()
                    .move_to(xy(c.p0.x, c.p0.y))
                    .line_to(xy(c.p1.x, c.p1.y))
                    .line_to(xy(c.p2.x, c.p2.y));
                g = g.add(stroke(d, palette::CONTROL, CURVE_WIDTH)
                          .set("stroke-dasharray", format!("{} {}", DASH.0, DASH.1)));
                g = g.add(circle(c.p0.x, c.p0.y, POINT_RADIUS, palette::START_POINT));
                g = g.add(circle(c.p1.x, c.p1.y, POINT_RADIUS, palette::CONTROL_POINT));
            }
        }
        self.document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("viewBox", (0, 0, frame.width, frame.height))
            .add(g);
        Ok(())
    }
}

/// Output format of a FrameSequence
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Format {
    Png,
    Svg,
}

/// Writes every rendered frame to `dir/frame_NNN.{png,svg}`
#[derive(Debug)]
pub struct FrameSequence {
    dir: PathBuf,
    format: Format,
    image: ImageRenderer,
    svg: SvgRenderer,
    /// Number of frames written
    pub count: usize,
}

impl FrameSequence {
    pub fn new<P: AsRef<Path>>(dir: P, format: Format, pixels: usize) -> Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self { dir: dir.as_ref().to_path_buf(), format,
                  image: ImageRenderer::new(pixels), svg: SvgRenderer::new(),
                  count: 0 })
    }
    /// Path of frame `i`
    pub fn path(&self, i: usize) -> PathBuf {
        let ext = match self.format {
            Format::Png => "png",
            Format::Svg => "svg",
        };
        self.dir.join(format!("frame_{:03}.{}", i, ext))
    }
}

impl Render for FrameSequence {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        let path = self.path(self.count);
        match self.format {
            Format::Png => {
                self.image.render(frame)?;
                self.image.to_file(&path)?;
            },
            Format::Svg => {
                self.svg.render(frame)?;
                self.svg.to_file(&path)?;
            },
        }
        log::info!("wrote {}", path.display());
        self.count += 1;
        Ok(())
    }
}
