//! Animation driver
//!
//! One tick reveals one more row: the frame is computed with the cursor
//!   as `max_y`, handed to the renderer, and the cursor advances.  The
//!   cursor runs past the last row for a few idle ticks before wrapping.

use crate::cell::DrawOptions;
use crate::error::Result;
use crate::paths::CurveList;
use crate::raster::RasterizerScanline;
use crate::render::Render;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// Handle to stop a running Animator
#[derive(Debug,Clone,Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Owner of the reveal cursor
#[derive(Debug,Clone)]
pub struct Animator {
    cursor: usize,
    period: usize,
    pub interval: Duration,
    stop: StopHandle,
}

impl Default for Animator {
    /// 32 rows plus 4 idle ticks, 200ms apart
    fn default() -> Self {
        Self::new(36, Duration::from_millis(200))
    }
}

impl Animator {
    /// Cursor wraps to 0 after `period` ticks, starting from row 1
    pub fn new(period: usize, interval: Duration) -> Self {
        let period = std::cmp::max(1, period);
        Self { cursor: 1 % period, period, interval, stop: StopHandle::default() }
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn period(&self) -> usize {
        self.period
    }
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }
    /// Row to reveal on this tick; advances the cursor
    ///
    ///     use scanline::Animator;
    ///     use std::time::Duration;
    ///
    ///     let mut a = Animator::new(3, Duration::from_millis(0));
    ///     let rows : Vec<_> = (0..5).map(|_| a.step()).collect();
    ///     assert_eq!(rows, vec![1,2,0,1,2]);
    ///
    pub fn step(&mut self) -> usize {
        let row = self.cursor;
        self.cursor = (self.cursor + 1) % self.period;
        row
    }
    /// Render a frame every interval until stopped, or until `frames`
    ///   frames have been rendered
    ///
    /// Returns the number of frames rendered
    pub fn run<R: Render>(&mut self,
                          ras: &RasterizerScanline,
                          curves: &CurveList,
                          options: DrawOptions,
                          ren: &mut R,
                          frames: Option<usize>) -> Result<usize> {
        log::info!("animation start: period {} interval {:?}", self.period, self.interval);
        let done = |n: usize| frames.map_or(false, |max| n >= max);
        let mut n = 0;
        while ! self.stop.is_stopped() && ! done(n) {
            let row = self.step();
            let frame = ras.frame(curves, &options.max_y(row));
            ren.render(&frame)?;
            n += 1;
            if done(n) || self.stop.is_stopped() {
                break;
            }
            std::thread::sleep(self.interval);
        }
        log::info!("animation stop after {} frames", n);
        Ok(n)
    }
}
