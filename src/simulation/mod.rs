//! Simulator - double-buffered Gray-Scott grid
//!
//! Owns two equally sized grids. `step` reads `current`, writes the interior
//! of `next`, then swaps the two, so no buffer is ever allocated per step.
//!
//! - Initialization lives in init/
//! - Seeding in seed/
//! - The per-step pass in step/
//! - Perf counters in perf/

use crate::core::error::SimResult;
use crate::core::grid::Grid;
use crate::domain::{SeedRect, SimParams};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "seed/seed.rs"]
mod seed;
#[path = "step/step.rs"]
mod step;

pub use perf_stats::PerfStats;

pub(crate) use perf_timer::PerfTimer;

pub struct Simulator {
    params: SimParams,
    current: Grid,
    next: Grid,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulator {
    /// Allocate a `width x height` simulator with every cell resting. Not seeded.
    pub fn new(width: u32, height: u32, params: SimParams) -> SimResult<Self> {
        init::create_simulator(width, height, params)
    }

    /// Rebuild both buffers at the new size, resting, frame back to 0.
    /// Nothing changes if the dimensions are rejected.
    pub fn configure(&mut self, width: u32, height: u32, params: SimParams) -> SimResult<()> {
        init::configure(self, width, height, params)
    }

    /// Set every cell in `x_min..x_max` by `y_min..y_max` to (a=0, b=1).
    pub fn seed(&mut self, x_min: u32, x_max: u32, y_min: u32, y_max: u32) -> SimResult<()> {
        let rect = SeedRect::new(x_min, x_max, y_min, y_max)?;
        self.seed_rect(&rect)
    }

    pub fn seed_rect(&mut self, rect: &SeedRect) -> SimResult<()> {
        seed::seed_rect(self, rect)
    }

    /// Advance one tick: react-diffuse the interior, swap buffers, count the frame.
    pub fn step(&mut self) {
        step::step(self);
    }

    pub fn steps(&mut self, n: u32) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Current state, read-only.
    pub fn snapshot(&self) -> &Grid {
        &self.current
    }

    pub fn params(&self) -> &SimParams { &self.params }

    pub fn width(&self) -> u32 { self.current.width() }

    pub fn height(&self) -> u32 { self.current.height() }

    /// Steps since the last configure.
    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    pub fn perf_enabled(&self) -> bool { self.perf_enabled }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
