//! Orchestrator - reset/run driver around one Simulator
//!
//! Mirrors a host evaluation cycle: an optional reset (configure + seed), then
//! an optional single step. Re-shading the pixel buffer is the expensive part,
//! so it only happens on every `RENDER_INTERVAL`-th run tick and right after a
//! reset.

use crate::core::error::SimResult;
use crate::domain::{SeedRect, SimSettings};
use crate::simulation::{PerfStats, Simulator};

mod cadence;
mod render_extract;

use cadence::RenderCadence;

/// Run ticks between two snapshot passes.
pub const RENDER_INTERVAL: u32 = 6;

pub struct Orchestrator {
    settings: SimSettings,
    sim: Simulator,
    cadence: RenderCadence,

    // Snapshot output
    colors: Vec<u32>,
    debug_log: Vec<String>,

    // Perf
    last_render_ms: f64,
    renders: u32,
}

impl Orchestrator {
    /// Configure, seed and render once.
    pub fn new(settings: SimSettings) -> SimResult<Self> {
        settings.validate()?;
        let mut sim = Simulator::new(settings.width, settings.height, settings.resolved_params())?;
        sim.seed_rect(&settings.resolved_seed())?;

        let mut orch = Orchestrator {
            colors: Vec::with_capacity(sim.snapshot().size()),
            settings,
            sim,
            cadence: RenderCadence::new(RENDER_INTERVAL),
            debug_log: Vec::new(),
            last_render_ms: 0.0,
            renders: 0,
        };
        orch.render_now();
        Ok(orch)
    }

    /// Reconfigure from `settings` and re-seed. Rejected settings leave the
    /// running simulation untouched.
    pub fn reset(&mut self, settings: SimSettings) -> SimResult<()> {
        if let Err(e) = settings.validate() {
            console_warn!("reset rejected: {}", e);
            return Err(e);
        }

        self.sim
            .configure(settings.width, settings.height, settings.resolved_params())?;
        self.sim.seed_rect(&settings.resolved_seed())?;

        console_log!(
            "reaction-diffusion reset: {}x{} {:?}",
            settings.width,
            settings.height,
            settings.resolved_params()
        );

        self.settings = settings;
        self.debug_log.clear();
        self.cadence.reset();
        self.renders = 0;
        self.render_now();
        Ok(())
    }

    /// Step once. Every `RENDER_INTERVAL`-th call re-shades the pixels first,
    /// so the snapshot lags the grid by one step. Returns whether it rendered.
    pub fn run(&mut self) -> bool {
        self.debug_log.clear();

        let rendered = self.cadence.tick();
        if rendered {
            render_extract::render(self);
        }

        self.sim.step();
        self.debug_log.push(self.sim.frame().to_string());
        rendered
    }

    /// One host evaluation: reset first when asked, then step when asked.
    pub fn evaluate(&mut self, reset: bool, run: bool, settings: &SimSettings) -> SimResult<bool> {
        if reset {
            self.reset(settings.clone())?;
        }
        Ok(run && self.run())
    }

    /// Extra seed on top of the running simulation; refreshes the pixels.
    pub fn seed(&mut self, rect: &SeedRect) -> SimResult<()> {
        self.sim.seed_rect(rect)?;
        self.render_now();
        Ok(())
    }

    /// Re-shade outside the cadence.
    pub fn render_now(&mut self) {
        render_extract::render(self);
    }

    /// Gray ABGR pixels from the last snapshot pass, row-major.
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    /// Frame number of the last run, as text.
    pub fn debug_log(&self) -> &[String] {
        &self.debug_log
    }

    pub fn debug_log_json(&self) -> String {
        serde_json::to_string(&self.debug_log).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn simulator(&self) -> &Simulator {
        &self.sim
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.sim.enable_perf_metrics(enabled);
        if !enabled {
            self.last_render_ms = 0.0;
        }
    }

    /// Last step stats plus snapshot timing (zeros when perf disabled).
    pub fn perf_stats(&self) -> PerfStats {
        let mut stats = self.sim.perf_stats();
        if self.sim.perf_enabled() {
            stats.render_ms = self.last_render_ms;
            stats.renders = self.renders;
        }
        stats
    }
}
