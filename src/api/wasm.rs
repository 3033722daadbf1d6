use std::mem::size_of;

use wasm_bindgen::prelude::*;

use crate::core::error::SimError;
use crate::domain::{SeedRect, SimParams, SimSettings};
use crate::orchestrator::Orchestrator;
use crate::simulation::PerfStats;

fn to_js(e: SimError) -> JsValue {
    console_warn!("reaction-diffusion: {}", e);
    JsValue::from_str(&e.to_string())
}

/// Where the pixel buffer lives in linear memory. Re-read after every reset:
/// a resize reallocates it.
#[wasm_bindgen]
pub struct PixelLayout {
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl PixelLayout {
    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.height }
}

#[wasm_bindgen]
pub struct ReactionDiffusion {
    core: Orchestrator,
}

#[wasm_bindgen]
impl ReactionDiffusion {
    /// Default rates, centered seed, already rendered once.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<ReactionDiffusion, JsValue> {
        let settings = SimSettings::new(width, height, SimParams::default());
        Ok(Self {
            core: Orchestrator::new(settings).map_err(to_js)?,
        })
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str) -> Result<ReactionDiffusion, JsValue> {
        let settings = SimSettings::from_json(json).map_err(to_js)?;
        Ok(Self {
            core: Orchestrator::new(settings).map_err(to_js)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.simulator().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.simulator().height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.simulator().frame() }

    /// Configure and re-seed with explicit rates.
    pub fn reset(
        &mut self,
        width: u32,
        height: u32,
        diffusion_a: f64,
        diffusion_b: f64,
        feed: f64,
        kill: f64,
    ) -> Result<(), JsValue> {
        let params = SimParams::new(diffusion_a, diffusion_b, feed, kill).map_err(to_js)?;
        self.core
            .reset(SimSettings::new(width, height, params))
            .map_err(to_js)
    }

    pub fn reset_with_settings_json(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = SimSettings::from_json(json).map_err(to_js)?;
        self.core.reset(settings).map_err(to_js)
    }

    /// Extra seed block on the running simulation.
    pub fn seed(&mut self, x_min: u32, x_max: u32, y_min: u32, y_max: u32) -> Result<(), JsValue> {
        let rect = SeedRect::new(x_min, x_max, y_min, y_max).map_err(to_js)?;
        self.core.seed(&rect).map_err(to_js)
    }

    /// Step once. Returns true when this tick refreshed the pixels.
    pub fn run(&mut self) -> bool {
        self.core.run()
    }

    /// One host evaluation cycle. The rate arguments are only read when
    /// `reset` is set.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate(
        &mut self,
        reset: bool,
        run: bool,
        width: u32,
        height: u32,
        diffusion_a: f64,
        diffusion_b: f64,
        feed: f64,
        kill: f64,
    ) -> Result<bool, JsValue> {
        let settings = if reset {
            let params = SimParams::new(diffusion_a, diffusion_b, feed, kill).map_err(to_js)?;
            SimSettings::new(width, height, params)
        } else {
            self.core.settings().clone()
        };
        self.core.evaluate(reset, run, &settings).map_err(to_js)
    }

    /// Force a snapshot pass outside the cadence.
    pub fn render(&mut self) {
        self.core.render_now();
    }

    /// Get pointer to the ABGR pixel buffer (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors().as_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.core.colors().len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors().len() * size_of::<u32>()
    }

    pub fn pixel_layout(&self) -> PixelLayout {
        let colors = self.core.colors();
        PixelLayout {
            colors_ptr: colors.as_ptr() as usize as u32,
            colors_len_elements: colors.len() as u32,
            colors_len_bytes: (colors.len() * size_of::<u32>()) as u32,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Copy of the `a` plane, row-major.
    pub fn concentrations_a(&self) -> Vec<f64> {
        self.core.simulator().snapshot().a_plane()
    }

    /// Copy of the `b` plane, row-major.
    pub fn concentrations_b(&self) -> Vec<f64> {
        self.core.simulator().snapshot().b_plane()
    }

    pub fn cell_a(&self, x: u32, y: u32) -> Option<f64> {
        self.core.simulator().snapshot().get(x, y).map(|c| c.a)
    }

    pub fn cell_b(&self, x: u32, y: u32) -> Option<f64> {
        self.core.simulator().snapshot().get(x, y).map(|c| c.b)
    }

    pub fn debug_log_json(&self) -> String {
        self.core.debug_log_json()
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}
