use wasm_bindgen::prelude::*;

/// Per-step perf snapshot. All zeros until perf metrics are enabled.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct PerfStats {
    pub(crate) step_ms: f64,
    pub(crate) render_ms: f64,
    pub(crate) cells_updated: u32,
    pub(crate) renders: u32,
    pub(crate) frame: u64,
    pub(crate) grid_size: u32,
    pub(crate) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_updated(&self) -> u32 { self.cells_updated }
    /// Snapshot passes since the last reset.
    #[wasm_bindgen(getter)]
    pub fn renders(&self) -> u32 { self.renders }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
