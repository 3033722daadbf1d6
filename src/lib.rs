//! Morphogen Engine - Gray-Scott reaction-diffusion in WASM
//!
//! Two chemicals on a double-buffered grid, a fixed border ring, and a gray
//! pixel buffer refreshed every few ticks for the host to draw.
//!
//! Architecture:
//! - core/          - Grid storage, errors, utility macros
//! - domain/        - Rates, presets, seed rectangles, settings
//! - systems/       - Stencil update and shading
//! - simulation/    - The double-buffered Simulator
//! - orchestrator/  - Reset/run cadence and snapshot passes
//! - api/           - Public API

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod orchestrator;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Morphogen reaction-diffusion engine v{} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::{PixelLayout, ReactionDiffusion};
pub use crate::core::error::{SimError, SimResult};
pub use crate::core::grid::{Cell, Grid};
pub use domain::{GrayScottPreset, SeedRect, SimParams, SimSettings};
pub use orchestrator::{Orchestrator, RENDER_INTERVAL};
pub use simulation::{PerfStats, Simulator};

// Constants for JS
#[wasm_bindgen]
pub fn render_interval() -> u32 { RENDER_INTERVAL }
#[wasm_bindgen]
pub fn min_grid_side() -> u32 { crate::core::grid::MIN_GRID_SIDE }
#[wasm_bindgen]
pub fn max_grid_side() -> u32 { crate::core::grid::MAX_GRID_SIDE }
