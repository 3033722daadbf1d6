//! Domain - the validated records a host hands the engine.

pub mod params;
pub mod presets;
pub mod seed_rect;
pub mod settings;

pub use params::{SimParams, TIME_STEP};
pub use presets::GrayScottPreset;
pub use seed_rect::SeedRect;
pub use settings::SimSettings;
