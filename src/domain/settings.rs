use serde::{Deserialize, Serialize};

use crate::core::error::SimResult;
use crate::core::grid::check_dimensions;

use super::params::SimParams;
use super::presets::GrayScottPreset;
use super::seed_rect::SeedRect;

pub const DEFAULT_GRID_SIDE: u32 = 100;

/// Everything a reset needs: resolution, rates and where to seed.
///
/// JSON shape (every field optional):
/// ```json
/// {
///   "width": 128, "height": 96,
///   "params": { "diffusionA": 1.0, "diffusionB": 0.3, "feed": 0.055, "kill": 0.062 },
///   "preset": "coral",
///   "seed": { "xMin": 60, "xMax": 68, "yMin": 44, "yMax": 52 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimSettings {
    #[serde(default = "default_side")]
    pub width: u32,
    #[serde(default = "default_side")]
    pub height: u32,
    #[serde(default)]
    pub params: SimParams,
    /// Overrides `params.feed` / `params.kill` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<GrayScottPreset>,
    /// Centered block when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedRect>,
}

fn default_side() -> u32 {
    DEFAULT_GRID_SIDE
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIDE,
            height: DEFAULT_GRID_SIDE,
            params: SimParams::default(),
            preset: None,
            seed: None,
        }
    }
}

impl SimSettings {
    pub fn new(width: u32, height: u32, params: SimParams) -> Self {
        Self {
            width,
            height,
            params,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        let settings: SimSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Rates actually used by the simulator.
    pub fn resolved_params(&self) -> SimParams {
        match self.preset {
            Some(preset) => self.params.with_preset(preset),
            None => self.params,
        }
    }

    /// Explicit seed, or the centered block. Only meaningful on valid dimensions.
    pub fn resolved_seed(&self) -> SeedRect {
        self.seed
            .unwrap_or_else(|| SeedRect::centered(self.width, self.height))
    }

    /// Everything a reset could reject, checked before any state is touched.
    pub fn validate(&self) -> SimResult<()> {
        check_dimensions(self.width, self.height)?;
        if let Some(seed) = &self.seed {
            seed.check_fits(self.width, self.height)?;
        }
        Ok(())
    }
}
