use serde::{Deserialize, Serialize};

use crate::core::error::{SimError, SimResult};

use super::presets::GrayScottPreset;

/// The model advances one unit of time per step.
pub const TIME_STEP: f64 = 1.0;

pub const DEFAULT_DIFFUSION_A: f64 = 1.0;
pub const DEFAULT_DIFFUSION_B: f64 = 0.3;
pub const DEFAULT_FEED: f64 = 0.055;
pub const DEFAULT_KILL: f64 = 0.062;

/// Gray-Scott rates, validated once and immutable afterwards.
///
/// Deserializing goes through the same validation as [`SimParams::new`], so
/// a `SimParams` value always holds finite, non-negative rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SimParamsRecord", rename_all = "camelCase")]
pub struct SimParams {
    diffusion_a: f64,
    diffusion_b: f64,
    feed: f64,
    kill: f64,
}

impl SimParams {
    pub fn new(diffusion_a: f64, diffusion_b: f64, feed: f64, kill: f64) -> SimResult<Self> {
        check_rate("diffusionA", diffusion_a)?;
        check_rate("diffusionB", diffusion_b)?;
        check_rate("feed", feed)?;
        check_rate("kill", kill)?;
        Ok(Self {
            diffusion_a,
            diffusion_b,
            feed,
            kill,
        })
    }

    /// Default diffusion rates with the preset's feed/kill pair.
    pub fn from_preset(preset: GrayScottPreset) -> Self {
        Self::default().with_preset(preset)
    }

    /// Keep the diffusion rates, take feed/kill from `preset`.
    pub fn with_preset(self, preset: GrayScottPreset) -> Self {
        let (feed, kill) = preset.feed_kill();
        Self { feed, kill, ..self }
    }

    #[inline]
    pub fn diffusion_a(&self) -> f64 { self.diffusion_a }

    #[inline]
    pub fn diffusion_b(&self) -> f64 { self.diffusion_b }

    #[inline]
    pub fn feed(&self) -> f64 { self.feed }

    #[inline]
    pub fn kill(&self) -> f64 { self.kill }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            diffusion_a: DEFAULT_DIFFUSION_A,
            diffusion_b: DEFAULT_DIFFUSION_B,
            feed: DEFAULT_FEED,
            kill: DEFAULT_KILL,
        }
    }
}

fn check_rate(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidRate { name, value })
    }
}

/// Wire shape of [`SimParams`]; missing fields fall back to the defaults.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SimParamsRecord {
    diffusion_a: f64,
    diffusion_b: f64,
    feed: f64,
    kill: f64,
}

impl Default for SimParamsRecord {
    fn default() -> Self {
        Self {
            diffusion_a: DEFAULT_DIFFUSION_A,
            diffusion_b: DEFAULT_DIFFUSION_B,
            feed: DEFAULT_FEED,
            kill: DEFAULT_KILL,
        }
    }
}

impl TryFrom<SimParamsRecord> for SimParams {
    type Error = SimError;

    fn try_from(r: SimParamsRecord) -> SimResult<Self> {
        SimParams::new(r.diffusion_a, r.diffusion_b, r.feed, r.kill)
    }
}
