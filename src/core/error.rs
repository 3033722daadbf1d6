//! Error taxonomy.
//!
//! Every variant is an invalid-argument condition raised synchronously by
//! configure/seed or settings parsing. Stepping and snapshots never fail.

use thiserror::Error;

use crate::core::grid::{MAX_GRID_SIDE, MIN_GRID_SIDE};

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The stencil needs a one-cell border on every side.
    #[error("grid {width}x{height} is too small: both sides must be at least {}", MIN_GRID_SIDE)]
    GridTooSmall { width: u32, height: u32 },

    #[error("grid {width}x{height} is too large: sides are limited to {}", MAX_GRID_SIDE)]
    GridTooLarge { width: u32, height: u32 },

    /// Rates must be finite and non-negative.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("seed rectangle x {x_min}..{x_max}, y {y_min}..{y_max} is empty")]
    EmptySeedRect { x_min: u32, x_max: u32, y_min: u32, y_max: u32 },

    #[error(
        "seed rectangle x {x_min}..{x_max}, y {y_min}..{y_max} does not fit a {width}x{height} grid"
    )]
    SeedOutOfBounds {
        x_min: u32,
        x_max: u32,
        y_min: u32,
        y_max: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid settings json: {0}")]
    InvalidSettings(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::InvalidSettings(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = SimError::GridTooSmall { width: 2, height: 10 };
        assert_eq!(
            err.to_string(),
            "grid 2x10 is too small: both sides must be at least 3"
        );

        let err = SimError::InvalidRate { name: "feed", value: -0.5 };
        assert_eq!(err.to_string(), "feed must be finite and non-negative, got -0.5");
    }

    #[test]
    fn json_errors_become_invalid_settings() {
        let err: SimError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, SimError::InvalidSettings(_)));
    }
}
