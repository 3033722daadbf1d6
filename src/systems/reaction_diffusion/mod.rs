//! Reaction-Diffusion System - Gray-Scott update over one grid pair
//!
//! - 9-point discrete Laplacian (center -1, orthogonal 0.2, diagonal 0.05)
//! - Explicit Euler with a unit time step
//! - Every written concentration clamped to [0, 1]
//! - Border ring read as neighbors, never written (fixed boundary)

mod kernel;
mod update;

pub use kernel::{CENTER_WEIGHT, DIAGONAL_WEIGHT, ORTHOGONAL_WEIGHT};
pub use update::{constrain, react, react_diffuse};
