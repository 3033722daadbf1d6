//! Systems - the numeric update and the pixel shading applied to grids.

pub mod reaction_diffusion;
pub mod shading;
