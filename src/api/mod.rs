//! Public API: the wasm-bindgen facade

mod wasm;

pub use wasm::{PixelLayout, ReactionDiffusion};
