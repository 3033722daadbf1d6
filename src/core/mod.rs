//! Core - grid storage, error taxonomy and the macros every system leans on.
//!
//! `utils` must stay first so its exported macros are in textual scope for
//! the modules declared after it.

#[macro_use]
pub mod utils;
pub mod error;
pub mod grid;
