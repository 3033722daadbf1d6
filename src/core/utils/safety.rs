//! Stencil cell access - bounds checked in debug, unchecked in release
//!
//! The reaction-diffusion kernel reads nine cells and writes one for every
//! interior cell, every step. Debug builds keep the slice bounds checks so an
//! off-by-one in the stencil panics with the offending index; release builds
//! drop them. Callers must only pass indices that the grid dimensions already
//! prove are in range.
//!
//! Usage:
//! ```rust
//! use morphogen_engine::cell;
//! use morphogen_engine::core::grid::Cell;
//!
//! let mut cells = vec![Cell::RESTING; 9];
//! // Write: cell!(cells, [index] = value)
//! cell!(cells, [4] = Cell::SEEDED);
//! // Read: cell!(cells, [index])
//! let center = *cell!(cells, [4]);
//! assert_eq!(center, Cell::SEEDED);
//! assert_eq!(*cell!(cells, [3]), Cell::RESTING);
//! ```

/// Read or write one `Cell` of a row-major buffer.
///
/// - `cell!(cells, [idx])` yields `&Cell`
/// - `cell!(cells, [idx] = value)` stores `value`
#[macro_export]
macro_rules! cell {
    ($cells:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$cells[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            // SAFETY: stencil indices are derived from validated grid dimensions.
            unsafe { $cells.get_unchecked($index) }
        }
    }};

    ($cells:expr, [$index:expr] = $val:expr) => {{
        let value = $val;
        #[cfg(debug_assertions)]
        {
            $cells[$index] = value;
        }
        #[cfg(not(debug_assertions))]
        {
            // SAFETY: stencil indices are derived from validated grid dimensions.
            unsafe {
                *$cells.get_unchecked_mut($index) = value;
            }
        }
    }};
}
