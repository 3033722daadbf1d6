//! Grid - dense row-major buffer of chemical concentration pairs
//!
//! Cells are plain `Copy` values stored contiguously (`y * width + x`), so the
//! 3x3 stencil walks three adjacent rows of one allocation. The simulator owns
//! two grids of identical dimensions and swaps them every step; neither is
//! ever reallocated until the next configure.

use crate::core::error::{SimError, SimResult};

mod indexing;
mod accessors;

/// Smallest side that still leaves one interior cell inside the fixed border.
pub const MIN_GRID_SIDE: u32 = 3;
/// Upper bound per side; keeps `width * height` well inside `u32`/wasm32 memory.
pub const MAX_GRID_SIDE: u32 = 4096;

/// Concentrations of chemical A and chemical B at one grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub a: f64,
    pub b: f64,
}

impl Cell {
    /// Steady, uninteresting state every cell starts in.
    pub const RESTING: Cell = Cell { a: 1.0, b: 0.0 };
    /// Perturbed state written by seeding.
    pub const SEEDED: Cell = Cell { a: 0.0, b: 1.0 };

    #[inline]
    pub const fn new(a: f64, b: f64) -> Self {
        Cell { a, b }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::RESTING
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `width x height` grid with every cell resting (a=1, b=0).
    pub fn new(width: u32, height: u32) -> SimResult<Self> {
        check_dimensions(width, height)?;
        Ok(Self::filled(width, height, Cell::RESTING))
    }

    /// Caller has already run `check_dimensions`.
    pub(crate) fn filled(width: u32, height: u32, cell: Cell) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![cell; size],
        }
    }

    /// Reset every cell to `cell` without reallocating.
    pub(crate) fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }
}

/// Reject grids the stencil cannot run on.
pub fn check_dimensions(width: u32, height: u32) -> SimResult<()> {
    if width < MIN_GRID_SIDE || height < MIN_GRID_SIDE {
        return Err(SimError::GridTooSmall { width, height });
    }
    if width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
        return Err(SimError::GridTooLarge { width, height });
    }
    Ok(())
}
