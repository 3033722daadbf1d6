use std::slice::ChunksExact;

use super::*;

impl Grid {
    /// Cell at (x, y), `None` outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Rows top to bottom, each `width` cells long.
    pub fn rows(&self) -> ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Copy of every `a` concentration, row-major.
    pub fn a_plane(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.a).collect()
    }

    /// Copy of every `b` concentration, row-major.
    pub fn b_plane(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.b).collect()
    }
}
