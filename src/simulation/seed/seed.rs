use crate::core::error::SimResult;
use crate::core::grid::{Cell, Grid};
use crate::domain::SeedRect;

use super::Simulator;

/// Seed `rect` into both buffers.
///
/// `step` never writes the border ring, so whatever a buffer holds there is
/// what the grid shows after the swap. Mirroring the seed into `next` keeps
/// seeded border cells fixed across swaps; interior cells of `next` are
/// overwritten before they are ever read.
pub(super) fn seed_rect(sim: &mut Simulator, rect: &SeedRect) -> SimResult<()> {
    rect.check_fits(sim.current.width(), sim.current.height())?;
    fill_rect(&mut sim.current, rect, Cell::SEEDED);
    fill_rect(&mut sim.next, rect, Cell::SEEDED);
    Ok(())
}

fn fill_rect(grid: &mut Grid, rect: &SeedRect, cell: Cell) {
    let w = grid.width() as usize;
    let (x0, x1) = (rect.x_min() as usize, rect.x_max() as usize);
    let cells = grid.cells_mut();
    for y in rect.y_min()..rect.y_max() {
        let row = (y as usize) * w;
        cells[row + x0..row + x1].fill(cell);
    }
}
