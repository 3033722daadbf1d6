use crate::core::error::SimResult;
use crate::core::grid::{check_dimensions, Cell, Grid};
use crate::domain::SimParams;

use super::perf_stats::PerfStats;
use super::Simulator;

pub(super) fn create_simulator(width: u32, height: u32, params: SimParams) -> SimResult<Simulator> {
    let current = Grid::new(width, height)?;
    // `next` starts as an independent copy so its border ring matches `current`.
    let next = current.clone();

    Ok(Simulator {
        params,
        current,
        next,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

pub(super) fn configure(sim: &mut Simulator, width: u32, height: u32, params: SimParams) -> SimResult<()> {
    check_dimensions(width, height)?;

    if width == sim.current.width() && height == sim.current.height() {
        sim.current.fill(Cell::RESTING);
        sim.next.fill(Cell::RESTING);
    } else {
        sim.current = Grid::filled(width, height, Cell::RESTING);
        sim.next = Grid::filled(width, height, Cell::RESTING);
    }

    sim.params = params;
    sim.frame = 0;
    sim.perf_stats.reset();
    Ok(())
}
