use std::mem::size_of;

use crate::core::grid::Cell;
use crate::systems::reaction_diffusion::react_diffuse;

use super::{PerfTimer, Simulator};

pub(super) fn step(sim: &mut Simulator) {
    let timer = if sim.perf_enabled { Some(PerfTimer::start()) } else { None };

    let written = react_diffuse(&sim.current, &mut sim.next, &sim.params);
    std::mem::swap(&mut sim.current, &mut sim.next);
    sim.frame += 1;

    if let Some(timer) = timer {
        let stats = &mut sim.perf_stats;
        stats.step_ms = timer.elapsed_ms();
        stats.cells_updated = written as u32;
        stats.frame = sim.frame;
        stats.grid_size = sim.current.size() as u32;
        // two buffers of (a, b) f64 pairs
        stats.memory_bytes = (sim.current.size() as u32)
            .saturating_mul(2 * size_of::<Cell>() as u32);
    }
}
