use crate::simulation::PerfTimer;
use crate::systems::shading::shade_into;

use super::Orchestrator;

/// Re-shade the whole current grid into the pixel buffer.
pub(super) fn render(orch: &mut Orchestrator) {
    let timer = if orch.sim.perf_enabled() { Some(PerfTimer::start()) } else { None };

    shade_into(orch.sim.snapshot(), &mut orch.colors);
    orch.renders = orch.renders.wrapping_add(1);

    if let Some(timer) = timer {
        orch.last_render_ms = timer.elapsed_ms();
    }
}

