use crate::core::grid::{Cell, Grid};
use crate::domain::{SimParams, TIME_STEP};

use super::kernel::laplacian;

/// Clamp a concentration to [0, 1]. NaN collapses to 0.
#[inline(always)]
pub fn constrain(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

/// Gray-Scott reaction for one cell given its Laplacians.
///
/// `a' = a + dA*lapA - a*b^2 + feed*(1 - a)`
/// `b' = b + dB*lapB + a*b^2 - (kill + feed)*b`
#[inline(always)]
pub fn react(cell: Cell, lap_a: f64, lap_b: f64, params: &SimParams) -> Cell {
    let Cell { a, b } = cell;
    let abb = a * b * b;

    let da = params.diffusion_a() * lap_a - abb + params.feed() * (1.0 - a);
    let db = params.diffusion_b() * lap_b + abb - (params.kill() + params.feed()) * b;

    Cell::new(constrain(a + da * TIME_STEP), constrain(b + db * TIME_STEP))
}

/// Write one step of every interior cell of `current` into `next`.
///
/// Reads only from `current`; the border ring of `next` is left as it is.
/// Returns the number of cells written.
pub fn react_diffuse(current: &Grid, next: &mut Grid, params: &SimParams) -> usize {
    assert_eq!(
        (current.width(), current.height()),
        (next.width(), next.height()),
        "react_diffuse: buffer dimensions differ"
    );

    // Grid construction guarantees both sides are >= 3.
    let w = current.width() as usize;
    let h = current.height() as usize;
    let src = current.cells();
    let dst = next.cells_mut();

    for y in 1..h - 1 {
        let row = y * w;
        for x in 1..w - 1 {
            let idx = row + x;
            let (lap_a, lap_b) = laplacian(src, idx, w);
            let updated = react(*cell!(src, [idx]), lap_a, lap_b, params);
            cell!(dst, [idx] = updated);
        }
    }

    current.interior_size()
}
