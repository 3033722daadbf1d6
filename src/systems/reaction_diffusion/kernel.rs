use crate::core::grid::Cell;

pub const CENTER_WEIGHT: f64 = -1.0;
pub const ORTHOGONAL_WEIGHT: f64 = 0.2;
pub const DIAGONAL_WEIGHT: f64 = 0.05;

/// 9-point Laplacian of both chemicals around `idx`, as `(lap_a, lap_b)`.
///
/// The neighbor weights sum to `-CENTER_WEIGHT`, so the stencil is evaluated
/// as weighted differences from the center. That is algebraically the same
/// kernel and yields exactly zero on a spatially uniform field.
///
/// `idx` must be an interior cell of a row-major buffer whose rows are
/// `stride` cells long.
#[inline(always)]
pub(crate) fn laplacian(cells: &[Cell], idx: usize, stride: usize) -> (f64, f64) {
    let c = *cell!(cells, [idx]);

    let left = *cell!(cells, [idx - 1]);
    let right = *cell!(cells, [idx + 1]);
    let up = *cell!(cells, [idx - stride]);
    let down = *cell!(cells, [idx + stride]);

    let up_left = *cell!(cells, [idx - stride - 1]);
    let up_right = *cell!(cells, [idx - stride + 1]);
    let down_right = *cell!(cells, [idx + stride + 1]);
    let down_left = *cell!(cells, [idx + stride - 1]);

    let orth_a = (left.a - c.a) + (right.a - c.a) + (down.a - c.a) + (up.a - c.a);
    let diag_a = (up_left.a - c.a) + (up_right.a - c.a) + (down_right.a - c.a) + (down_left.a - c.a);

    let orth_b = (left.b - c.b) + (right.b - c.b) + (down.b - c.b) + (up.b - c.b);
    let diag_b = (up_left.b - c.b) + (up_right.b - c.b) + (down_right.b - c.b) + (down_left.b - c.b);

    (
        ORTHOGONAL_WEIGHT * orth_a + DIAGONAL_WEIGHT * diag_a,
        ORTHOGONAL_WEIGHT * orth_b + DIAGONAL_WEIGHT * diag_b,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(center: Cell, orth: Cell, diag: Cell) -> Vec<Cell> {
        vec![
            diag, orth, diag,
            orth, center, orth,
            diag, orth, diag,
        ]
    }

    #[test]
    fn weights_balance_the_center() {
        let sum = CENTER_WEIGHT + 4.0 * ORTHOGONAL_WEIGHT + 4.0 * DIAGONAL_WEIGHT;
        assert!(sum.abs() < 1e-12, "{sum}");
    }

    #[test]
    fn uniform_field_has_exactly_zero_laplacian() {
        let v = Cell::new(0.37, 0.81);
        let cells = block(v, v, v);
        assert_eq!(laplacian(&cells, 4, 3), (0.0, 0.0));
    }

    #[test]
    fn matches_the_weighted_sum() {
        let cells = block(Cell::new(0.0, 1.0), Cell::new(1.0, 0.0), Cell::new(0.5, 0.25));
        let (lap_a, lap_b) = laplacian(&cells, 4, 3);

        let want_a = CENTER_WEIGHT * 0.0 + 4.0 * ORTHOGONAL_WEIGHT * 1.0 + 4.0 * DIAGONAL_WEIGHT * 0.5;
        let want_b = CENTER_WEIGHT * 1.0 + 4.0 * ORTHOGONAL_WEIGHT * 0.0 + 4.0 * DIAGONAL_WEIGHT * 0.25;
        assert!((lap_a - want_a).abs() < 1e-12, "{lap_a} vs {want_a}");
        assert!((lap_b - want_b).abs() < 1e-12, "{lap_b} vs {want_b}");
    }

    #[test]
    fn diagonals_weigh_less_than_orthogonals() {
        let mut orth_hot = vec![Cell::new(0.0, 0.0); 9];
        orth_hot[1] = Cell::new(1.0, 1.0);
        let mut diag_hot = vec![Cell::new(0.0, 0.0); 9];
        diag_hot[0] = Cell::new(1.0, 1.0);

        let (orth_a, _) = laplacian(&orth_hot, 4, 3);
        let (diag_a, _) = laplacian(&diag_hot, 4, 3);
        assert!((orth_a - ORTHOGONAL_WEIGHT).abs() < 1e-12);
        assert!((diag_a - DIAGONAL_WEIGHT).abs() < 1e-12);
    }
}
