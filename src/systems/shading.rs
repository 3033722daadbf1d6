//! Shading - concentration pairs to gray-scale pixels
//!
//! Pixels are packed ABGR (little-endian bytes `[R, G, B, A]`) so JS can wrap
//! the buffer in a `Uint8ClampedArray` and hand it to `ImageData` unchanged.

use crate::core::grid::{Cell, Grid};

const OPAQUE: u32 = 0xFF00_0000;

/// Gray level `clamp((a - b) * 255, 0, 255)`, truncated.
#[inline]
pub fn balance(cell: Cell) -> u8 {
    ((cell.a - cell.b) * 255.0).clamp(0.0, 255.0) as u8
}

#[inline]
pub fn gray_abgr(level: u8) -> u32 {
    let l = level as u32;
    OPAQUE | (l << 16) | (l << 8) | l
}

/// Replace `out` with one pixel per cell, row-major.
pub fn shade_into(grid: &Grid, out: &mut Vec<u32>) {
    out.clear();
    out.extend(grid.cells().iter().map(|&c| gray_abgr(balance(c))));
}
