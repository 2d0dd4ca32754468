//! Planar distances on the pixel lattice

use std::f64::consts::SQRT_2;

/// Straight-line distance between two lattice points given as `[row, col]`
///
/// Used as the cheap filter before any route search: only the nearest
/// junction by this measure is ever routed to.
pub fn euclidean_distance(a: [usize; 2], b: [usize; 2]) -> f64 {
    let d_row = a[0].abs_diff(b[0]) as f64;
    let d_col = a[1].abs_diff(b[1]) as f64;
    d_row.hypot(d_col)
}

/// Length of a single 8-connected step with the given row/column deltas
///
/// Orthogonal moves have length 1, diagonal moves √2. The zero move has
/// length 0.
pub const fn step_length(d_row: isize, d_col: isize) -> f64 {
    match (d_row != 0, d_col != 0) {
        (true, true) => SQRT_2,
        (false, false) => 0.0,
        _ => 1.0,
    }
}

/// Cost of moving between two neighbouring cells with the given weights
///
/// The step is charged the mean of both endpoint weights, scaled by its
/// geometric length.
pub fn step_cost(from_weight: f64, to_weight: f64, d_row: isize, d_col: isize) -> f64 {
    step_length(d_row, d_col) * (from_weight + to_weight) * 0.5
}
