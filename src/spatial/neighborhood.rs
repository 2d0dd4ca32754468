//! 8-connected neighbourhood helpers over padded rasters

use ndarray::{Array2, s};

use crate::spatial::raster::{Coordinate, Raster};

/// Row/column offsets of the 8 neighbours, clockwise from north
///
/// The order matches the P2..P9 labelling used by thinning: north,
/// north-east, east, south-east, south, south-west, west, north-west.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Copy the raster into an array with a one-pixel background border
///
/// Pixel `(row, col)` of the raster lands at `(row + 1, col + 1)`, so every
/// 3x3 window centred on an original pixel is in range.
pub fn pad_with_background(raster: &Raster) -> Array2<bool> {
    let (height, width) = raster.dimensions();
    let mut padded = Array2::from_elem((height + 2, width + 2), false);
    padded
        .slice_mut(s![1..=height, 1..=width])
        .assign(raster.pixels());
    padded
}

/// Count foreground cells among the 8 neighbours of an original-space pixel
///
/// `padded` must come from [`pad_with_background`]. The window sum includes
/// the centre, which is subtracted when it is foreground.
pub fn foreground_neighbor_count(padded: &Array2<bool>, coordinate: Coordinate) -> usize {
    let (row, col) = (coordinate.row, coordinate.col);
    let (padded_rows, padded_cols) = padded.dim();
    if row + 2 >= padded_rows || col + 2 >= padded_cols {
        return 0;
    }

    let window_sum = padded
        .slice(s![row..row + 3, col..col + 3])
        .iter()
        .filter(|&&pixel| pixel)
        .count();
    let center = padded.get([row + 1, col + 1]).copied().unwrap_or(false);

    window_sum - usize::from(center)
}

/// Iterate over in-range 8-neighbours of a coordinate
///
/// Yields each neighbour together with the offset that reached it.
pub fn neighbors(
    coordinate: Coordinate,
    height: usize,
    width: usize,
) -> impl Iterator<Item = (Coordinate, isize, isize)> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| {
            coordinate
                .offset(d_row, d_col)
                .filter(|n| n.row < height && n.col < width)
                .map(|n| (n, d_row, d_col))
        })
}

/// Read the 8 neighbours of a pixel clockwise from north
///
/// Out-of-range neighbours read as background.
pub fn ring(raster: &Raster, coordinate: Coordinate) -> [bool; 8] {
    NEIGHBOR_OFFSETS.map(|(d_row, d_col)| {
        coordinate
            .offset(d_row, d_col)
            .is_some_and(|n| raster.get(n))
    })
}
