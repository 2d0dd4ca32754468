//! Topological thinning of binary rasters to 1-pixel centerlines
//!
//! Implements Guo–Hall thinning: two alternating sub-iterations peel
//! boundary pixels whose removal cannot disconnect the shape, until a full
//! pass deletes nothing. Unlike Zhang–Suen, strokes drawn two pixels thick
//! on a diagonal keep their length and small blocks keep a single pixel.
//! Pixels outside the raster count as background.

use crate::spatial::neighborhood::ring;
use crate::spatial::{Coordinate, Raster};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubIteration {
    /// Removes north-west boundary pixels
    First,
    /// Removes south-east boundary pixels
    Second,
}

/// Reduce a binary raster to its topological skeleton
///
/// The output has the same dimensions, is a subset of the input, keeps the
/// number of 8-connected components, and leaves already-thin 1-pixel lines
/// untouched.
pub fn skeletonize(binary: &Raster) -> Raster {
    let mut skeleton = binary.clone();
    let mut passes = 0usize;

    loop {
        let removed_first = thinning_pass(&mut skeleton, SubIteration::First);
        let removed_second = thinning_pass(&mut skeleton, SubIteration::Second);
        passes += 1;
        if removed_first + removed_second == 0 {
            break;
        }
    }

    log::debug!(
        "Thinning converged after {passes} passes: {} -> {} foreground pixels",
        binary.count_foreground(),
        skeleton.count_foreground()
    );

    skeleton
}

// Marks deletable pixels against a frozen snapshot, then clears them all at
// once so the pass is order-independent.
fn thinning_pass(raster: &mut Raster, step: SubIteration) -> usize {
    let snapshot: &Raster = raster;
    let deletable: Vec<Coordinate> = snapshot
        .foreground()
        .filter(|&coordinate| is_deletable(&ring(snapshot, coordinate), step))
        .collect();

    for &coordinate in &deletable {
        raster.set(coordinate, false);
    }

    deletable.len()
}

fn is_deletable(neighbours: &[bool; 8], step: SubIteration) -> bool {
    let [north, north_east, east, south_east, south, south_west, west, north_west] = *neighbours;

    // Exactly one 8-connected run of foreground touches the pixel
    let connectivity = count_set([
        !north && (north_east || east),
        !east && (south_east || south),
        !south && (south_west || west),
        !west && (north_west || north),
    ]);
    if connectivity != 1 {
        return false;
    }

    let clockwise_pairs = count_set([
        north_west || north,
        north_east || east,
        south_east || south,
        south_west || west,
    ]);
    let counter_pairs = count_set([
        north || north_east,
        east || south_east,
        south || south_west,
        west || north_west,
    ]);
    if !(2..=3).contains(&clockwise_pairs.min(counter_pairs)) {
        return false;
    }

    let protected = match step {
        SubIteration::First => (south || south_west || !north_west) && west,
        SubIteration::Second => (north || north_east || !south_east) && east,
    };
    !protected
}

fn count_set(flags: [bool; 4]) -> usize {
    flags.into_iter().filter(|&flag| flag).count()
}
