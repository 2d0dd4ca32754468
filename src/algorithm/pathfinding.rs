//! Minimum-cost routes over a cost field
//!
//! Dijkstra search on the 8-connected pixel lattice. Stepping from `a` to a
//! neighbour `b` costs the mean of their weights times the step length (1
//! orthogonally, √2 diagonally), so routes hug low-weight skeleton pixels and
//! only cross background where the skeleton has a gap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bitvec::prelude::*;

use crate::algorithm::cost::CostField;
use crate::io::error::PathfindingError;
use crate::math::geometry::step_cost;
use crate::spatial::Coordinate;
use crate::spatial::neighborhood::neighbors;

/// A route from start to end, both inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Pixels visited in order
    pub path: Vec<Coordinate>,
    /// Accumulated cost along the path
    pub cost: f64,
}

#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    index: usize,
}

// Reversed so the max-heap pops the cheapest node; ties go to the lower index
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

const NO_PREDECESSOR: usize = usize::MAX;

/// Find the minimum-cost 8-connected route between two pixels
///
/// Settles at most `max_expansions` nodes before giving up.
///
/// # Errors
///
/// Returns a [`PathfindingError`] when:
/// - `start` or `end` lies outside the field
/// - the frontier empties before `end` is settled
/// - the expansion budget runs out
pub fn route(
    field: &CostField,
    start: Coordinate,
    end: Coordinate,
    max_expansions: usize,
) -> std::result::Result<Route, PathfindingError> {
    let (height, width) = field.dimensions();
    for coordinate in [start, end] {
        if !field.contains(coordinate) {
            return Err(PathfindingError::OutOfBounds {
                coordinate,
                dimensions: (height, width),
            });
        }
    }

    if start == end {
        return Ok(Route {
            path: vec![start],
            cost: 0.0,
        });
    }

    let to_index = |c: Coordinate| c.row * width + c.col;
    let to_coordinate = |index: usize| Coordinate::new(index / width, index % width);

    let cell_count = height * width;
    let goal = to_index(end);
    let mut best = vec![f64::INFINITY; cell_count];
    let mut predecessor = vec![NO_PREDECESSOR; cell_count];
    let mut settled = bitvec![0; cell_count];
    let mut frontier = BinaryHeap::new();
    let mut expansions = 0usize;

    if let Some(slot) = best.get_mut(to_index(start)) {
        *slot = 0.0;
    }
    frontier.push(Frontier {
        cost: 0.0,
        index: to_index(start),
    });

    while let Some(Frontier { cost, index }) = frontier.pop() {
        if settled.get(index).as_deref() != Some(&false) {
            continue;
        }
        settled.set(index, true);

        if index == goal {
            let path = reconstruct(&predecessor, goal, cell_count)
                .into_iter()
                .map(to_coordinate)
                .collect();
            log::trace!("Route {start} -> {end}: cost {cost:.3} after {expansions} expansions");
            return Ok(Route { path, cost });
        }

        expansions += 1;
        if expansions >= max_expansions {
            return Err(PathfindingError::BudgetExhausted { expansions });
        }

        let current = to_coordinate(index);
        let Some(current_weight) = field.weight(current) else {
            continue;
        };

        for (neighbor, d_row, d_col) in neighbors(current, height, width) {
            let neighbor_index = to_index(neighbor);
            if settled.get(neighbor_index).as_deref() == Some(&true) {
                continue;
            }
            let Some(neighbor_weight) = field.weight(neighbor) else {
                continue;
            };

            let candidate = cost + step_cost(current_weight, neighbor_weight, d_row, d_col);
            if let Some(slot) = best.get_mut(neighbor_index) {
                if candidate < *slot {
                    *slot = candidate;
                    if let Some(parent) = predecessor.get_mut(neighbor_index) {
                        *parent = index;
                    }
                    frontier.push(Frontier {
                        cost: candidate,
                        index: neighbor_index,
                    });
                }
            }
        }
    }

    Err(PathfindingError::Unreachable)
}

// Walks predecessor links back from the goal; the start is the node with no
// predecessor. Bounded by the cell count so a corrupt chain cannot loop.
fn reconstruct(predecessor: &[usize], goal: usize, cell_count: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;

    while path.len() <= cell_count {
        match predecessor.get(current).copied() {
            Some(previous) if previous != NO_PREDECESSOR => {
                path.push(previous);
                current = previous;
            }
            _ => break,
        }
    }

    path.reverse();
    path
}
