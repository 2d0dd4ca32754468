//! Removal of short dead-end stubs from a classified skeleton
//!
//! Each endpoint is handled on its own: pick the nearest intersection by
//! straight-line distance, and only when that distance is under the
//! threshold route back along the skeleton and erase the route. Every search
//! runs on a cost field built from the original skeleton, never on the
//! partially cleaned copy, so the result does not depend on endpoint order.

use crate::algorithm::cost::{CostField, PathCosts};
use crate::algorithm::pathfinding::route;
use crate::analysis::topology::NetworkPoints;
use crate::io::configuration::{DEFAULT_MAX_EXPANSIONS, DEFAULT_MIN_ROAD_LENGTH};
use crate::io::error::PathfindingError;
use crate::spatial::{Coordinate, Raster};

/// What happened to a single endpoint during pruning
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointFate {
    /// No intersection exists anywhere in the skeleton
    NoIntersection,
    /// The nearest intersection is too far for the stub to be spurious
    TooLong {
        /// Nearest intersection
        intersection: Coordinate,
        /// Straight-line distance to it
        distance: f64,
    },
    /// The stub was routed and erased
    Pruned {
        /// Intersection the route ended at
        intersection: Coordinate,
        /// Pixels cleared from the output
        erased: usize,
    },
    /// Route search failed; the endpoint is left in place
    Failed {
        /// Intersection the search was headed for
        intersection: Coordinate,
        /// Why the search failed
        error: PathfindingError,
    },
}

/// Summary of one pruning pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PruneReport {
    /// Endpoints examined
    pub endpoints_considered: usize,
    /// Endpoints whose stub was erased
    pub endpoints_pruned: usize,
    /// Endpoints skipped because the skeleton has no intersections
    pub skipped_no_intersection: usize,
    /// Endpoints skipped because the nearest intersection was too far
    pub skipped_too_long: usize,
    /// Foreground pixels cleared by this pass
    pub pixels_erased: usize,
    /// Endpoints whose route search failed
    pub failures: Vec<(Coordinate, PathfindingError)>,
}

impl PruneReport {
    fn record(&mut self, endpoint: Coordinate, fate: EndpointFate) {
        self.endpoints_considered += 1;
        match fate {
            EndpointFate::NoIntersection => self.skipped_no_intersection += 1,
            EndpointFate::TooLong { .. } => self.skipped_too_long += 1,
            EndpointFate::Pruned { erased, .. } => {
                self.endpoints_pruned += 1;
                self.pixels_erased += erased;
            }
            EndpointFate::Failed { error, .. } => self.failures.push((endpoint, error)),
        }
    }
}

/// Cleaned raster together with the pass summary
#[derive(Debug, Clone)]
pub struct PruneOutcome {
    /// Skeleton copy with spurious stubs cleared
    pub cleaned: Raster,
    /// What the pass did
    pub report: PruneReport,
}

/// Prunes spurious stubs under a fixed configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pruner {
    /// Stubs shorter than this (straight-line, pixels) are erased
    pub min_road_length: f64,
    /// Weights for the route search
    pub costs: PathCosts,
    /// Node budget per route search
    pub max_expansions: usize,
}

impl Default for Pruner {
    fn default() -> Self {
        Self {
            min_road_length: DEFAULT_MIN_ROAD_LENGTH,
            costs: PathCosts::default(),
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl Pruner {
    /// Create a pruner with the given threshold and default search settings
    pub fn with_min_road_length(min_road_length: f64) -> Self {
        Self {
            min_road_length,
            ..Self::default()
        }
    }

    /// Erase every endpoint stub shorter than `min_road_length`
    ///
    /// `points` must be the classification of `skeleton`. The input is not
    /// modified. Per-endpoint search failures are logged and reported but
    /// never abort the pass.
    pub fn prune(&self, skeleton: &Raster, points: &NetworkPoints) -> PruneOutcome {
        let field = CostField::from_skeleton(skeleton, self.costs);
        let mut cleaned = skeleton.clone();
        let mut report = PruneReport::default();

        if points.intersections.is_empty() && !points.endpoints.is_empty() {
            log::debug!(
                "Skeleton has no intersections; {} endpoints stay unpruned",
                points.endpoints.len()
            );
        }

        for &endpoint in &points.endpoints {
            let fate = self.prune_endpoint(&field, &mut cleaned, endpoint, points);
            if let EndpointFate::Failed {
                intersection,
                error,
            } = &fate
            {
                log::warn!(
                    "Could not process path for endpoint {endpoint} towards {intersection}: {error}"
                );
            }
            report.record(endpoint, fate);
        }

        log::debug!(
            "Pruned {} of {} endpoints ({} pixels erased, {} failures)",
            report.endpoints_pruned,
            report.endpoints_considered,
            report.pixels_erased,
            report.failures.len()
        );

        PruneOutcome { cleaned, report }
    }

    fn prune_endpoint(
        &self,
        field: &CostField,
        cleaned: &mut Raster,
        endpoint: Coordinate,
        points: &NetworkPoints,
    ) -> EndpointFate {
        let Some((intersection, distance)) = nearest_intersection(endpoint, points) else {
            return EndpointFate::NoIntersection;
        };

        if distance >= self.min_road_length {
            return EndpointFate::TooLong {
                intersection,
                distance,
            };
        }

        match route(field, endpoint, intersection, self.max_expansions) {
            Ok(found) => {
                let erased = erase_path(cleaned, &found.path);
                log::debug!(
                    "Erased stub {endpoint} -> {intersection} ({erased} pixels, distance {distance:.2})"
                );
                EndpointFate::Pruned {
                    intersection,
                    erased,
                }
            }
            Err(error) => EndpointFate::Failed {
                intersection,
                error,
            },
        }
    }
}

/// Nearest intersection to `endpoint` by straight-line distance
///
/// Ties resolve to the first intersection in row-major order. Returns `None`
/// when there are no intersections.
pub fn nearest_intersection(
    endpoint: Coordinate,
    points: &NetworkPoints,
) -> Option<(Coordinate, f64)> {
    points
        .intersections
        .iter()
        .map(|&intersection| (intersection, endpoint.distance_to(intersection)))
        .fold(None, |closest, candidate| match closest {
            Some((_, best)) if best <= candidate.1 => closest,
            _ => Some(candidate),
        })
}

/// Clear every in-range path pixel, returning how many were foreground
///
/// Coordinates outside the raster are skipped.
pub fn erase_path(raster: &mut Raster, path: &[Coordinate]) -> usize {
    let mut erased = 0;
    for &coordinate in path {
        if raster.get(coordinate) && raster.set(coordinate, false) {
            erased += 1;
        }
    }
    erased
}
