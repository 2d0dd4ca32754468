//! End-to-end sketch cleaning: binarize, thin, classify, prune

use ndarray::ArrayView2;
use num_traits::ToPrimitive;

use crate::algorithm::cost::{CostField, PathCosts};
use crate::algorithm::pathfinding::{Route, route};
use crate::algorithm::pruning::{PruneReport, Pruner};
use crate::analysis::skeleton::skeletonize;
use crate::analysis::topology::{NetworkPoints, classify};
use crate::io::configuration::{
    DEFAULT_BINARIZE_THRESHOLD, DEFAULT_INTERSECTION_RADIUS, DEFAULT_MAX_EXPANSIONS,
    DEFAULT_MIN_ROAD_LENGTH,
};
use crate::io::error::{CleanerError, Result, invalid_input, invalid_parameter};
use crate::spatial::{Coordinate, Raster};

/// Immutable parameters for a cleaning run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CleanerConfig {
    /// Stubs whose endpoint lies closer than this to a junction are erased
    pub min_road_length: f64,
    /// Reserved for merging nearby junctions; no stage reads it yet
    pub intersection_radius: usize,
    /// Grayscale values strictly above this are foreground
    pub binarize_threshold: u8,
    /// Weights steering route search along the skeleton
    pub costs: PathCosts,
    /// Node budget per route search
    pub max_expansions: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            min_road_length: DEFAULT_MIN_ROAD_LENGTH,
            intersection_radius: DEFAULT_INTERSECTION_RADIUS,
            binarize_threshold: DEFAULT_BINARIZE_THRESHOLD,
            costs: PathCosts::default(),
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl CleanerConfig {
    /// Check every parameter against its valid range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `min_road_length` is negative or not finite
    /// - either path cost is non-positive, not finite, or background is
    ///   cheaper than skeleton
    /// - `max_expansions` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.min_road_length.is_finite() || self.min_road_length < 0.0 {
            return Err(invalid_parameter(
                "min_road_length",
                &self.min_road_length,
                &"must be finite and non-negative",
            ));
        }
        if self.max_expansions == 0 {
            return Err(invalid_parameter(
                "max_expansions",
                &self.max_expansions,
                &"must allow at least one expansion",
            ));
        }
        self.costs.validate()
    }
}

/// Every intermediate product of a cleaning run
#[derive(Debug, Clone)]
pub struct CleanedNetwork {
    /// Thinned input before pruning
    pub skeleton: Raster,
    /// Skeleton with spurious stubs removed
    pub cleaned: Raster,
    /// Classification of `skeleton` that drove pruning
    pub points: NetworkPoints,
    /// Pruning summary
    pub report: PruneReport,
}

/// Cleans road sketches under one validated configuration
///
/// Holds no mutable state, so one cleaner can serve many rasters, including
/// from several threads.
#[derive(Clone, Copy, Debug)]
pub struct SketchCleaner {
    config: CleanerConfig,
    pruner: Pruner,
}

impl SketchCleaner {
    /// Create a cleaner after validating `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is out of range
    pub fn new(config: CleanerConfig) -> Result<Self> {
        config.validate()?;
        let pruner = Pruner {
            min_road_length: config.min_road_length,
            costs: config.costs,
            max_expansions: config.max_expansions,
        };
        Ok(Self { config, pruner })
    }

    /// The configuration this cleaner was built with
    pub const fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Clean a single-channel sketch
    ///
    /// Binarizes at the configured threshold, thins to a skeleton, then
    /// classifies and prunes it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the sketch has zero width or height
    pub fn process_sketch<T>(&self, sketch: &ArrayView2<'_, T>) -> Result<CleanedNetwork>
    where
        T: ToPrimitive,
    {
        let (height, width) = sketch.dim();
        if height == 0 || width == 0 {
            return Err(invalid_input(&format!(
                "sketch must be at least 1x1, got {width}x{height}"
            )));
        }
        log::debug!("Processing {width}x{height} sketch");

        let binary = Raster::from_grayscale(sketch, f64::from(self.config.binarize_threshold))?;
        log::debug!(
            "Binarized at {}: {} foreground pixels",
            self.config.binarize_threshold,
            binary.count_foreground()
        );

        let skeleton = skeletonize(&binary);
        Ok(self.clean_skeleton(skeleton))
    }

    /// Classify and prune an existing skeleton
    pub fn clean_skeleton(&self, skeleton: Raster) -> CleanedNetwork {
        let points = classify(&skeleton);
        log::debug!(
            "Found {} endpoints and {} intersections",
            points.endpoints.len(),
            points.intersections.len()
        );

        let outcome = self.pruner.prune(&skeleton, &points);

        CleanedNetwork {
            skeleton,
            cleaned: outcome.cleaned,
            points,
            report: outcome.report,
        }
    }

    /// Route between two skeleton pixels with this cleaner's search settings
    ///
    /// Uses the same cost weights and expansion budget as pruning.
    ///
    /// # Errors
    ///
    /// Returns `Pathfinding` if either point is out of range, the target is
    /// unreachable, or the expansion budget runs out
    pub fn trace_route(
        &self,
        skeleton: &Raster,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Route> {
        let field = CostField::from_skeleton(skeleton, self.config.costs);
        route(&field, start, end, self.config.max_expansions)
            .map_err(|source| CleanerError::Pathfinding { start, end, source })
    }
}
