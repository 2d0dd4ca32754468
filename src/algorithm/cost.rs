//! Per-pixel weights that steer route search along the skeleton

use ndarray::Array2;

use crate::io::configuration::{DEFAULT_BACKGROUND_COST, DEFAULT_SKELETON_COST};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Coordinate, Raster};

/// Weights assigned to skeleton and background pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCosts {
    /// Weight of a skeleton pixel
    pub skeleton: f64,
    /// Weight of a background pixel
    pub background: f64,
}

impl Default for PathCosts {
    fn default() -> Self {
        Self {
            skeleton: DEFAULT_SKELETON_COST,
            background: DEFAULT_BACKGROUND_COST,
        }
    }
}

impl PathCosts {
    /// Check that both weights are finite and positive and that background
    /// is at least as expensive as skeleton
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending weight
    pub fn validate(&self) -> Result<()> {
        if !self.skeleton.is_finite() || self.skeleton <= 0.0 {
            return Err(invalid_parameter(
                "skeleton_cost",
                &self.skeleton,
                &"must be finite and positive",
            ));
        }
        if !self.background.is_finite() || self.background <= 0.0 {
            return Err(invalid_parameter(
                "background_cost",
                &self.background,
                &"must be finite and positive",
            ));
        }
        if self.background < self.skeleton {
            return Err(invalid_parameter(
                "background_cost",
                &self.background,
                &format!("must not be cheaper than skeleton_cost ({})", self.skeleton),
            ));
        }
        Ok(())
    }
}

/// Dense weight grid derived from a skeleton
///
/// Built once per pruning pass from the unmodified skeleton and shared by
/// every endpoint's search.
#[derive(Debug, Clone)]
pub struct CostField {
    weights: Array2<f64>,
}

impl CostField {
    /// Assign `costs.skeleton` to foreground and `costs.background` elsewhere
    pub fn from_skeleton(skeleton: &Raster, costs: PathCosts) -> Self {
        let weights = skeleton.pixels().map(|&pixel| {
            if pixel {
                costs.skeleton
            } else {
                costs.background
            }
        });
        Self { weights }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.weights.ncols()
    }

    /// Dimensions as (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        self.weights.dim()
    }

    /// Weight at a coordinate, `None` when out of range
    pub fn weight(&self, coordinate: Coordinate) -> Option<f64> {
        self.weights.get([coordinate.row, coordinate.col]).copied()
    }

    /// Check whether a coordinate lies inside the field
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.height() && coordinate.col < self.width()
    }
}
