//! Endpoint and intersection classification of skeleton pixels

use std::collections::BTreeSet;

use crate::spatial::neighborhood::{foreground_neighbor_count, pad_with_background};
use crate::spatial::{Coordinate, Raster};

/// Skeleton pixels that anchor the implicit road graph
///
/// Endpoints have exactly one foreground neighbour; intersections have more
/// than two. The two sets never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkPoints {
    /// Degree-1 pixels (dead ends)
    pub endpoints: BTreeSet<Coordinate>,
    /// Degree-3+ pixels (junctions)
    pub intersections: BTreeSet<Coordinate>,
}

impl NetworkPoints {
    /// True when no endpoints and no intersections were found
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty() && self.intersections.is_empty()
    }
}

/// Role of a single foreground pixel in the skeleton graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelRole {
    /// No foreground neighbours
    Isolated,
    /// Exactly one foreground neighbour
    Endpoint,
    /// Exactly two foreground neighbours
    Interior,
    /// Three or more foreground neighbours
    Intersection,
}

impl PixelRole {
    /// Classify a pixel from its 8-neighbour foreground count
    pub const fn from_neighbor_count(count: usize) -> Self {
        match count {
            0 => Self::Isolated,
            1 => Self::Endpoint,
            2 => Self::Interior,
            _ => Self::Intersection,
        }
    }
}

/// Classify every foreground pixel of a skeleton
///
/// The raster is padded with one background pixel on every side so border
/// pixels see out-of-range neighbours as background. Isolated and interior
/// pixels are not reported.
pub fn classify(skeleton: &Raster) -> NetworkPoints {
    let padded = pad_with_background(skeleton);
    let mut points = NetworkPoints::default();

    for coordinate in skeleton.foreground() {
        match PixelRole::from_neighbor_count(foreground_neighbor_count(&padded, coordinate)) {
            PixelRole::Endpoint => {
                points.endpoints.insert(coordinate);
            }
            PixelRole::Intersection => {
                points.intersections.insert(coordinate);
            }
            PixelRole::Isolated | PixelRole::Interior => {}
        }
    }

    log::debug!(
        "Classified {}x{} skeleton: {} endpoints, {} intersections",
        skeleton.width(),
        skeleton.height(),
        points.endpoints.len(),
        points.intersections.len()
    );

    points
}
