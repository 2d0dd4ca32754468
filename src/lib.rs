//! Topological cleanup of hand-drawn road network sketches
//!
//! A sketch is binarized and thinned to a one-pixel skeleton. Skeleton pixels
//! are classified as endpoints or intersections from their 8-neighbour
//! counts, and every dead-end stub that ends close to a junction is routed
//! back along the skeleton and erased.

/// Cleaning pipeline, cost fields, route search and stub pruning
pub mod algorithm;
/// Skeleton extraction and endpoint/intersection classification
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Distance and step-cost helpers
pub mod math;
/// Raster storage and neighbourhood utilities
pub mod spatial;

pub use algorithm::cleaner::{CleanedNetwork, CleanerConfig, SketchCleaner};
pub use analysis::topology::{NetworkPoints, classify};
pub use io::error::{CleanerError, PathfindingError, Result};
pub use spatial::{Coordinate, Raster};
