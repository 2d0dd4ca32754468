//! Spatial data structures and raster manipulation
//!
//! This module contains spatial-related functionality including:
//! - The boolean raster type and its pixel coordinates
//! - 8-connected neighbourhood iteration and padding

/// 8-neighbour offsets, padding and neighbour counting
pub mod neighborhood;
/// Boolean rasters and row-major pixel coordinates
pub mod raster;

pub use raster::{Coordinate, Raster};
