//! Skeleton extraction and topological analysis of road rasters

/// Guo–Hall thinning of binary rasters
pub mod skeleton;
/// Endpoint and intersection classification
pub mod topology;
