//! Mathematical utilities for route search and pruning

/// Euclidean distances and 8-connected step costs
pub mod geometry;
