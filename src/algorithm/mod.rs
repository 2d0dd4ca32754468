/// End-to-end sketch cleaning pipeline and its configuration
pub mod cleaner;
/// Skeleton-derived weights for route search
pub mod cost;
/// Minimum-cost 8-connected route search
pub mod pathfinding;
/// Spurious stub removal
pub mod pruning;
