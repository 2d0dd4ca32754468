//! Cleaning constants and runtime configuration defaults

// Pruning thresholds
/// Endpoint-to-junction distance below which a stub is spurious (pixels)
pub const DEFAULT_MIN_ROAD_LENGTH: f64 = 20.0;

/// Junction neighbourhood radius (pixels); reserved, not consulted by pruning
pub const DEFAULT_INTERSECTION_RADIUS: usize = 5;

// Binarisation of grayscale sketches
/// Pixels strictly above this value are foreground
pub const DEFAULT_BINARIZE_THRESHOLD: u8 = 127;

// Cost field weights for route search
/// Weight of a skeleton pixel
pub const DEFAULT_SKELETON_COST: f64 = 1.0;
/// Weight of a background pixel
pub const DEFAULT_BACKGROUND_COST: f64 = 1000.0;

// Safety limit against full-raster searches on pathological inputs
/// Maximum nodes settled by a single route search
pub const DEFAULT_MAX_EXPANSIONS: usize = 250_000;

// Visualization
/// Radius of the discs marking endpoints and intersections
pub const MARKER_RADIUS: u32 = 3;
/// Endpoint marker color
pub const ENDPOINT_COLOR: [u8; 3] = [255, 0, 0];
/// Intersection marker color
pub const INTERSECTION_COLOR: [u8; 3] = [0, 255, 0];
/// Foreground color of the cleaned panel
pub const ROAD_COLOR: [u8; 3] = [255, 255, 255];

// Progress bar display settings
/// Largest batch that still prints one summary line per file
pub const MAX_FILE_SUMMARY_LINES: usize = 5;

// Output settings
/// Suffix added to cleaned raster filenames
pub const OUTPUT_SUFFIX: &str = "_cleaned";
/// Suffix added to comparison composite filenames
pub const COMPARISON_SUFFIX: &str = "_comparison";
/// Default log level for the command-line tool
pub const DEFAULT_LOG_LEVEL: &str = "info";
