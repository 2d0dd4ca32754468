//! Input/output operations, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Cleaning defaults and display constants
pub mod configuration;
/// Error types and context management
pub mod error;
/// Sketch loading and raster export
pub mod image;
/// Logger installation
pub mod logging;
/// Batch progress display
pub mod progress;
/// Side-by-side comparison rendering
pub mod visualization;
