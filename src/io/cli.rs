//! Command-line interface for batch cleaning of road sketches

use crate::algorithm::cleaner::{CleanerConfig, SketchCleaner};
use crate::io::configuration::{
    COMPARISON_SUFFIX, DEFAULT_BINARIZE_THRESHOLD, DEFAULT_LOG_LEVEL, DEFAULT_MIN_ROAD_LENGTH,
    MARKER_RADIUS, OUTPUT_SUFFIX,
};
use crate::io::error::{CleanerError, Result, WithContext, invalid_input};
use crate::io::image::{load_sketch, save_raster, save_rgb};
use crate::io::progress::ProgressManager;
use crate::io::visualization::compose_comparison;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "roadclean")]
#[command(
    author,
    version,
    about = "Remove spurious dead-end strokes from road network sketches"
)]
/// Command-line arguments for the sketch cleaner
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Stubs shorter than this many pixels (endpoint to junction) are removed
    #[arg(short, long, default_value_t = DEFAULT_MIN_ROAD_LENGTH)]
    pub min_road_length: f64,

    /// Grayscale values above this are treated as road
    #[arg(short, long, default_value_t = DEFAULT_BINARIZE_THRESHOLD)]
    pub threshold: u8,

    /// Also write a side-by-side comparison image
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log level spec (overridden by `RUST_LOG`)
    #[arg(short, long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Cleaner configuration derived from the flags
    pub fn cleaner_config(&self) -> CleanerConfig {
        CleanerConfig {
            min_road_length: self.min_road_length,
            binarize_threshold: self.threshold,
            ..CleanerConfig::default()
        }
    }
}

/// Orchestrates batch cleaning of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    cleaner: SketchCleaner,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the flags produce an invalid configuration
    pub fn new(cli: Cli) -> Result<Self> {
        let cleaner = SketchCleaner::new(cli.cleaner_config())?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            cleaner,
            progress_manager,
        })
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("Nothing to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// PNG files under the target that still need processing, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a readable
    /// directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(invalid_input(&"Target file must be a PNG image"));
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if is_png(&path) && !is_generated_output(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_input(&"Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path(input_path).exists() {
            log::debug!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let sketch = load_sketch(input_path)?;
        let network = self
            .cleaner
            .process_sketch(&sketch.view())
            .map_err(|e| match e {
                CleanerError::InvalidInput { reason } => CleanerError::InvalidInput {
                    reason: format!("{}: {reason}", input_path.display()),
                },
                other => other,
            })?;

        save_raster(&network.cleaned, &output_path(input_path))?;

        if self.cli.visualize {
            let comparison = compose_comparison(&sketch.view(), &network.cleaned, MARKER_RADIUS)?;
            save_rgb(&comparison, &comparison_path(input_path))?;
        }

        log::debug!(
            "Cleaned {}: {} -> {} skeleton pixels",
            input_path.display(),
            network.skeleton.count_foreground(),
            network.cleaned.count_foreground()
        );

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(input_path, &network.report, start_time.elapsed());
        }

        Ok(())
    }
}

/// Path of the cleaned raster written for `input_path`
pub fn output_path(input_path: &Path) -> PathBuf {
    sibling_with_suffix(input_path, OUTPUT_SUFFIX)
}

/// Path of the comparison image written for `input_path`
pub fn comparison_path(input_path: &Path) -> PathBuf {
    sibling_with_suffix(input_path, COMPARISON_SUFFIX)
}

fn sibling_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Outputs of an earlier run sit next to the inputs; never treat them as sketches
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(COMPARISON_SUFFIX))
}
