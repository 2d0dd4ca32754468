//! Batch progress display with per-file summaries for small batches

use crate::algorithm::pruning::PruneReport;
use crate::io::configuration::MAX_FILE_SUMMARY_LINES;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks progress over a batch of sketches
///
/// Small batches print a summary line per finished file above the bar;
/// larger batches only advance the bar to avoid terminal spam.
pub struct ProgressManager {
    bar: ProgressBar,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with a hidden bar
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            file_count: 0,
        }
    }

    /// Show the bar sized for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
    }

    /// Announce the file being cleaned
    pub fn start_file(&self, path: &Path) {
        self.bar.set_message(display_name(path));
    }

    /// Mark a file as done and advance the bar
    pub fn complete_file(&self, path: &Path, report: &PruneReport, elapsed: Duration) {
        if self.shows_file_summaries() {
            self.bar.println(summary_line(path, report, elapsed));
        }
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("All files processed");
    }

    /// Whether per-file summary lines are printed
    pub const fn shows_file_summaries(&self) -> bool {
        self.file_count <= MAX_FILE_SUMMARY_LINES
    }

    /// Number of files in the batch
    pub const fn file_count(&self) -> usize {
        self.file_count
    }
}

/// One-line summary of a finished file
pub fn summary_line(path: &Path, report: &PruneReport, elapsed: Duration) -> String {
    format!(
        "✓ {}: pruned {}/{} endpoints, {} px erased, {} failures ({:.2?})",
        display_name(path),
        report.endpoints_pruned,
        report.endpoints_considered,
        report.pixels_erased,
        report.failures.len(),
        elapsed
    )
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
