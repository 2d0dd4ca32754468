//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use roadclean::PathfindingError;
    use roadclean::algorithm::pruning::PruneReport;
    use roadclean::io::configuration::MAX_FILE_SUMMARY_LINES;
    use roadclean::io::progress::{ProgressManager, summary_line};
    use roadclean::spatial::Coordinate;
    use std::path::Path;
    use std::time::Duration;

    // Tests the manager runs through a full batch lifecycle
    // Verified by panicking on an uninitialized bar
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        assert_eq!(pm.file_count(), 2);

        pm.start_file(Path::new("a.png"));
        pm.complete_file(
            Path::new("a.png"),
            &PruneReport::default(),
            Duration::from_millis(5),
        );
        pm.finish();
    }

    // Tests summary lines are limited to small batches
    // Verified by inverting the comparison
    #[test]
    fn test_file_summary_threshold() {
        let mut pm = ProgressManager::default();
        pm.initialize(MAX_FILE_SUMMARY_LINES);
        assert!(pm.shows_file_summaries());

        pm.initialize(MAX_FILE_SUMMARY_LINES + 1);
        assert!(!pm.shows_file_summaries());
    }

    // Tests the summary reports the file name and pruning counts
    // Verified by printing the full path
    #[test]
    fn test_summary_line_content() {
        let report = PruneReport {
            endpoints_considered: 5,
            endpoints_pruned: 2,
            skipped_no_intersection: 0,
            skipped_too_long: 2,
            pixels_erased: 17,
            failures: vec![(
                Coordinate::new(1, 1),
                PathfindingError::Unreachable,
            )],
        };

        let line = summary_line(
            Path::new("maps/town.png"),
            &report,
            Duration::from_millis(12),
        );

        assert!(line.starts_with("✓ town.png: pruned 2/5 endpoints"));
        assert!(line.contains("17 px erased"));
        assert!(line.contains("1 failures"));
        assert!(!line.contains("maps"));
    }
}
