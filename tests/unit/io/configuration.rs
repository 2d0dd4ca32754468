//! Tests for cleaning constants and defaults

#[cfg(test)]
mod tests {
    use roadclean::io::configuration::{
        COMPARISON_SUFFIX, DEFAULT_BACKGROUND_COST, DEFAULT_BINARIZE_THRESHOLD,
        DEFAULT_MAX_EXPANSIONS, DEFAULT_MIN_ROAD_LENGTH, DEFAULT_SKELETON_COST, ENDPOINT_COLOR,
        INTERSECTION_COLOR, MAX_FILE_SUMMARY_LINES, OUTPUT_SUFFIX,
    };

    // Tests default pruning threshold
    // Verified by changing the threshold value
    #[test]
    fn test_default_min_road_length() {
        assert!((DEFAULT_MIN_ROAD_LENGTH - 20.0).abs() < f64::EPSILON);
    }

    // Tests binarization sits at mid-gray
    // Verified by changing the threshold to 128
    #[test]
    fn test_default_binarize_threshold() {
        assert_eq!(DEFAULT_BINARIZE_THRESHOLD, 127);
    }

    // Tests background is far more expensive than skeleton
    // Verified by making both weights equal
    #[test]
    fn test_cost_weights_relationship() {
        assert!((DEFAULT_SKELETON_COST - 1.0).abs() < f64::EPSILON);
        assert!(DEFAULT_BACKGROUND_COST >= 1000.0 * DEFAULT_SKELETON_COST);
    }

    // Tests the search budget allows a full 500x500 raster
    // Verified by reducing the budget
    #[test]
    fn test_max_expansions_value() {
        assert_eq!(DEFAULT_MAX_EXPANSIONS, 250_000);
    }

    // Tests marker colors are distinct
    // Verified by reusing the endpoint color
    #[test]
    fn test_marker_colors() {
        assert_eq!(ENDPOINT_COLOR, [255, 0, 0]);
        assert_eq!(INTERSECTION_COLOR, [0, 255, 0]);
    }

    // Tests output suffixes differ so outputs are never confused
    // Verified by sharing one suffix
    #[test]
    fn test_output_suffixes() {
        assert_eq!(OUTPUT_SUFFIX, "_cleaned");
        assert_eq!(COMPARISON_SUFFIX, "_comparison");
    }

    // Tests per-file summary limit
    // Verified by increasing the limit
    #[test]
    fn test_max_file_summary_lines() {
        assert_eq!(MAX_FILE_SUMMARY_LINES, 5);
    }
}
