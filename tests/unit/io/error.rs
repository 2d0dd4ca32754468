//! Tests for error formatting, sources, and path context

#[cfg(test)]
mod tests {
    use roadclean::io::error::{
        CleanerError, PathfindingError, WithContext, invalid_input, invalid_parameter,
    };
    use roadclean::spatial::Coordinate;
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests parameter errors name the parameter and value
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("min_road_length", &-2.5, &"must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'min_road_length' = '-2.5': must be non-negative"
        );
        assert!(err.source().is_none());
    }

    // Tests input errors carry their reason
    // Verified by dropping the reason
    #[test]
    fn test_invalid_input_display() {
        let err = invalid_input(&"sketch must be at least 1x1");
        assert_eq!(err.to_string(), "Invalid input: sketch must be at least 1x1");
    }

    // Tests route failures report both ends and chain their cause
    // Verified by returning None from source
    #[test]
    fn test_pathfinding_error_chain() {
        let err = CleanerError::Pathfinding {
            start: Coordinate::from_xy(1, 2),
            end: Coordinate::from_xy(3, 4),
            source: PathfindingError::Unreachable,
        };

        assert_eq!(
            err.to_string(),
            "No route from (x=1, y=2) to (x=3, y=4): target is unreachable from start"
        );
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("target is unreachable from start"));
    }

    // Tests search error messages
    // Verified by swapping width and height in the message
    #[test]
    fn test_pathfinding_error_display() {
        let out_of_bounds = PathfindingError::OutOfBounds {
            coordinate: Coordinate::from_xy(12, 0),
            dimensions: (4, 10),
        };
        assert_eq!(
            out_of_bounds.to_string(),
            "(x=12, y=0) lies outside the 10x4 cost field"
        );

        let budget = PathfindingError::BudgetExhausted { expansions: 7 };
        assert_eq!(
            budget.to_string(),
            "search budget exhausted after 7 expansions"
        );
    }

    // Tests converted I/O errors pick up the path they concern
    // Verified by skipping the unknown-path check
    #[test]
    fn test_with_path_on_io_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        match result.with_path(Path::new("maps/town.png")) {
            Err(CleanerError::FileSystem { path, source, .. }) => {
                assert_eq!(path, PathBuf::from("maps/town.png"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileSystem error, got {other:?}"),
        }
    }

    // Tests errors that already carry context are left alone
    // Verified by overwriting every path
    #[test]
    fn test_with_path_keeps_non_io_errors() {
        let result: roadclean::Result<()> = Err(invalid_input(&"bad"));
        let err = result.with_path(Path::new("ignored.png")).unwrap_err();
        assert!(matches!(err, CleanerError::InvalidInput { reason } if reason == "bad"));

        let ok: roadclean::Result<u8> = Ok(3);
        assert_eq!(ok.with_path(Path::new("ignored.png")).unwrap(), 3);
    }
}
