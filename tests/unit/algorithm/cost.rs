//! Tests for path cost validation and cost field construction

#[cfg(test)]
mod tests {
    use roadclean::algorithm::cost::{CostField, PathCosts};
    use roadclean::io::error::CleanerError;
    use roadclean::spatial::{Coordinate, Raster};

    // Tests skeleton and background weights land on the right pixels
    // Verified by inverting the weight selection
    #[test]
    fn test_cost_field_weights() {
        let raster = Raster::from_coordinates(2, 3, [Coordinate::new(0, 1)])
            .unwrap_or_else(|e| panic!("{e}"));
        let costs = PathCosts {
            skeleton: 2.0,
            background: 50.0,
        };
        let field = CostField::from_skeleton(&raster, costs);

        assert_eq!(field.dimensions(), (2, 3));
        assert_eq!(field.weight(Coordinate::new(0, 1)), Some(2.0));
        assert_eq!(field.weight(Coordinate::new(1, 2)), Some(50.0));
        assert_eq!(field.weight(Coordinate::new(2, 0)), None);
        assert!(!field.contains(Coordinate::new(0, 3)));
    }

    // Tests defaults pass validation
    // Verified by flipping the default weights
    #[test]
    fn test_default_costs_are_valid() {
        assert!(PathCosts::default().validate().is_ok());
    }

    // Tests rejection of unusable weights
    // Verified by removing each validation branch in turn
    #[test]
    fn test_invalid_costs_rejected() {
        let cases = [
            (0.0, 10.0, "skeleton_cost"),
            (f64::NAN, 10.0, "skeleton_cost"),
            (1.0, f64::INFINITY, "background_cost"),
            (1.0, -3.0, "background_cost"),
            (5.0, 1.0, "background_cost"),
        ];

        for (skeleton, background, expected) in cases {
            let result = PathCosts {
                skeleton,
                background,
            }
            .validate();
            match result {
                Err(CleanerError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => panic!("expected {expected} rejection, got {other:?}"),
            }
        }
    }
}
