//! Tests for Guo–Hall thinning

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use roadclean::analysis::skeleton::skeletonize;
    use roadclean::spatial::neighborhood::neighbors;
    use roadclean::spatial::{Coordinate, Raster};
    use std::collections::BTreeSet;

    fn raster_from_xy(height: usize, width: usize, xy: &[(usize, usize)]) -> Raster {
        Raster::from_coordinates(
            height,
            width,
            xy.iter().map(|&(x, y)| Coordinate::from_xy(x, y)),
        )
        .unwrap_or_else(|e| panic!("{e}"))
    }

    // Number of 8-connected foreground components
    fn component_count(raster: &Raster) -> usize {
        let (height, width) = raster.dimensions();
        let mut seen = BTreeSet::new();
        let mut components = 0;

        for start in raster.foreground() {
            if !seen.insert(start) {
                continue;
            }
            components += 1;
            let mut stack = vec![start];
            while let Some(current) = stack.pop() {
                for (next, _, _) in neighbors(current, height, width) {
                    if raster.get(next) && seen.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }

        components
    }

    // Tests a 1-pixel line is already a skeleton
    // Verified by dropping the connectivity-number condition
    #[test]
    fn test_thin_line_is_fixed_point() {
        let horizontal: Vec<(usize, usize)> = (1..9).map(|x| (x, 4)).collect();
        let raster = raster_from_xy(10, 10, &horizontal);
        assert_eq!(skeletonize(&raster), raster);

        let vertical: Vec<(usize, usize)> = (0..10).map(|y| (3, y)).collect();
        let raster = raster_from_xy(10, 10, &vertical);
        assert_eq!(skeletonize(&raster), raster);
    }

    // Tests a thin T junction survives thinning unchanged
    // Verified by dropping the neighbour-count lower bound
    #[test]
    fn test_thin_t_junction_is_fixed_point() {
        let mut xy: Vec<(usize, usize)> = (1..=18).map(|x| (x, 10)).collect();
        xy.extend([(9, 7), (9, 8), (9, 9)]);
        let raster = raster_from_xy(20, 20, &xy);
        assert_eq!(skeletonize(&raster), raster);
    }

    // Tests a 5-pixel-thick bar thins to a single centred row
    // Verified by running only the first sub-iteration
    #[test]
    fn test_thick_bar_thins_to_centerline() {
        let mut xy = Vec::new();
        for y in 3..8 {
            for x in 2..22 {
                xy.push((x, y));
            }
        }
        let raster = raster_from_xy(12, 25, &xy);
        let skeleton = skeletonize(&raster);

        assert_eq!(skeleton.dimensions(), raster.dimensions());
        assert!(skeleton.count_foreground() > 10);
        assert!(
            skeleton.foreground().all(|c| c.row == 5),
            "all skeleton pixels should sit on the centre row"
        );
        assert!(skeleton.foreground().all(|c| raster.get(c)));
    }

    // Tests an empty raster stays empty
    // Verified by seeding foreground in skeletonize
    #[test]
    fn test_background_is_unchanged() {
        let raster = Raster::background(6, 6).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(skeletonize(&raster), raster);
    }

    // Tests skeleton pixels always come from the input
    // Verified by setting deletable pixels instead of clearing them
    #[test]
    fn test_skeleton_is_subset_of_input() {
        let mut xy = Vec::new();
        for y in 2..14 {
            for x in 2..6 {
                xy.push((x, y));
            }
        }
        for x in 6..14 {
            for y in 6..9 {
                xy.push((x, y));
            }
        }
        let raster = raster_from_xy(16, 16, &xy);
        let skeleton = skeletonize(&raster);

        assert!(skeleton.count_foreground() > 0);
        assert!(skeleton.count_foreground() < raster.count_foreground());
        assert!(skeleton.foreground().all(|c| raster.get(c)));
    }

    // Tests a 2x2 block keeps a pixel instead of vanishing
    // Verified by deleting pixels with three neighbours unconditionally
    #[test]
    fn test_small_block_survives() {
        let raster = raster_from_xy(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let skeleton = skeletonize(&raster);

        assert_eq!(skeleton.count_foreground(), 1);
        assert_eq!(component_count(&skeleton), 1);
        assert!(skeleton.foreground().all(|c| raster.get(c)));
    }

    // Tests a stroke drawn two pixels thick on a diagonal keeps its length
    // Verified by swapping in Zhang–Suen deletion rules
    #[test]
    fn test_double_width_diagonal_keeps_length() {
        let mut xy: Vec<(usize, usize)> = (1..11).map(|i| (i, i)).collect();
        xy.extend((1..11).map(|i| (i + 1, i)));
        let raster = raster_from_xy(14, 14, &xy);
        assert_eq!(raster.count_foreground(), 20);
        assert_eq!(component_count(&raster), 1);

        let skeleton = skeletonize(&raster);

        assert_eq!(component_count(&skeleton), 1);
        assert!(skeleton.count_foreground() >= 10);
        assert!(skeleton.foreground().all(|c| raster.get(c)));
        assert!(skeleton.get(Coordinate::from_xy(11, 10)));
    }

    // Tests thinning never splits or removes a component of random blobs
    // Verified by dropping the paired-neighbour lower bound
    #[test]
    fn test_component_count_is_preserved() {
        for seed in 0..64u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let height = rng.random_range(3..20);
            let width = rng.random_range(3..20);
            let density = rng.random_range(0.2..0.8);
            let pixels = Array2::from_shape_fn((height, width), |_| rng.random_bool(density));
            let raster = Raster::new(pixels).unwrap_or_else(|e| panic!("{e}"));

            let skeleton = skeletonize(&raster);

            assert_eq!(
                component_count(&skeleton),
                component_count(&raster),
                "seed {seed}"
            );
            assert!(skeleton.foreground().all(|c| raster.get(c)), "seed {seed}");
        }
    }
}
