//! Tests for the randomized greedy rectangle combiner

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use tilemerge::TileError;
    use tilemerge::algorithm::combiner::{CombineConfig, RectangleCombiner, count_by_size};
    use tilemerge::io::configuration::{DEFAULT_CHANCE_2X2, DEFAULT_CHANCE_OTHER};
    use tilemerge::spatial::{OccupancyGrid, RectangleSize, TileRectangle};

    fn combiner(chance_2x2: f64, chance_other: f64) -> RectangleCombiner {
        RectangleCombiner::new(
            CombineConfig::new(chance_2x2, chance_other).expect("chances are valid"),
        )
    }

    // Every occupied cell covered exactly once, no empty cell covered
    fn assert_partition(grid: &OccupancyGrid, rects: &[TileRectangle]) {
        let mut covered = HashSet::new();
        for rect in rects {
            for (x, y) in rect.cells() {
                assert!(
                    grid.get(x as i32, y as i32),
                    "{rect:?} covers empty cell ({x}, {y})"
                );
                assert!(covered.insert((x, y)), "cell ({x}, {y}) covered twice");
            }
        }
        assert_eq!(covered.len(), grid.occupied_count());
    }

    // Tests default chances come from configuration
    // Verified by swapping the default fields
    #[test]
    fn test_config_defaults() {
        let config = CombineConfig::default();

        assert!((config.chance_2x2() - DEFAULT_CHANCE_2X2).abs() < f64::EPSILON);
        assert!((config.chance_other() - DEFAULT_CHANCE_OTHER).abs() < f64::EPSILON);
    }

    // Tests chances outside [0, 1] and NaN are rejected
    // Verified by only checking the upper bound
    #[test]
    fn test_config_rejects_invalid_chances() {
        assert!(CombineConfig::new(0.0, 1.0).is_ok());
        assert!(matches!(
            CombineConfig::new(-0.1, 0.5),
            Err(TileError::InvalidParameter {
                parameter: "chance_2x2",
                ..
            })
        ));
        assert!(matches!(
            CombineConfig::new(0.5, 1.5),
            Err(TileError::InvalidParameter {
                parameter: "chance_other",
                ..
            })
        ));
        assert!(CombineConfig::new(f64::NAN, 0.5).is_err());
    }

    // Tests an empty grid yields no rectangles
    #[test]
    fn test_empty_grid() {
        let grid = OccupancyGrid::new(4, 4, 8);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(
            RectangleCombiner::default()
                .combine_with(&grid, &mut rng)
                .is_empty()
        );
    }

    // Tests the output is an exact partition across many seeds and shapes
    // Verified by skipping the claim check in the pair pass
    #[test]
    fn test_output_partitions_occupied_cells() {
        let grid = OccupancyGrid::from_pattern(
            "
            ##.####
            ###..##
            .#####.
            ##.#.##
            #######
            ",
            8,
        )
        .expect("pattern should parse");

        let combiner = RectangleCombiner::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rects = combiner.combine_with(&grid, &mut rng);
            assert_partition(&grid, &rects);
        }
    }

    // Tests zero chances reduce the combiner to a 1x1 fill
    // Verified by ignoring the gate in the square pass
    #[test]
    fn test_zero_chances_fill_singles() {
        let grid = OccupancyGrid::from_pattern("###\n###", 8).expect("pattern should parse");
        let mut rng = StdRng::seed_from_u64(3);

        let rects = combiner(0.0, 0.0).combine_with(&grid, &mut rng);

        assert_eq!(rects.len(), 6);
        assert!(rects.iter().all(|r| r.size == RectangleSize::OneByOne));
        // Fill order is row-major
        assert_eq!(rects.first(), Some(&TileRectangle::new(0, 0, RectangleSize::OneByOne)));
        assert_eq!(rects.last(), Some(&TileRectangle::new(2, 1, RectangleSize::OneByOne)));
    }

    // Tests a certain square gate tiles a full 4x4 with four squares
    // Verified by scanning column-major in the square pass
    #[test]
    fn test_certain_squares_on_full_grid() {
        let grid = OccupancyGrid::from_pattern("####\n####\n####\n####", 8)
            .expect("pattern should parse");
        let mut rng = StdRng::seed_from_u64(11);

        let rects = combiner(1.0, 0.0).combine_with(&grid, &mut rng);

        assert_eq!(
            rects,
            vec![
                TileRectangle::new(0, 0, RectangleSize::TwoByTwo),
                TileRectangle::new(2, 0, RectangleSize::TwoByTwo),
                TileRectangle::new(0, 2, RectangleSize::TwoByTwo),
                TileRectangle::new(2, 2, RectangleSize::TwoByTwo),
            ]
        );
    }

    // Tests pairs never mix orientations on a full 2x2 once squares are off
    // Verified by letting both orientations succeed at one anchor
    #[test]
    fn test_certain_pairs_on_full_square() {
        let grid = OccupancyGrid::from_pattern("##\n##", 8).expect("pattern should parse");

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rects = combiner(0.0, 1.0).combine_with(&grid, &mut rng);

            assert_eq!(rects.len(), 2, "seed {seed}: {rects:?}");
            let sizes: HashSet<_> = rects.iter().map(|r| r.size).collect();
            assert_eq!(sizes.len(), 1, "seed {seed}: {rects:?}");
            assert!(!sizes.contains(&RectangleSize::OneByOne));
        }
    }

    // Tests a lone vertical pair merges as 1x2 whichever order is tried
    // Verified by returning after the first failed orientation
    #[test]
    fn test_vertical_pair_merges() {
        let grid = OccupancyGrid::from_pattern("#.\n#.", 8).expect("pattern should parse");

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rects = combiner(1.0, 1.0).combine_with(&grid, &mut rng);
            assert_eq!(rects, vec![TileRectangle::new(0, 0, RectangleSize::OneByTwo)]);
        }
    }

    // Tests merges never reach past the grid edge
    // Verified by treating out-of-bounds cells as occupied
    #[test]
    fn test_merges_stop_at_border() {
        let grid = OccupancyGrid::from_pattern("#", 8).expect("pattern should parse");
        let mut rng = StdRng::seed_from_u64(5);

        let rects = combiner(1.0, 1.0).combine_with(&grid, &mut rng);

        assert_eq!(rects, vec![TileRectangle::new(0, 0, RectangleSize::OneByOne)]);
    }

    // Tests the same seed reproduces the same tiling
    // Verified by mixing in the thread rng during the pair pass
    #[test]
    fn test_seeded_runs_are_reproducible() {
        let grid = OccupancyGrid::from_pattern("####\n####\n##..", 8).expect("pattern should parse");
        let combiner = RectangleCombiner::default();

        let first = combiner.combine_with(&grid, &mut StdRng::seed_from_u64(99));
        let second = combiner.combine_with(&grid, &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    // Tests both outcomes of a full 2x2 appear with plausible frequency
    // Verified by forcing the square gate closed
    #[test]
    fn test_full_square_outcome_frequencies() {
        let grid = OccupancyGrid::from_pattern("##\n##", 8).expect("pattern should parse");
        let combiner = RectangleCombiner::default();

        let mut squares = 0;
        let mut singles = 0;
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rects = combiner.combine_with(&grid, &mut rng);
            assert_partition(&grid, &rects);

            match rects.as_slice() {
                [only] if only.size == RectangleSize::TwoByTwo => squares += 1,
                all if all.len() == 4 => singles += 1,
                _ => {}
            }
        }

        // Expected around 100 squares and 50 all-single tilings
        assert!((50..=150).contains(&squares), "squares: {squares}");
        assert!((15..=90).contains(&singles), "singles: {singles}");
    }

    // Tests the thread-rng entry point also partitions
    #[test]
    fn test_combine_with_thread_rng() {
        let grid = OccupancyGrid::from_pattern("###\n#.#", 8).expect("pattern should parse");

        let rects = RectangleCombiner::default().combine(&grid);

        assert_partition(&grid, &rects);
    }

    // Tests per-size tallies
    // Verified by counting cells instead of rectangles
    #[test]
    fn test_count_by_size() {
        let rects = [
            TileRectangle::new(0, 0, RectangleSize::TwoByTwo),
            TileRectangle::new(2, 0, RectangleSize::OneByOne),
            TileRectangle::new(3, 0, RectangleSize::OneByOne),
        ];

        let counts = count_by_size(&rects);

        assert_eq!(counts.get(&RectangleSize::TwoByTwo), Some(&1));
        assert_eq!(counts.get(&RectangleSize::OneByOne), Some(&2));
        assert_eq!(counts.get(&RectangleSize::TwoByOne), None);
    }
}
