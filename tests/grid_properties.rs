//! Property-based tests for the sampled-grid coordinate model
//!
//! Exact equality is intended: the grid evaluates `x1 + dx * i` and
//! `x1 + dx * (i - 0.5)` in the same operation order as the checks below.

use praatfan_sampled::SampledGrid;
use proptest::prelude::*;

fn arbitrary_grid() -> impl Strategy<Value = SampledGrid> {
    (-1.0e6..1.0e6_f64, 1.0e-6..1.0e3_f64, 0usize..512)
        .prop_map(|(x1, dx, nx)| SampledGrid::new(x1, dx, nx).unwrap())
}

proptest! {
    /// Property: sample i sits at x1 + dx * i
    #[test]
    fn sample_positions_follow_formula(grid in arbitrary_grid()) {
        for (i, x) in grid.sample_positions().enumerate() {
            prop_assert_eq!(x, grid.x1() + grid.dx() * i as f64);
        }
    }

    /// Property: boundary i sits at x1 + dx * (i - 0.5)
    #[test]
    fn boundary_positions_follow_formula(grid in arbitrary_grid()) {
        for (i, x) in grid.boundary_positions().enumerate() {
            prop_assert_eq!(x, grid.x1() + grid.dx() * (i as f64 - 0.5));
        }
    }

    /// Property: bins are built from consecutive boundaries, bit for bit
    #[test]
    fn bins_match_boundaries(grid in arbitrary_grid()) {
        let boundaries: Vec<f64> = grid.boundary_positions().collect();
        let bins: Vec<(f64, f64)> = grid.bins().map(Into::into).collect();

        prop_assert_eq!(bins.len(), grid.nx());
        for (i, bin) in bins.iter().enumerate() {
            prop_assert_eq!(*bin, (boundaries[i], boundaries[i + 1]));
        }
    }

    /// Property: the grid's length is its number of samples
    #[test]
    fn sample_count_is_nx(grid in arbitrary_grid()) {
        prop_assert_eq!(grid.sample_count(), grid.nx());
        prop_assert_eq!(grid.sample_positions().count(), grid.nx());
        prop_assert_eq!(grid.sample_positions().len(), grid.nx());
    }

    /// Property: there is one more boundary than samples
    #[test]
    fn boundary_count_is_nx_plus_one(grid in arbitrary_grid()) {
        prop_assert_eq!(grid.boundary_positions().count(), grid.nx() + 1);
    }

    /// Property: adjacent bins share an endpoint and bins never shrink to nothing
    #[test]
    fn bins_partition_the_domain(grid in arbitrary_grid()) {
        let bins: Vec<_> = grid.bins().collect();
        for pair in bins.windows(2) {
            prop_assert_eq!(pair[0].high, pair[1].low);
        }
        for bin in &bins {
            prop_assert!(bin.low < bin.high, "degenerate bin {:?}", bin);
        }
        if let (Some(first), Some(last)) = (bins.first(), bins.last()) {
            prop_assert_eq!(first.low, grid.xmin());
            prop_assert_eq!(last.high, grid.xmax());
        }
    }

    /// Property: iterating again yields the same sequence
    #[test]
    fn derivations_are_restartable(grid in arbitrary_grid()) {
        let first: Vec<f64> = grid.sample_positions().collect();
        let second: Vec<f64> = grid.sample_positions().collect();
        prop_assert_eq!(first, second);

        let iter = grid.boundary_positions();
        let replay = iter.clone();
        prop_assert_eq!(iter.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }

    /// Property: every sample centre maps back to its own index and bin
    #[test]
    fn sample_centres_map_back_to_their_index(grid in arbitrary_grid()) {
        for i in 0..grid.nx() {
            let x = grid.sample_position(i);
            prop_assert_eq!(grid.x_to_nearest_index(x), i as isize);
            prop_assert_eq!(grid.bin_containing(x), Some(i));
        }
    }

    /// Property: a window around the whole domain selects every sample
    #[test]
    fn full_window_selects_all_samples(grid in arbitrary_grid()) {
        prop_assert_eq!(grid.window_samples(grid.xmin(), grid.xmax()), 0..grid.nx());
    }
}
