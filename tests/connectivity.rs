use std::collections::HashSet;

use pathfinding::prelude::bfs_reach;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use percolation::{Percolation, PercolationError, PercolationStats, Site};

/// Sites reachable from the top row through open sites, by flood fill.
fn reachable_from_top(perc: &Percolation) -> HashSet<Site> {
	let n = perc.size();
	let is_open = |site: &Site| perc.is_open(site.row, site.col).unwrap();
	bfs_reach(None, |node: &Option<Site>| match *node {
		None => (1..=n)
			.map(|col| Site::new(1, col))
			.filter(|site| is_open(site))
			.map(Some)
			.collect::<Vec<_>>(),
		Some(site) => site
			.neighbors(n)
			.filter(|site| is_open(site))
			.map(Some)
			.collect::<Vec<_>>(),
	})
	.flatten()
	.collect()
}

fn all_sites(n: usize) -> Vec<Site> {
	(1..=n).flat_map(|row| (1..=n).map(move |col| Site::new(row, col))).collect()
}

fn check_against_flood_fill(perc: &Percolation) {
	let n = perc.size();
	let full = reachable_from_top(perc);
	for site in all_sites(n) {
		assert_eq!(perc.is_full(site.row, site.col).unwrap(), full.contains(&site), "site {:?}", site);
	}
	let reaches_bottom = full.iter().any(|site| site.row == n);
	assert_eq!(perc.percolates(), reaches_bottom);

	match perc.percolation_path() {
		Some(path) => {
			assert!(reaches_bottom);
			assert_eq!(path.first().map(|s| s.row), Some(1));
			assert_eq!(path.last().map(|s| s.row), Some(n));
			for site in &path {
				assert!(perc.is_open(site.row, site.col).unwrap());
			}
			for pair in path.windows(2) {
				assert!(pair[0].neighbors(n).any(|s| s == pair[1]));
			}
		}
		None => assert!(!reaches_bottom),
	}
}

#[test]
fn matches_flood_fill_on_random_grids() {
	let mut rng = StdRng::seed_from_u64(2024);
	for _ in 0..40 {
		let n = rng.gen_range(1..=9);
		let mut order = all_sites(n);
		order.shuffle(&mut rng);

		let mut perc = Percolation::new(n).unwrap();
		check_against_flood_fill(&perc);
		for (opened, site) in order.iter().enumerate() {
			perc.open(site.row, site.col).unwrap();
			assert_eq!(perc.number_of_open_sites(), opened + 1);
			if opened % 3 == 0 {
				check_against_flood_fill(&perc);
			}
		}
		check_against_flood_fill(&perc);
		assert!(perc.percolates());
	}
}

#[test]
fn open_count_is_monotone() {
	let mut rng = StdRng::seed_from_u64(5);
	let n = 6;
	let mut perc = Percolation::new(n).unwrap();
	let mut seen = HashSet::new();
	for _ in 0..200 {
		let site = Site::new(rng.gen_range(1..=n), rng.gen_range(1..=n));
		let before = perc.number_of_open_sites();
		perc.open(site.row, site.col).unwrap();
		let expected = if seen.insert(site) { before + 1 } else { before };
		assert_eq!(perc.number_of_open_sites(), expected);
		assert!(perc.is_open(site.row, site.col).unwrap());
	}
}

#[test]
fn island_on_bottom_row_is_not_full() {
	let n = 5;
	let mut perc = Percolation::new(n).unwrap();
	for row in 1..=n {
		perc.open(row, 1).unwrap();
	}
	assert!(perc.percolates());

	for col in 3..=n {
		perc.open(n, col).unwrap();
	}
	for col in 3..=n {
		assert!(!perc.is_full(n, col).unwrap());
	}
	assert!(!perc.is_full(n - 1, 4).unwrap());

	perc.open(n, 2).unwrap();
	for col in 1..=n {
		assert!(perc.is_full(n, col).unwrap());
	}
}

#[test]
fn last_closed_site_turns_full_when_opened() {
	let n = 4;
	let mut perc = Percolation::new(n).unwrap();
	for site in all_sites(n) {
		if site != Site::new(n, 3) {
			perc.open(site.row, site.col).unwrap();
		}
	}
	assert!(perc.percolates());
	assert!(!perc.is_open(n, 3).unwrap());
	assert!(!perc.is_full(n, 3).unwrap());

	perc.open(n, 3).unwrap();
	assert!(perc.is_full(n, 3).unwrap());
	assert_eq!(perc.number_of_open_sites(), n * n);
}

#[test]
fn errors_are_invalid_arguments() {
	let mut perc = Percolation::new(2).unwrap();
	let err = perc.open(3, 1).unwrap_err();
	assert!(err.is_invalid_argument());
	assert_eq!(err.to_string(), "site (3, 1) is outside of the 2x2 grid");
	assert_eq!(perc.number_of_open_sites(), 0);
	assert!(Percolation::new(0).unwrap_err().is_invalid_argument());
}

#[test]
fn seeded_experiments_repeat() {
	let a = PercolationStats::run(10, 20, &mut StdRng::seed_from_u64(99)).unwrap();
	let b = PercolationStats::run(10, 20, &mut StdRng::seed_from_u64(99)).unwrap();
	assert_eq!(a.thresholds(), b.thresholds());
	assert_eq!(a.summary(), b.summary());
}

#[test]
fn estimate_is_near_known_threshold() {
	let mut rng = StdRng::seed_from_u64(31337);
	let stats = PercolationStats::run(30, 200, &mut rng).unwrap();
	// site percolation on the square lattice: p* ~ 0.5927
	assert!(stats.mean() > 0.54 && stats.mean() < 0.65, "mean {}", stats.mean());
	assert_eq!(
		PercolationStats::run(30, 0, &mut rng).unwrap_err(),
		PercolationError::InvalidTrialCount
	);
}
