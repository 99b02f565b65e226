use rand::Rng;
use serde::Serialize;

use crate::error::PercolationError;
use crate::percolation::Percolation;

/// z-score of the two-sided 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// Opens uniformly random sites on a fresh n-by-n grid until it percolates
/// and returns the fraction of open sites at that point.
///
/// Sites are drawn from the whole grid, so already open sites may be drawn
/// again. There is no step cap: the loop ends with probability 1.
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64, PercolationError> {
	let mut perc = Percolation::new(n)?;
	let mut draws: u64 = 0;
	while !perc.percolates() {
		let row = rng.gen_range(1..=n);
		let col = rng.gen_range(1..=n);
		perc.open(row, col)?;
		draws += 1;
	}
	debug!("n = {}: percolated after {} draws, {} open sites",
		n, draws, perc.number_of_open_sites());
	Ok(perc.open_fraction())
}

/// Threshold samples from independent trials on n-by-n grids.
#[derive(Debug, Clone)]
pub struct PercolationStats {
	n: usize,
	thresholds: Vec<f64>,
}

/// What gets reported for an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
	pub n: usize,
	pub trials: usize,
	pub mean: f64,
	pub stddev: f64,
	pub confidence_lo: f64,
	pub confidence_hi: f64,
}

impl PercolationStats {
	pub fn run<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<PercolationStats, PercolationError> {
		if n == 0 {
			return Err(PercolationError::InvalidGridSize);
		}
		if trials == 0 {
			return Err(PercolationError::InvalidTrialCount);
		}
		info!("running {} trials on a {}x{} grid", trials, n, n);

		let mut thresholds = Vec::with_capacity(trials);
		for _ in 0..trials {
			thresholds.push(run_trial(n, rng)?);
		}
		let stats = PercolationStats { n, thresholds };
		info!("mean threshold {:.6} over {} trials", stats.mean(), trials);
		Ok(stats)
	}

	pub fn thresholds(&self) -> &[f64] {
		&self.thresholds
	}

	pub fn trials(&self) -> usize {
		self.thresholds.len()
	}

	pub fn mean(&self) -> f64 {
		self.thresholds.iter().sum::<f64>() / self.trials() as f64
	}

	/// Sample standard deviation. NaN for a single trial.
	pub fn stddev(&self) -> f64 {
		let mean = self.mean();
		let sum: f64 = self.thresholds.iter().map(|&x| (x - mean) * (x - mean)).sum();
		(sum / (self.trials() as f64 - 1.0)).sqrt()
	}

	fn half_width(&self) -> f64 {
		CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
	}

	pub fn confidence_lo(&self) -> f64 {
		self.mean() - self.half_width()
	}

	pub fn confidence_hi(&self) -> f64 {
		self.mean() + self.half_width()
	}

	pub fn summary(&self) -> Summary {
		Summary {
			n: self.n,
			trials: self.trials(),
			mean: self.mean(),
			stddev: self.stddev(),
			confidence_lo: self.confidence_lo(),
			confidence_hi: self.confidence_hi(),
		}
	}
}
