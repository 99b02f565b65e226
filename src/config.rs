use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, PercolationError};

/// Experiment parameters. Every field is optional so a config file and the
/// command line can each supply part of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfig {
	pub n: Option<usize>,
	pub trials: Option<usize>,
	pub seed: Option<u64>,
}

/// A complete, validated experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experiment {
	pub n: usize,
	pub trials: usize,
	pub seed: Option<u64>,
}

impl ExperimentConfig {
	pub fn from_json_str(json: &str) -> Result<ExperimentConfig, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn load<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig, ConfigError> {
		let path = path.as_ref();
		let config = ExperimentConfig::from_json_str(&fs::read_to_string(path)?)?;
		info!("loaded config from {}: {:?}", path.display(), config);
		Ok(config)
	}

	/// Layers `other` on top of `self`; fields set in `other` win.
	pub fn merge(self, other: ExperimentConfig) -> ExperimentConfig {
		ExperimentConfig {
			n: other.n.or(self.n),
			trials: other.trials.or(self.trials),
			seed: other.seed.or(self.seed),
		}
	}

	pub fn resolve(&self) -> Result<Experiment, ConfigError> {
		let n = self.n.ok_or(ConfigError::Missing("n"))?;
		let trials = self.trials.ok_or(ConfigError::Missing("trials"))?;
		if n == 0 {
			return Err(PercolationError::InvalidGridSize.into());
		}
		if trials == 0 {
			return Err(PercolationError::InvalidTrialCount.into());
		}
		Ok(Experiment { n, trials, seed: self.seed })
	}
}
