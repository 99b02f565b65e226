use std::io;

/// Contract violations of the percolation core. Every variant is an
/// invalid argument, raised before any state is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
	#[error("grid size must be greater than 0")]
	InvalidGridSize,

	#[error("site ({row}, {col}) is outside of the {n}x{n} grid")]
	SiteOutOfBounds { row: usize, col: usize, n: usize },

	#[error("index {index} is out of range for {len} elements")]
	IndexOutOfBounds { index: usize, len: usize },

	#[error("number of trials must be greater than 0")]
	InvalidTrialCount,
}

impl PercolationError {
	pub fn is_invalid_argument(&self) -> bool {
		match self {
			PercolationError::InvalidGridSize
			| PercolationError::SiteOutOfBounds { .. }
			| PercolationError::IndexOutOfBounds { .. }
			| PercolationError::InvalidTrialCount => true,
		}
	}
}

/// Errors raised while assembling an experiment from a config file and the
/// command line.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("failed to read config: {0}")]
	Io(#[from] io::Error),

	#[error("malformed config: {0}")]
	Json(#[from] serde_json::Error),

	#[error("missing parameter `{0}`")]
	Missing(&'static str),

	#[error(transparent)]
	Percolation(#[from] PercolationError),
}
