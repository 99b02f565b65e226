#[macro_use] extern crate log;

mod config;
mod disjoint_set;
mod error;
mod percolation;
mod site;
mod stats;

pub use config::{Experiment, ExperimentConfig};
pub use disjoint_set::DisjointSet;
pub use error::{ConfigError, PercolationError};
pub use percolation::Percolation;
pub use site::{Direction, Site};
pub use stats::{run_trial, PercolationStats, Summary};
