#[macro_use] extern crate log;

use std::fs::File;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::*;

use percolation::{ConfigError, ExperimentConfig, PercolationStats};

/// Estimates the percolation threshold of an n-by-n grid by Monte Carlo
/// simulation.
#[derive(Parser, Debug)]
#[command(name = "percolation-stats", version, about, long_about = None)]
struct Args {
	/// Grid side length
	n: Option<usize>,

	/// Number of independent trials
	trials: Option<usize>,

	/// Seed for a reproducible run
	#[arg(short, long)]
	seed: Option<u64>,

	/// JSON file with `n`, `trials` and `seed`; command line values win
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Print the summary as JSON
	#[arg(long)]
	json: bool,

	/// Also write a debug log to this file
	#[arg(long)]
	log_file: Option<PathBuf>,

	/// More output on stderr (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_logging(args: &Args) -> Result<(), ConfigError> {
	let term_level = match args.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
		TermLogger::new(term_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
	];
	if let Some(path) = &args.log_file {
		loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), File::create(path)?));
	}
	// a logger may already be installed; keep going without ours
	let _ = CombinedLogger::init(loggers);
	Ok(())
}

fn run(args: &Args) -> Result<(), ConfigError> {
	let from_file = match &args.config {
		Some(path) => ExperimentConfig::load(path)?,
		None => ExperimentConfig::default(),
	};
	let from_args = ExperimentConfig { n: args.n, trials: args.trials, seed: args.seed };
	let experiment = from_file.merge(from_args).resolve()?;

	let mut rng = match experiment.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};
	let stats = PercolationStats::run(experiment.n, experiment.trials, &mut rng)?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&stats.summary())?);
	} else {
		println!("mean                    = {}", stats.mean());
		println!("stddev                  = {}", stats.stddev());
		println!("95% confidence interval = [{}, {}]", stats.confidence_lo(), stats.confidence_hi());
	}
	Ok(())
}

fn main() {
	let args = Args::parse();
	if let Err(e) = init_logging(&args) {
		eprintln!("percolation-stats: {}", e);
		process::exit(1);
	}
	if let Err(e) = run(&args) {
		error!("{}", e);
		process::exit(1);
	}
}
