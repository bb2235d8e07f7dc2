use clap::Parser;
use ndarray::Array1;
use std::error::Error;
use std::path::PathBuf;

use gatuner::{
	DEFAULT_GA_PARAMETERS, Direction, ElementType, EvalResult, HistoryRecorder, ParameterSpace,
	Params, Tuner, TunerConfig, TunerOptions, Updating,
};
use gatuner_env::{RECORDS, resolve_output_dir};
use gatuner_testfunctions::{ScorerMetadata, get_scorer_metadata, scorer_names};

/// CLI arguments for a tuning run against a synthetic scorer
#[derive(Parser)]
#[command(name = "run_gatuner")]
#[command(about = "Tune hyper-parameters of a synthetic scorer with differential evolution")]
struct Args {
	/// JSON run configuration; built from the scorer metadata when absent
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Scorer name, see --list
	#[arg(short, long, default_value = "mock_cv_accuracy")]
	function: String,

	/// Seed for a reproducible run
	#[arg(long)]
	seed: Option<u64>,

	/// 0 silent, 1 per generation, 2 parameter summary, 3 whole population
	#[arg(short, long, allow_negative_numbers = true)]
	verbosity: Option<i64>,

	/// Write the progress band plot
	#[arg(long)]
	plot: bool,

	/// Save per-generation statistics as CSV
	#[arg(long)]
	record: bool,

	/// Output directory for plots and records (default: $GATUNER_DIR/data_generated)
	#[arg(short, long)]
	output_dir: Option<PathBuf>,

	/// Generational updating with parallel evaluation
	#[arg(long)]
	deferred: bool,

	/// List available scorers and exit
	#[arg(long)]
	list: bool,
}

/// One float or int dimension per scorer coordinate, named x0, x1, ...
fn default_config(meta: &ScorerMetadata) -> Result<TunerConfig, Box<dyn Error>> {
	let mut builder = ParameterSpace::builder();
	for (i, (&(lo, hi), &is_int)) in meta.bounds.iter().zip(meta.integer.iter()).enumerate() {
		let t = if is_int { ElementType::Int } else { ElementType::Float };
		builder = builder.optimized(&format!("x{}", i), t, lo, hi);
	}
	let mut ga_parameters = DEFAULT_GA_PARAMETERS;
	ga_parameters.direction = if meta.maximize { Direction::Max } else { Direction::Min };
	Ok(TunerConfig {
		ga_parameters,
		space: builder.build()?,
		options: TunerOptions { score_name: meta.name.clone(), ..Default::default() },
	})
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
	if args.list {
		for name in scorer_names() {
			if let Some(meta) = get_scorer_metadata(&name) {
				println!("{:<20} {}", name, meta.description);
			}
		}
		return Ok(());
	}

	let meta = get_scorer_metadata(&args.function).ok_or_else(|| {
		format!("unknown function '{}', available: {}", args.function, scorer_names().join(", "))
	})?;
	let mut config = match &args.config {
		Some(path) => TunerConfig::from_file(path)?,
		None => default_config(&meta)?,
	};
	if let Some(seed) = args.seed {
		config.options.seed = Some(seed);
	}
	if let Some(v) = args.verbosity {
		config.options.verbosity = v;
	}
	if args.plot {
		config.options.show_progress_plot = true;
	}
	if args.deferred {
		config.options.updating = Updating::Deferred;
	}
	if args.output_dir.is_some() {
		config.options.output_dir = args.output_dir.clone();
	}

	// Optimized dimensions feed the scorer in name order
	let names: Vec<String> = config.space.optimized_names().map(str::to_string).collect();
	let scorer = meta.scorer;
	let evaluator = move |p: &Params| -> EvalResult {
		let x: Array1<f64> = names.iter().map(|n| p.get_f64(n).unwrap_or(0.0)).collect();
		Ok(scorer(&x))
	};

	let tuner = Tuner::from_config(config)?;
	let mut recorder = HistoryRecorder::new(&args.function);
	let report = tuner.run_with(&evaluator, &mut recorder)?;

	println!("{}", report.message);
	println!("best {} = {:.6}", tuner.options().score_name, report.best_score);
	println!("best params = {}", report.best_params);
	println!("generations = {}, evaluations = {}", report.generations, report.nfev);

	if args.record {
		let dir = resolve_output_dir(args.output_dir.as_deref(), RECORDS)?;
		let path = recorder.save_to_csv(&dir)?;
		println!("records saved to {}", path.display());
	}
	Ok(())
}

fn main() {
	let args = Args::parse();
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(e) = run(args) {
		eprintln!("Error: {}", e);
		std::process::exit(1);
	}
}
