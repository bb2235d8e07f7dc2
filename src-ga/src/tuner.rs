//! High level entry point: validate the configuration, wire the log reporter and
//! the plotly visualizer, then run an [`EvolutionEngine`].

use crate::config::{GaParameters, TunerConfig, TunerOptions};
use crate::engine::{EvolutionEngine, TuneReport};
use crate::error::{ConfigError, TunerError, TunerWarning};
use crate::evaluator::Evaluator;
use crate::individual::Population;
use crate::reporter::{LogReporter, NullReporter, Reporter};
use crate::space::ParameterSpace;
use crate::stats::GenerationSummary;
use crate::visualizer::{PlotlyVisualizer, Visualizer};

/// A validated tuning run, ready to be executed against an evaluator
#[derive(Debug, Clone)]
pub struct Tuner {
	ga_parameters: GaParameters,
	space: ParameterSpace,
	options: TunerOptions,
	warnings: Vec<TunerWarning>,
}

impl Tuner {
	/// Validate everything up front; recoverable issues are logged and kept in
	/// [`Tuner::warnings`].
	pub fn new(
		ga_parameters: GaParameters,
		space: ParameterSpace,
		options: TunerOptions,
	) -> Result<Self, ConfigError> {
		ga_parameters.validate()?;
		let validated = options.validate()?;
		for w in &validated.warnings {
			log::warn!("{}", w);
		}
		Ok(Self { ga_parameters, space, options: validated.value, warnings: validated.warnings })
	}

	pub fn from_config(config: TunerConfig) -> Result<Self, ConfigError> {
		Self::new(config.ga_parameters, config.space, config.options)
	}

	pub fn warnings(&self) -> &[TunerWarning] {
		&self.warnings
	}

	pub fn ga_parameters(&self) -> &GaParameters {
		&self.ga_parameters
	}

	pub fn space(&self) -> &ParameterSpace {
		&self.space
	}

	pub fn options(&self) -> &TunerOptions {
		&self.options
	}

	pub fn run<E>(&self, evaluator: &E) -> Result<TuneReport, TunerError>
	where
		E: Evaluator + ?Sized,
	{
		self.run_with(evaluator, &mut NullReporter)
	}

	/// Run with an extra reporter, called after the log reporter
	pub fn run_with<E>(&self, evaluator: &E, extra: &mut dyn Reporter) -> Result<TuneReport, TunerError>
	where
		E: Evaluator + ?Sized,
	{
		let mut engine =
			EvolutionEngine::new(self.space.clone(), self.ga_parameters, &self.options, evaluator)?;

		let mut visualizer = if self.options.show_progress_plot {
			let viz = match &self.options.output_dir {
				Some(dir) => PlotlyVisualizer::new(dir),
				None => PlotlyVisualizer::from_env()?,
			};
			Some(viz)
		} else {
			None
		};

		// validated to 0..=3 in Tuner::new
		let verbosity = u8::try_from(self.options.verbosity).unwrap_or(0);
		let mut reporter = Chain {
			first: LogReporter::new(verbosity, self.options.score_name.clone()),
			second: extra,
		};
		engine.run_with(&mut reporter, visualizer.as_mut().map(|v| v as &mut dyn Visualizer))
	}
}

struct Chain<'r> {
	first: LogReporter,
	second: &'r mut dyn Reporter,
}

impl Reporter for Chain<'_> {
	fn progress(&mut self, done: usize, pop_size: usize) {
		self.first.progress(done, pop_size);
		self.second.progress(done, pop_size);
	}

	fn generation(&mut self, summary: &GenerationSummary<'_>) {
		self.first.generation(summary);
		self.second.generation(summary);
	}

	fn population(&mut self, generation: usize, population: &Population) {
		self.first.population(generation, population);
		self.second.population(generation, population);
	}
}

/// Validate and run in one call
pub fn tune<E>(
	ga_parameters: GaParameters,
	space: ParameterSpace,
	evaluator: &E,
	options: TunerOptions,
) -> Result<TuneReport, TunerError>
where
	E: Evaluator + ?Sized,
{
	Tuner::new(ga_parameters, space, options)?.run(evaluator)
}

/// Same as [`tune`] from a parsed JSON configuration
pub fn tune_config<E>(config: TunerConfig, evaluator: &E) -> Result<TuneReport, TunerError>
where
	E: Evaluator + ?Sized,
{
	Tuner::from_config(config)?.run(evaluator)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::Direction;
	use crate::evaluator::infallible;
	use crate::value::Params;

	#[test]
	fn test_verbosity_is_reset_with_warning() {
		let space = ParameterSpace::builder().float("x", 0.0, 1.0).build().unwrap();
		let opts = TunerOptions { verbosity: 7, ..Default::default() };
		let tuner = Tuner::new(GaParameters::default(), space, opts).unwrap();
		assert_eq!(tuner.options().verbosity, TunerOptions::DEFAULT_VERBOSITY);
		assert_eq!(
			tuner.warnings(),
			&[TunerWarning::VerbosityReset { given: 7, used: TunerOptions::DEFAULT_VERBOSITY }]
		);
	}

	#[test]
	fn test_plots_written_to_output_dir() {
		let dir = tempfile::tempdir().unwrap();
		let space = ParameterSpace::builder().float("x", -1.0, 1.0).build().unwrap();
		let ga = GaParameters { pop_size: 5, fscale: 0.5, gmax: 3, cp: 0.7, direction: Direction::Min };
		let opts = TunerOptions {
			show_progress_plot: true,
			output_dir: Some(dir.path().to_path_buf()),
			score_name: "loss".into(),
			seed: Some(9),
			verbosity: 0,
			..Default::default()
		};
		let eval = infallible(|p: &Params| p.get_f64("x").map(|x| x * x).unwrap_or(0.0));
		let report = tune(ga, space, &eval, opts).unwrap();
		assert_eq!(report.generations, 3);
		assert!(dir.path().join("loss_progress.html").exists());
	}
}
