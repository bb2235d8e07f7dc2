//! Generation loop: initialize, then mutate / recombine / select until `gmax`
//! generations are done or the stopping policy fires.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GaParameters, TunerOptions, Updating};
use crate::error::{ConfigError, TunerError};
use crate::evaluator::Evaluator;
use crate::individual::Population;
use crate::init_random::init_random;
use crate::mutation::{evolve_deferred, evolve_immediate};
use crate::parallel_eval::ParallelConfig;
use crate::reporter::{NullReporter, Reporter};
use crate::space::ParameterSpace;
use crate::stats::{GenerationStats, GenerationSummary, ScoreHistory};
use crate::stopping::StoppingPolicy;
use crate::value::Params;
use crate::visualizer::Visualizer;

/// Lifecycle of an [`EvolutionEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
	Uninitialized,
	Initialized,
	Running,
	Terminated,
}

/// Result of a tuning run
#[derive(Clone)]
pub struct TuneReport {
	/// Best parameters of the final generation
	pub best_params: Params,
	pub best_score: f64,
	/// Generations completed, the initial one included
	pub generations: usize,
	/// Number of evaluator calls
	pub nfev: usize,
	pub stopped_early: bool,
	pub message: String,
	pub history: ScoreHistory,
}

impl fmt::Debug for TuneReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TuneReport")
			.field("best_params", &self.best_params.to_string())
			.field("best_score", &self.best_score)
			.field("generations", &self.generations)
			.field("nfev", &self.nfev)
			.field("stopped_early", &self.stopped_early)
			.field("message", &self.message)
			.field("history", &format!("len={}", self.history.len()))
			.finish()
	}
}

/// Differential evolution over a [`ParameterSpace`]
pub struct EvolutionEngine<'a, E>
where
	E: Evaluator + ?Sized,
{
	space: ParameterSpace,
	ga: GaParameters,
	evaluator: &'a E,
	stopping: Option<StoppingPolicy>,
	updating: Updating,
	parallel: ParallelConfig,
	seed: Option<u64>,
	plot_step: usize,
	score_name: String,
	state: EngineState,
	generation: usize,
	population: Option<Population>,
	history: ScoreHistory,
}

impl<'a, E> EvolutionEngine<'a, E>
where
	E: Evaluator + ?Sized,
{
	/// Fails before any evaluation when the configuration is invalid
	pub fn new(
		space: ParameterSpace,
		ga: GaParameters,
		options: &TunerOptions,
		evaluator: &'a E,
	) -> Result<Self, ConfigError> {
		ga.validate()?;
		if options.plot_step == 0 {
			return Err(ConfigError::out_of_range("plot_step", "[1, inf)"));
		}
		let stopping = options
			.stop_value
			.map(|v| StoppingPolicy::new(v, ga.direction, options.stop_metric));
		Ok(Self {
			space,
			ga,
			evaluator,
			stopping,
			updating: options.updating,
			parallel: options.parallel,
			seed: options.seed,
			plot_step: options.plot_step,
			score_name: options.score_name.clone(),
			state: EngineState::Uninitialized,
			generation: 0,
			population: None,
			history: ScoreHistory::default(),
		})
	}

	pub fn state(&self) -> EngineState {
		self.state
	}

	pub fn generation(&self) -> usize {
		self.generation
	}

	/// Final population of the last successful run
	pub fn population(&self) -> Option<&Population> {
		self.population.as_ref()
	}

	pub fn history(&self) -> &ScoreHistory {
		&self.history
	}

	pub fn space(&self) -> &ParameterSpace {
		&self.space
	}

	/// Run without reporting
	pub fn run(&mut self) -> Result<TuneReport, TunerError> {
		self.run_with(&mut NullReporter, None)
	}

	/// Run the whole search. Each call starts from a fresh population.
	pub fn run_with(
		&mut self,
		reporter: &mut dyn Reporter,
		mut visualizer: Option<&mut dyn Visualizer>,
	) -> Result<TuneReport, TunerError> {
		self.state = EngineState::Uninitialized;
		self.generation = 0;
		self.population = None;
		self.history = ScoreHistory::default();

		let result = self.evolve(reporter, &mut visualizer);
		self.state = EngineState::Terminated;
		result
	}

	fn evolve(
		&mut self,
		reporter: &mut dyn Reporter,
		visualizer: &mut Option<&mut dyn Visualizer>,
	) -> Result<TuneReport, TunerError> {
		let ga = self.ga;
		let mut rng: StdRng = match self.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => StdRng::from_rng(&mut rand::rng()),
		};
		let parallel = match self.updating {
			Updating::Deferred => {
				self.parallel.install();
				self.parallel
			}
			Updating::Immediate => ParallelConfig { enabled: false, num_threads: None },
		};

		log::debug!(
			"GA init: {} dimensions ({} optimized), pop_size={}, gmax={}, fscale={}, cp={}, direction={}, updating={:?}",
			self.space.len(),
			self.space.optimized_names().count(),
			ga.pop_size,
			ga.gmax,
			ga.fscale,
			ga.cp,
			ga.direction,
			self.updating
		);

		let mut pop = init_random(&self.space, ga.pop_size, self.evaluator, &parallel, &mut rng)?;
		let mut nfev = ga.pop_size;
		self.generation = 1;
		self.state = EngineState::Initialized;

		let initial = pop.best(ga.direction);
		let mut best_params = initial.params.clone();
		let mut best_score = initial.score;
		log::debug!("GA initial best: {} = {:.6e}", self.score_name, best_score);

		let mut stopped_early = false;
		let mut message = format!("Maximum generations reached: {}", ga.gmax);

		while self.generation < ga.gmax {
			self.state = EngineState::Running;
			match self.updating {
				Updating::Immediate => {
					evolve_immediate(&mut pop, &self.space, &ga, self.evaluator, reporter, &mut rng)?
				}
				Updating::Deferred => evolve_deferred(
					&mut pop,
					&self.space,
					&ga,
					self.evaluator,
					&parallel,
					reporter,
					&mut rng,
				)?,
			}
			nfev += ga.pop_size;
			self.generation += 1;

			let scores = pop.scores();
			let stats = match GenerationStats::from_scores(&scores) {
				Some(s) => s,
				None => break,
			};
			let best = pop.best(ga.direction);
			best_params = best.params.clone();
			best_score = best.score;
			self.history.push(&stats);

			reporter.generation(&GenerationSummary {
				generation: self.generation,
				stats,
				best_params: &best_params,
				best_score,
				history: &self.history,
			});
			reporter.population(self.generation, &pop);

			if let Some(viz) = visualizer.as_deref_mut() {
				if self.generation > 1 && self.history.len() % self.plot_step == 0 {
					viz.progress_band(&self.history, &self.score_name)?;
				}
			}

			if let Some(policy) = &self.stopping {
				if policy.should_stop(&scores) {
					stopped_early = true;
					message = format!(
						"Stopped at generation {}: score threshold {} reached",
						self.generation, policy.stop_value
					);
					break;
				}
			}
		}

		log::info!("GA finished: {}", message);
		self.population = Some(pop);
		Ok(TuneReport {
			best_params,
			best_score,
			generations: self.generation,
			nfev,
			stopped_early,
			message,
			history: self.history.clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::Direction;
	use crate::evaluator::infallible;

	#[test]
	fn test_state_machine() {
		let space = ParameterSpace::builder().float("x", 0.0, 10.0).build().unwrap();
		let eval = infallible(|p: &Params| p.get_f64("x").unwrap_or(0.0));
		let ga = GaParameters { pop_size: 6, fscale: 0.5, gmax: 4, cp: 0.9, direction: Direction::Max };
		let opts = TunerOptions { seed: Some(1), ..Default::default() };
		let mut engine = EvolutionEngine::new(space, ga, &opts, &eval).unwrap();
		assert_eq!(engine.state(), EngineState::Uninitialized);
		assert_eq!(engine.generation(), 0);

		let report = engine.run().unwrap();
		assert_eq!(engine.state(), EngineState::Terminated);
		assert_eq!(engine.generation(), 4);
		assert_eq!(report.generations, 4);
		assert_eq!(report.nfev, 6 * 4);
		assert_eq!(report.history.len(), 3);
		assert!(!report.stopped_early);
		assert_eq!(engine.population().map(|p| p.len()), Some(6));
	}

	#[test]
	fn test_single_generation_returns_initial_best() {
		let space = ParameterSpace::builder().float("x", 0.0, 10.0).build().unwrap();
		let eval = infallible(|p: &Params| p.get_f64("x").unwrap_or(0.0));
		let ga = GaParameters { pop_size: 5, fscale: 0.5, gmax: 1, cp: 0.5, direction: Direction::Max };
		let opts = TunerOptions { seed: Some(2), ..Default::default() };
		let mut engine = EvolutionEngine::new(space, ga, &opts, &eval).unwrap();
		let report = engine.run().unwrap();
		assert_eq!(report.nfev, 5);
		assert!(report.history.is_empty());
		let pop = engine.population().unwrap();
		assert_eq!(report.best_score, pop.best(Direction::Max).score);
	}

	#[test]
	fn test_invalid_ga_parameters_fail_at_construction() {
		let space = ParameterSpace::builder().float("x", 0.0, 1.0).build().unwrap();
		let eval = infallible(|_: &Params| 0.0);
		let ga = GaParameters { pop_size: 4, ..GaParameters::default() };
		let err = EvolutionEngine::new(space, ga, &TunerOptions::default(), &eval).err().unwrap();
		assert_eq!(err.parameter(), Some("pop_size"));
	}
}
