//! Genetic algorithm hyperparameter tuner based on differential evolution
//!
//! A model's hyperparameters are described by a [`ParameterSpace`]: each one is
//! either optimized inside box bounds (int or float) or held static. The tuner
//! searches that space with DE/rand/1/bin and greedy one-to-one selection,
//! scoring candidates through a user supplied [`Evaluator`].
//!
//! Supported features:
//! - Integer and float dimensions, static values of any scalar type
//! - Maximization or minimization
//! - Early stopping on a score threshold
//! - Steady-state (immediate) or generational (deferred, rayon parallel) updating
//! - Per-generation max / min / mean history, logged and optionally plotted
//! - JSON configuration with strict validation before any evaluation

#![allow(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod individual;
pub mod recorder;
pub mod reporter;
pub mod space;
pub mod stats;
pub mod stopping;
pub mod tuner;
pub mod value;
pub mod visualizer;

pub mod clip_trial;
pub mod crossover_binomial;
pub mod distinct_indices;
pub(crate) mod init_random;
pub mod mutant_rand1;
pub(crate) mod mutation;
pub mod parallel_eval;
pub mod recombination;

pub use config::{
	DEFAULT_GA_PARAMETERS, Direction, GaParameters, StopMetric, TunerConfig, TunerOptions,
	Updating, Validated,
};
pub use engine::{EngineState, EvolutionEngine, TuneReport};
pub use error::{ConfigError, EvaluatorError, TunerError, TunerWarning};
pub use evaluator::{EvalResult, Evaluator, Infallible, infallible};
pub use individual::{Individual, Population};
pub use parallel_eval::ParallelConfig;
pub use recorder::{GenerationRecord, HistoryRecorder};
pub use reporter::{LogReporter, NullReporter, Reporter};
pub use space::{DimensionSpec, ParameterSpace};
pub use stats::{GenerationStats, GenerationSummary, ScoreHistory};
pub use stopping::StoppingPolicy;
pub use tuner::{Tuner, tune, tune_config};
pub use value::{ElementType, ParamValue, Params};
pub use visualizer::{PlotlyVisualizer, Visualizer};
