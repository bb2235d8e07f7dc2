//! Genetic algorithm and tuner configuration.
//!
//! Two front doors are provided: typed structs (with `validate`) and untyped
//! JSON documents (`from_json`) which report missing, unknown and mistyped keys.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, TunerWarning};
use crate::parallel_eval::ParallelConfig;
use crate::space::ParameterSpace;

/// Whether the evaluator's score is maximized or minimized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Max,
	Min,
}

impl Direction {
	/// Greedy replacement rule: ties favor the child
	pub fn accepts(self, child: f64, parent: f64) -> bool {
		match self {
			Direction::Max => child >= parent,
			Direction::Min => child <= parent,
		}
	}

	pub fn strictly_better(self, a: f64, b: f64) -> bool {
		match self {
			Direction::Max => a > b,
			Direction::Min => a < b,
		}
	}
}

impl FromStr for Direction {
	type Err = String;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"max" => Ok(Direction::Max),
			"min" => Ok(Direction::Min),
			_ => Err(format!("unknown direction: {}", s)),
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Direction::Max => "max",
			Direction::Min => "min",
		})
	}
}

/// The five knobs of the genetic algorithm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaParameters {
	/// Number of individuals, at least 5
	pub pop_size: usize,
	/// Scaling factor F applied to the donor difference
	pub fscale: f64,
	/// Generation cap, at least 1
	pub gmax: usize,
	/// Per-dimension crossover probability in [0, 1]
	pub cp: f64,
	pub direction: Direction,
}

pub const DEFAULT_GA_PARAMETERS: GaParameters =
	GaParameters { pop_size: 20, fscale: 0.5, gmax: 50, cp: 0.5, direction: Direction::Min };

impl Default for GaParameters {
	fn default() -> Self {
		DEFAULT_GA_PARAMETERS
	}
}

const GA_KEYS: [&str; 5] = ["pop_size", "fscale", "gmax", "direction", "cp"];

impl GaParameters {
	pub const MIN_POP_SIZE: usize = 5;

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.pop_size < Self::MIN_POP_SIZE {
			return Err(ConfigError::out_of_range("pop_size", "[5, inf)"));
		}
		if !self.fscale.is_finite() || self.fscale < 0.0 {
			return Err(ConfigError::out_of_range("fscale", "[0, inf)"));
		}
		if self.gmax < 1 {
			return Err(ConfigError::out_of_range("gmax", "[1, inf)"));
		}
		if !(0.0..=1.0).contains(&self.cp) {
			return Err(ConfigError::out_of_range("cp", "[0, 1]"));
		}
		Ok(())
	}

	/// Parse `{"pop_size": 15, "fscale": 0.6, "gmax": 200, "direction": "max", "cp": 0.6}`.
	/// All five keys are required.
	pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
		let map = value.as_object().ok_or_else(|| ConfigError::WrongType {
			name: "ga_parameters".into(),
			expected: "object".into(),
		})?;

		for (key, v) in map {
			if !GA_KEYS.contains(&key.as_str()) {
				return Err(ConfigError::UnknownParameter { name: key.clone() });
			}
			if key == "direction" {
				let ok = v.as_str().is_some_and(|s| s.parse::<Direction>().is_ok());
				if !ok {
					return Err(ConfigError::out_of_range("direction", "[min, max]"));
				}
			} else if !v.is_number() {
				return Err(ConfigError::WrongType { name: key.clone(), expected: "number".into() });
			}
		}
		for key in GA_KEYS {
			if !map.contains_key(key) {
				return Err(ConfigError::MissingParameter { name: key.to_string() });
			}
		}

		let params = GaParameters {
			pop_size: count(map, "pop_size", GaParameters::MIN_POP_SIZE, "[5, inf)")?,
			fscale: number(map, "fscale")?,
			gmax: count(map, "gmax", 1, "[1, inf)")?,
			cp: number(map, "cp")?,
			direction: map["direction"]
				.as_str()
				.and_then(|s| s.parse().ok())
				.ok_or_else(|| ConfigError::out_of_range("direction", "[min, max]"))?,
		};
		params.validate()?;
		Ok(params)
	}
}

fn number(map: &Map<String, Value>, key: &str) -> Result<f64, ConfigError> {
	map[key]
		.as_f64()
		.ok_or_else(|| ConfigError::WrongType { name: key.to_string(), expected: "number".into() })
}

fn count(map: &Map<String, Value>, key: &str, min: usize, range: &str) -> Result<usize, ConfigError> {
	let v = number(map, key)?;
	if v.fract() != 0.0 {
		return Err(ConfigError::WrongType { name: key.to_string(), expected: "integer".into() });
	}
	if v < min as f64 {
		return Err(ConfigError::out_of_range(key, range));
	}
	Ok(v as usize)
}

/// How a generation is advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Updating {
	/// Individuals are overwritten in place, later donors may already be updated
	#[default]
	Immediate,
	/// Donors come from a snapshot of the previous generation; children can be
	/// evaluated in parallel and are selected once the whole generation is scored
	Deferred,
}

/// Which score of a generation is compared with `stop_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopMetric {
	/// The generation maximum, whatever the direction
	#[default]
	GenerationMax,
	/// The direction's extreme: max when maximizing, min when minimizing
	Best,
}

/// Result of a validation that may have corrected some values
#[derive(Debug, Clone)]
pub struct Validated<T> {
	pub value: T,
	pub warnings: Vec<TunerWarning>,
}

/// Everything besides the GA parameters and the search space
#[derive(Debug, Clone)]
pub struct TunerOptions {
	/// Enables early stopping when set
	pub stop_value: Option<f64>,
	pub stop_metric: StopMetric,
	/// 0 silent, 1 per-generation summary, 2 parameter summary, 3 whole population
	pub verbosity: i64,
	pub show_progress_plot: bool,
	/// Plot every `plot_step` generations
	pub plot_step: usize,
	/// Name of the metric, used in logs and plot titles
	pub score_name: String,
	/// Where plots go; `GATUNER_DIR/data_generated/plots` when unset
	pub output_dir: Option<PathBuf>,
	pub seed: Option<u64>,
	pub updating: Updating,
	pub parallel: ParallelConfig,
}

impl Default for TunerOptions {
	fn default() -> Self {
		Self {
			stop_value: None,
			stop_metric: StopMetric::default(),
			verbosity: 1,
			show_progress_plot: false,
			plot_step: 1,
			score_name: "score".to_string(),
			output_dir: None,
			seed: None,
			updating: Updating::default(),
			parallel: ParallelConfig::default(),
		}
	}
}

impl TunerOptions {
	pub const DEFAULT_VERBOSITY: i64 = 1;

	pub fn validate(self) -> Result<Validated<Self>, ConfigError> {
		let mut warnings = Vec::new();
		let mut value = self;
		if let Some(v) = value.stop_value {
			if !v.is_finite() {
				return Err(ConfigError::WrongType { name: "stop_value".into(), expected: "number".into() });
			}
		}
		if value.plot_step == 0 {
			return Err(ConfigError::out_of_range("plot_step", "[1, inf)"));
		}
		if !(0..=3).contains(&value.verbosity) {
			warnings.push(TunerWarning::VerbosityReset {
				given: value.verbosity,
				used: Self::DEFAULT_VERBOSITY,
			});
			value.verbosity = Self::DEFAULT_VERBOSITY;
		}
		Ok(Validated { value, warnings })
	}
}

/// Whole tuning run as a JSON document
#[derive(Debug, Clone)]
pub struct TunerConfig {
	pub ga_parameters: GaParameters,
	pub space: ParameterSpace,
	pub options: TunerOptions,
}

impl TunerConfig {
	pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
		let doc: Value = serde_json::from_str(s)?;
		Self::from_json(&doc)
	}

	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		Self::from_json_str(&content)
	}

	/// Keys: `ga_parameters` (defaults when absent), `model_parameters`, `boundaries`,
	/// and the optional `stop_value`, `stop_metric`, `verbosity`, `seed`, `score_name`,
	/// `show_progress_plot`, `plot_step`, `updating`, `output_dir`.
	pub fn from_json(doc: &Value) -> Result<Self, ConfigError> {
		let ga_parameters = match doc.get("ga_parameters") {
			Some(v) => GaParameters::from_json(v)?,
			None => DEFAULT_GA_PARAMETERS,
		};
		let model = doc
			.get("model_parameters")
			.ok_or_else(|| ConfigError::MissingParameter { name: "model_parameters".into() })?;
		let empty = Value::Object(Map::new());
		let boundaries = doc.get("boundaries").unwrap_or(&empty);
		let space = ParameterSpace::from_json(model, boundaries)?;

		let mut options = TunerOptions::default();
		if let Some(v) = doc.get("stop_value").filter(|v| !v.is_null()) {
			options.stop_value = Some(v.as_f64().ok_or_else(|| ConfigError::WrongType {
				name: "stop_value".into(),
				expected: "number".into(),
			})?);
		}
		if let Some(v) = doc.get("verbosity") {
			// out of range levels are reset later with a warning
			options.verbosity = v.as_i64().ok_or_else(|| ConfigError::WrongType {
				name: "verbosity".into(),
				expected: "int".into(),
			})?;
		}
		if let Some(v) = doc.get("seed") {
			options.seed = Some(v.as_u64().ok_or_else(|| ConfigError::WrongType {
				name: "seed".into(),
				expected: "int".into(),
			})?);
		}
		if let Some(v) = doc.get("score_name") {
			options.score_name = v
				.as_str()
				.ok_or_else(|| ConfigError::WrongType { name: "score_name".into(), expected: "str".into() })?
				.to_string();
		}
		if let Some(v) = doc.get("show_progress_plot") {
			options.show_progress_plot = v.as_bool().ok_or_else(|| ConfigError::WrongType {
				name: "show_progress_plot".into(),
				expected: "bool".into(),
			})?;
		}
		if let Some(v) = doc.get("plot_step") {
			options.plot_step = v.as_u64().ok_or_else(|| ConfigError::WrongType {
				name: "plot_step".into(),
				expected: "int".into(),
			})? as usize;
		}
		if let Some(v) = doc.get("updating") {
			options.updating = serde_json::from_value(v.clone())?;
		}
		if let Some(v) = doc.get("stop_metric") {
			options.stop_metric = serde_json::from_value(v.clone())?;
		}
		if let Some(v) = doc.get("output_dir") {
			options.output_dir = Some(PathBuf::from(v.as_str().ok_or_else(|| {
				ConfigError::WrongType { name: "output_dir".into(), expected: "str".into() }
			})?));
		}
		Ok(Self { ga_parameters, space, options })
	}
}
