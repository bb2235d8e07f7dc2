use ndarray::Array1;
use serde::Serialize;

use crate::value::Params;

/// Aggregate of one generation's scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationStats {
	pub max: f64,
	pub min: f64,
	pub mean: f64,
	/// population standard deviation
	pub std: f64,
}

impl GenerationStats {
	/// `None` for an empty generation
	pub fn from_scores(scores: &Array1<f64>) -> Option<Self> {
		let mean = scores.mean()?;
		let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
		let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
		Some(Self { max, min, mean, std: scores.std(0.0) })
	}
}

/// Per-generation series accumulated over a run, one entry per completed generation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreHistory {
	pub max_scores: Vec<f64>,
	pub min_scores: Vec<f64>,
	pub mean_scores: Vec<f64>,
}

impl ScoreHistory {
	pub fn push(&mut self, stats: &GenerationStats) {
		self.max_scores.push(stats.max);
		self.min_scores.push(stats.min);
		self.mean_scores.push(stats.mean);
	}

	pub fn len(&self) -> usize {
		self.max_scores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.max_scores.is_empty()
	}
}

/// What a reporter gets at the end of every generation
#[derive(Debug, Clone, Copy)]
pub struct GenerationSummary<'a> {
	pub generation: usize,
	pub stats: GenerationStats,
	pub best_params: &'a Params,
	pub best_score: f64,
	pub history: &'a ScoreHistory,
}
