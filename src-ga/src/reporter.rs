//! Reporting seam: the engine calls a [`Reporter`] at fixed points and never
//! prints from inside mutation or selection.

use std::collections::BTreeMap;

use ndarray::Array1;

use crate::individual::Population;
use crate::stats::GenerationSummary;

/// Sink for run progress. All methods default to doing nothing.
pub trait Reporter {
	/// `done` individuals of the current generation went through mutation
	fn progress(&mut self, _done: usize, _pop_size: usize) {}

	/// End of a generation
	fn generation(&mut self, _summary: &GenerationSummary<'_>) {}

	/// Full population snapshot, after `generation`
	fn population(&mut self, _generation: usize, _population: &Population) {}
}

/// Reports nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

impl<R: Reporter + ?Sized> Reporter for &mut R {
	fn progress(&mut self, done: usize, pop_size: usize) {
		(**self).progress(done, pop_size)
	}
	fn generation(&mut self, summary: &GenerationSummary<'_>) {
		(**self).generation(summary)
	}
	fn population(&mut self, generation: usize, population: &Population) {
		(**self).population(generation, population)
	}
}

impl Reporter for Vec<Box<dyn Reporter>> {
	fn progress(&mut self, done: usize, pop_size: usize) {
		for r in self.iter_mut() {
			r.progress(done, pop_size);
		}
	}
	fn generation(&mut self, summary: &GenerationSummary<'_>) {
		for r in self.iter_mut() {
			r.generation(summary);
		}
	}
	fn population(&mut self, generation: usize, population: &Population) {
		for r in self.iter_mut() {
			r.population(generation, population);
		}
	}
}

/// Writes progress through the `log` facade
///
/// - verbosity 1: generation statistics and best parameters
/// - verbosity 2: adds a per-parameter summary of the population
/// - verbosity 3: adds the whole population with scores
#[derive(Debug, Clone)]
pub struct LogReporter {
	verbosity: u8,
	score_name: String,
}

impl LogReporter {
	pub fn new(verbosity: u8, score_name: impl Into<String>) -> Self {
		Self { verbosity, score_name: score_name.into() }
	}
}

impl Reporter for LogReporter {
	fn progress(&mut self, done: usize, pop_size: usize) {
		if self.verbosity >= 1 {
			log::debug!("Generated Pop {}/{}", done, pop_size);
		}
	}

	fn generation(&mut self, summary: &GenerationSummary<'_>) {
		if self.verbosity == 0 {
			return;
		}
		let name = &self.score_name;
		log::info!(
			"Generation {:4}  Max {} : {:.6}  Min {} : {:.6}  Mean {} : {:.6}",
			summary.generation,
			name,
			summary.stats.max,
			name,
			summary.stats.min,
			name,
			summary.stats.mean
		);
		log::info!("  best {} = {:.6} with {}", name, summary.best_score, summary.best_params);
	}

	fn population(&mut self, generation: usize, population: &Population) {
		if self.verbosity >= 2 {
			log::info!("Param values summary (generation {})", generation);
			log::info!("  {:<20} {:>6} {:>12} {:>12} {:>12} {:>12}", "param", "count", "mean", "std", "min", "max");
			for s in describe(population) {
				log::info!(
					"  {:<20} {:>6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
					s.name,
					s.count,
					s.mean,
					s.std,
					s.min,
					s.max
				);
			}
		}
		if self.verbosity >= 3 {
			log::info!("Population (generation {})", generation);
			for (i, m) in population.iter().enumerate() {
				log::info!("  {:4} {} : {:.6}  {}", i, self.score_name, m.score, m.params);
			}
		}
	}
}

/// Summary of one numeric parameter across a population
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSummary {
	pub name: String,
	pub count: usize,
	pub mean: f64,
	/// sample standard deviation, 0 for a single value
	pub std: f64,
	pub min: f64,
	pub max: f64,
}

/// Numeric parameters only, ordered by name
pub fn describe(population: &Population) -> Vec<ParamSummary> {
	let mut columns: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
	for m in population.iter() {
		for (name, value) in m.params.iter() {
			if let Some(v) = value.as_f64() {
				columns.entry(name).or_default().push(v);
			}
		}
	}
	columns
		.into_iter()
		.map(|(name, values)| {
			let count = values.len();
			let arr = Array1::from(values);
			ParamSummary {
				name: name.to_string(),
				count,
				mean: arr.mean().unwrap_or(f64::NAN),
				std: if count > 1 { arr.std(1.0) } else { 0.0 },
				min: arr.iter().copied().fold(f64::INFINITY, f64::min),
				max: arr.iter().copied().fold(f64::NEG_INFINITY, f64::max),
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::individual::Individual;
	use crate::value::{ParamValue, Params};

	#[test]
	fn test_describe_skips_non_numeric() {
		let members = [1.0, 2.0, 3.0]
			.iter()
			.map(|&x| {
				let mut p = Params::new();
				p.insert("x", ParamValue::Float(x));
				p.insert("solver", ParamValue::from("saga"));
				Individual::new(p, x)
			})
			.collect();
		let summary = describe(&Population::from_members(members));
		assert_eq!(summary.len(), 1);
		assert_eq!(summary[0].name, "x");
		assert_eq!(summary[0].count, 3);
		assert_eq!(summary[0].mean, 2.0);
		assert_eq!(summary[0].std, 1.0);
		assert_eq!((summary[0].min, summary[0].max), (1.0, 3.0));
	}
}
