use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::EvaluatorError;
use crate::evaluator::{Evaluator, checked_score};
use crate::value::Params;

/// Parallel evaluation settings, used by deferred updating only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
	pub enabled: bool,
	/// Size of the global rayon pool; `None` uses all cores
	pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
	fn default() -> Self {
		Self { enabled: true, num_threads: None }
	}
}

impl ParallelConfig {
	/// Configure the global rayon pool once; later calls are ignored by rayon
	pub(crate) fn install(&self) {
		if let (true, Some(n)) = (self.enabled, self.num_threads) {
			if rayon::ThreadPoolBuilder::new().num_threads(n).build_global().is_err() {
				log::debug!("rayon global pool already configured, keeping it");
			}
		}
	}
}

/// Score every candidate, in input order; the first failure aborts
pub(crate) fn evaluate_all<E: Evaluator + ?Sized>(
	candidates: &[Params],
	evaluator: &E,
	config: &ParallelConfig,
) -> Result<Vec<f64>, EvaluatorError> {
	if config.enabled {
		candidates.par_iter().map(|p| checked_score(evaluator, p)).collect()
	} else {
		candidates.iter().map(|p| checked_score(evaluator, p)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::evaluator::{EvalResult, infallible};
	use crate::value::ParamValue;

	fn candidates(n: usize) -> Vec<Params> {
		(0..n)
			.map(|i| {
				let mut p = Params::new();
				p.insert("x", ParamValue::Float(i as f64));
				p
			})
			.collect()
	}

	#[test]
	fn test_parallel_keeps_order() {
		let eval = infallible(|p: &Params| p.get_f64("x").unwrap_or(0.0) * 2.0);
		let scores = evaluate_all(&candidates(64), &eval, &ParallelConfig::default()).unwrap();
		assert_eq!(scores, (0..64).map(|i| i as f64 * 2.0).collect::<Vec<_>>());
	}

	#[test]
	fn test_failure_propagates() {
		let eval = |p: &Params| -> EvalResult {
			match p.get_f64("x") {
				Some(x) if x >= 3.0 => Err(EvaluatorError::new("boom")),
				Some(x) => Ok(x),
				None => Ok(0.0),
			}
		};
		let cfg = ParallelConfig { enabled: false, num_threads: None };
		assert!(evaluate_all(&candidates(5), &eval, &cfg).is_err());
	}
}
