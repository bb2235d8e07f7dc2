use ndarray::Array1;

use crate::config::{Direction, StopMetric};

/// Early stop on a score threshold.
///
/// With [`StopMetric::GenerationMax`] the generation maximum is compared in both
/// directions: above `stop_value` when maximizing, below it when minimizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingPolicy {
	pub stop_value: f64,
	pub direction: Direction,
	pub metric: StopMetric,
}

impl StoppingPolicy {
	pub fn new(stop_value: f64, direction: Direction, metric: StopMetric) -> Self {
		Self { stop_value, direction, metric }
	}

	pub fn should_stop(&self, scores: &Array1<f64>) -> bool {
		if scores.is_empty() {
			return false;
		}
		let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
		let observed = match (self.metric, self.direction) {
			(StopMetric::Best, Direction::Min) => scores.iter().copied().fold(f64::INFINITY, f64::min),
			_ => max,
		};
		match self.direction {
			Direction::Max => observed > self.stop_value,
			Direction::Min => observed < self.stop_value,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scores(v: &[f64]) -> Array1<f64> {
		Array1::from(v.to_vec())
	}

	#[test]
	fn test_max_direction_is_strict() {
		let p = StoppingPolicy::new(0.9, Direction::Max, StopMetric::GenerationMax);
		assert!(!p.should_stop(&scores(&[0.5, 0.9])));
		assert!(p.should_stop(&scores(&[0.5, 0.91])));
	}

	#[test]
	fn test_min_direction_uses_generation_max() {
		let p = StoppingPolicy::new(1.0, Direction::Min, StopMetric::GenerationMax);
		// best (min) is below the threshold but the max is not
		assert!(!p.should_stop(&scores(&[0.1, 2.0])));
		assert!(p.should_stop(&scores(&[0.1, 0.9])));
	}

	#[test]
	fn test_best_metric_uses_min_when_minimizing() {
		let p = StoppingPolicy::new(1.0, Direction::Min, StopMetric::Best);
		assert!(p.should_stop(&scores(&[0.1, 2.0])));
		let p = StoppingPolicy::new(1.0, Direction::Max, StopMetric::Best);
		assert!(p.should_stop(&scores(&[0.1, 2.0])));
	}
}
