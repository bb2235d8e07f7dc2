use rand::Rng;

use crate::error::EvaluatorError;
use crate::evaluator::Evaluator;
use crate::individual::{Individual, Population};
use crate::parallel_eval::{ParallelConfig, evaluate_all};
use crate::space::ParameterSpace;

/// First generation: `pop_size` uniform samples, each scored exactly once
pub(crate) fn init_random<E, R>(
	space: &ParameterSpace,
	pop_size: usize,
	evaluator: &E,
	parallel: &ParallelConfig,
	rng: &mut R,
) -> Result<Population, EvaluatorError>
where
	E: Evaluator + ?Sized,
	R: Rng + ?Sized,
{
	let samples: Vec<_> = (0..pop_size).map(|_| space.sample(rng)).collect();
	let scores = evaluate_all(&samples, evaluator, parallel)?;
	Ok(Population::from_members(
		samples.into_iter().zip(scores).map(|(p, s)| Individual::new(p, s)).collect(),
	))
}
