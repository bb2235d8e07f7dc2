use rand::Rng;

use crate::config::Direction;
use crate::crossover_binomial::binomial_crossover;
use crate::error::EvaluatorError;
use crate::evaluator::{Evaluator, checked_score};
use crate::individual::Individual;
use crate::value::Params;

/// Greedy one-to-one selection between a scored child and its parent
pub fn select(parent: Individual, child: Individual, direction: Direction) -> Individual {
	if direction.accepts(child.score, parent.score) { child } else { parent }
}

/// Cross `trial` into `parent`, score the child once, keep the better of the two
pub fn recombine_select<E, R>(
	parent: &Individual,
	trial: &Params,
	cp: f64,
	direction: Direction,
	evaluator: &E,
	rng: &mut R,
) -> Result<Individual, EvaluatorError>
where
	E: Evaluator + ?Sized,
	R: Rng + ?Sized,
{
	let child_params = binomial_crossover(&parent.params, trial, cp, rng);
	let score = checked_score(evaluator, &child_params)?;
	Ok(select(parent.clone(), Individual::new(child_params, score), direction))
}
