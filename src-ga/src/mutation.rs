//! One generation of mutation, recombination and selection.

use rand::Rng;

use crate::config::GaParameters;
use crate::crossover_binomial::binomial_crossover;
use crate::error::EvaluatorError;
use crate::evaluator::Evaluator;
use crate::individual::{Individual, Population};
use crate::mutant_rand1::mutant_rand1;
use crate::parallel_eval::{ParallelConfig, evaluate_all};
use crate::recombination::{recombine_select, select};
use crate::reporter::Reporter;
use crate::space::ParameterSpace;

/// Steady-state pass: indices are processed in ascending order and overwritten in
/// place, so donors with a lower index may already belong to this generation.
pub(crate) fn evolve_immediate<E, R>(
	pop: &mut Population,
	space: &ParameterSpace,
	ga: &GaParameters,
	evaluator: &E,
	reporter: &mut dyn Reporter,
	rng: &mut R,
) -> Result<(), EvaluatorError>
where
	E: Evaluator + ?Sized,
	R: Rng + ?Sized,
{
	let n = pop.len();
	for i in 0..n {
		let trial = mutant_rand1(i, pop, space, ga.fscale, rng);
		let winner = recombine_select(pop.get(i), &trial, ga.cp, ga.direction, evaluator, rng)?;
		pop.replace(i, winner);
		reporter.progress(i + 1, n);
	}
	Ok(())
}

/// Generational pass: every trial is built from the population as it was at the
/// start of the generation, children are scored together (possibly in parallel),
/// then each one competes with its parent.
pub(crate) fn evolve_deferred<E, R>(
	pop: &mut Population,
	space: &ParameterSpace,
	ga: &GaParameters,
	evaluator: &E,
	parallel: &ParallelConfig,
	reporter: &mut dyn Reporter,
	rng: &mut R,
) -> Result<(), EvaluatorError>
where
	E: Evaluator + ?Sized,
	R: Rng + ?Sized,
{
	let n = pop.len();
	let children: Vec<_> = (0..n)
		.map(|i| {
			let trial = mutant_rand1(i, pop, space, ga.fscale, rng);
			binomial_crossover(&pop.get(i).params, &trial, ga.cp, rng)
		})
		.collect();
	let scores = evaluate_all(&children, evaluator, parallel)?;
	for (i, (child, score)) in children.into_iter().zip(scores).enumerate() {
		let winner = select(pop.get(i).clone(), Individual::new(child, score), ga.direction);
		pop.replace(i, winner);
		reporter.progress(i + 1, n);
	}
	Ok(())
}
