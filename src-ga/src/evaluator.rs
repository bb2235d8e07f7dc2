//! Scoring seam between the genetic algorithm and the model being tuned.
//!
//! An evaluator is typically a cross-validated model metric and may be stochastic.
//! Any error it returns aborts the run unchanged.

use crate::error::EvaluatorError;
use crate::value::Params;

pub type EvalResult = Result<f64, EvaluatorError>;

/// Scores one parameter assignment
pub trait Evaluator: Sync {
	fn score(&self, params: &Params) -> EvalResult;
}

impl<F> Evaluator for F
where
	F: Fn(&Params) -> EvalResult + Sync,
{
	fn score(&self, params: &Params) -> EvalResult {
		self(params)
	}
}

/// Adapter for scoring functions that cannot fail
pub struct Infallible<F>(pub F);

impl<F> Evaluator for Infallible<F>
where
	F: Fn(&Params) -> f64 + Sync,
{
	fn score(&self, params: &Params) -> EvalResult {
		Ok((self.0)(params))
	}
}

pub fn infallible<F>(f: F) -> Infallible<F>
where
	F: Fn(&Params) -> f64 + Sync,
{
	Infallible(f)
}

/// Call the evaluator once; a NaN score is treated as a failed evaluation
pub(crate) fn checked_score<E: Evaluator + ?Sized>(evaluator: &E, params: &Params) -> EvalResult {
	let score = evaluator.score(params)?;
	if score.is_nan() {
		return Err(EvaluatorError::new(format!("evaluator returned NaN for {}", params)));
	}
	Ok(score)
}
