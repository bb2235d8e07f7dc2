use rand::Rng;

use crate::value::Params;

/// Per dimension, take the trial value with probability `cp`, else keep the parent's
pub fn binomial_crossover<R: Rng + ?Sized>(
	parent: &Params,
	trial: &Params,
	cp: f64,
	rng: &mut R,
) -> Params {
	parent
		.iter()
		.map(|(name, parent_value)| {
			let r: f64 = rng.random();
			let value = match trial.get(name) {
				Some(trial_value) if r < cp => trial_value.clone(),
				_ => parent_value.clone(),
			};
			(name.to_string(), value)
		})
		.collect()
}
