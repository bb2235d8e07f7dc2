use rand::Rng;

use crate::clip_trial::{clip_float, clip_int};
use crate::distinct_indices::distinct_indices;
use crate::individual::Population;
use crate::space::{DimensionSpec, ParameterSpace};
use crate::value::{ElementType, ParamValue, Params};

/// Trial vector for individual `i`: `a + F * (b - c)` over three distinct donors other
/// than `i`, cast to the dimension type and clipped to its bounds. Static dimensions
/// keep their value.
pub fn mutant_rand1<R: Rng + ?Sized>(
	i: usize,
	pop: &Population,
	space: &ParameterSpace,
	f: f64,
	rng: &mut R,
) -> Params {
	let idxs = distinct_indices(i, 3, pop.len(), rng);
	let (a, b, c) = (pop.get(idxs[0]), pop.get(idxs[1]), pop.get(idxs[2]));
	space
		.dimensions()
		.iter()
		.map(|d| {
			let value = match &d.spec {
				DimensionSpec::Static { value } => value.clone(),
				DimensionSpec::Optimized { element_type, lower, upper } => {
					let coord = |p: &Params| {
						p.get_f64(&d.name).expect("individual misses an optimized dimension")
					};
					let x = coord(&a.params) + f * (coord(&b.params) - coord(&c.params));
					match element_type {
						ElementType::Int => ParamValue::Int(clip_int(x.trunc(), *lower, *upper)),
						_ => ParamValue::Float(clip_float(x, *lower, *upper)),
					}
				}
			};
			(d.name.clone(), value)
		})
		.collect()
}
