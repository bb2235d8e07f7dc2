//! Parameter space: which dimensions are searched, which are fixed, and their bounds.
//!
//! Descriptors are resolved once at construction into a tagged [`DimensionSpec`],
//! so the mutation loop never has to inspect descriptor shapes again.

use std::collections::BTreeMap;

use rand::Rng;
use serde_json::Value;

use crate::error::ConfigError;
use crate::value::{ElementType, ParamValue, Params};

/// User supplied description of one parameter, before validation
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
	/// `[None, type]`: searched within boundaries
	Optimized(ElementType),
	/// `[value, type]`: copied unchanged into every individual
	Static(ParamValue, ElementType),
}

/// Validated dimension
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionSpec {
	Optimized { element_type: ElementType, lower: f64, upper: f64 },
	Static { value: ParamValue },
}

impl DimensionSpec {
	pub fn is_optimized(&self) -> bool {
		matches!(self, DimensionSpec::Optimized { .. })
	}

	/// Does `value` belong to this dimension?
	pub fn admits(&self, value: &ParamValue) -> bool {
		match self {
			DimensionSpec::Optimized { element_type, lower, upper } => {
				ElementType::of(value) == *element_type
					&& value.as_f64().is_some_and(|v| *lower <= v && v <= *upper)
			}
			DimensionSpec::Static { value: fixed } => fixed == value,
		}
	}
}

/// Named dimension of a [`ParameterSpace`]
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
	pub name: String,
	pub spec: DimensionSpec,
}

/// Ordered set of dimensions (ordered by name)
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpace {
	dims: Vec<Dimension>,
}

impl ParameterSpace {
	/// Validate descriptors and boundaries.
	///
	/// `boundaries` must name exactly the optimized parameters; each entry must be
	/// `[lower, upper]` with `lower < upper` (integral values for int dimensions).
	pub fn new(
		descriptors: BTreeMap<String, Descriptor>,
		boundaries: BTreeMap<String, Vec<f64>>,
	) -> Result<Self, ConfigError> {
		if descriptors.is_empty() {
			return Err(ConfigError::wrong_format(
				"model_parameters",
				"at least one parameter is required",
			));
		}

		for (name, descriptor) in &descriptors {
			match descriptor {
				Descriptor::Optimized(t) if !t.is_numeric() => {
					return Err(ConfigError::wrong_format(
						name,
						format!("optimized parameters must be int or float, got {}", t),
					));
				}
				Descriptor::Static(value, t) if ElementType::of(value) != *t => {
					return Err(ConfigError::wrong_format(
						name,
						format!("static value {} is not of type {}", value, t),
					));
				}
				_ => {}
			}
		}

		for (name, descriptor) in &descriptors {
			if matches!(descriptor, Descriptor::Optimized(_)) && !boundaries.contains_key(name) {
				return Err(ConfigError::MissingBound { name: name.clone() });
			}
		}
		for name in boundaries.keys() {
			if !matches!(descriptors.get(name), Some(Descriptor::Optimized(_))) {
				return Err(ConfigError::ExtraneousBound { name: name.clone() });
			}
		}

		let mut dims = Vec::with_capacity(descriptors.len());
		for (name, descriptor) in descriptors {
			let spec = match descriptor {
				Descriptor::Static(value, _) => DimensionSpec::Static { value },
				Descriptor::Optimized(element_type) => {
					let (lower, upper) = check_bound(&name, element_type, &boundaries[&name])?;
					DimensionSpec::Optimized { element_type, lower, upper }
				}
			};
			dims.push(Dimension { name, spec });
		}
		Ok(Self { dims })
	}

	/// Untyped front door mirroring the dictionary based interface:
	/// `model_parameters = {"C": [null, "float"], "solver": ["lbfgs", "str"]}`
	/// and `boundaries = {"C": [0, 1]}`.
	pub fn from_json(model_parameters: &Value, boundaries: &Value) -> Result<Self, ConfigError> {
		let model = model_parameters
			.as_object()
			.ok_or_else(|| ConfigError::wrong_format("model_parameters", "expected an object"))?;
		let mut descriptors = BTreeMap::new();
		for (name, raw) in model {
			descriptors.insert(name.clone(), parse_descriptor(name, raw)?);
		}

		let bounds_obj = boundaries.as_object().ok_or_else(|| ConfigError::WrongType {
			name: "boundaries".into(),
			expected: "object".into(),
		})?;
		let mut bounds = BTreeMap::new();
		for (name, raw) in bounds_obj {
			let arr = raw
				.as_array()
				.ok_or_else(|| ConfigError::BoundArity { name: name.clone(), len: 1 })?;
			let values = arr
				.iter()
				.map(|v| {
					v.as_f64().ok_or_else(|| ConfigError::WrongType {
						name: name.clone(),
						expected: "number".into(),
					})
				})
				.collect::<Result<Vec<f64>, _>>()?;
			bounds.insert(name.clone(), values);
		}
		Self::new(descriptors, bounds)
	}

	pub fn builder() -> ParameterSpaceBuilder {
		ParameterSpaceBuilder::default()
	}

	pub fn dimensions(&self) -> &[Dimension] {
		&self.dims
	}

	pub fn len(&self) -> usize {
		self.dims.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dims.is_empty()
	}

	pub fn get(&self, name: &str) -> Option<&DimensionSpec> {
		self.dims.iter().find(|d| d.name == name).map(|d| &d.spec)
	}

	pub fn optimized_names(&self) -> impl Iterator<Item = &str> {
		self.dims.iter().filter(|d| d.spec.is_optimized()).map(|d| d.name.as_str())
	}

	/// Draw one assignment: uniform in bounds for optimized dimensions
	/// (inclusive integer draw for int), fixed value for static ones.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Params {
		self.dims
			.iter()
			.map(|d| {
				let value = match &d.spec {
					DimensionSpec::Static { value } => value.clone(),
					DimensionSpec::Optimized { element_type: ElementType::Int, lower, upper } => {
						ParamValue::Int(rng.random_range(*lower as i64..=*upper as i64))
					}
					DimensionSpec::Optimized { lower, upper, .. } => {
						ParamValue::Float(rng.random_range(*lower..=*upper))
					}
				};
				(d.name.clone(), value)
			})
			.collect()
	}

	/// True when `params` has exactly this space's names and every value is admissible
	pub fn admits(&self, params: &Params) -> bool {
		params.len() == self.dims.len()
			&& self
				.dims
				.iter()
				.all(|d| params.get(&d.name).is_some_and(|v| d.spec.admits(v)))
	}
}

fn check_bound(name: &str, element_type: ElementType, raw: &[f64]) -> Result<(f64, f64), ConfigError> {
	if raw.len() != 2 {
		return Err(ConfigError::BoundArity { name: name.to_string(), len: raw.len() });
	}
	let (lower, upper) = (raw[0], raw[1]);
	let invalid = || ConfigError::InvalidBound { name: name.to_string(), lower, upper };
	// the width must be finite too, sampling and mutation work on differences
	if !lower.is_finite() || !upper.is_finite() || lower >= upper || !(upper - lower).is_finite() {
		return Err(invalid());
	}
	if element_type == ElementType::Int && (lower.fract() != 0.0 || upper.fract() != 0.0) {
		return Err(invalid());
	}
	Ok((lower, upper))
}

fn parse_descriptor(name: &str, raw: &Value) -> Result<Descriptor, ConfigError> {
	let arr = raw
		.as_array()
		.ok_or_else(|| ConfigError::wrong_format(name, "expected a two element list"))?;
	if arr.len() != 2 {
		return Err(ConfigError::wrong_format(name, format!("expected 2 elements, got {}", arr.len())));
	}
	let element_type: ElementType = arr[1]
		.as_str()
		.ok_or_else(|| ConfigError::wrong_format(name, "second element must be a type name"))?
		.parse()
		.map_err(|e: String| ConfigError::wrong_format(name, e))?;

	if arr[0].is_null() {
		return Ok(Descriptor::Optimized(element_type));
	}
	let value: ParamValue = serde_json::from_value(arr[0].clone())
		.map_err(|_| ConfigError::wrong_format(name, "static value must be a number, bool or string"))?;
	Ok(Descriptor::Static(value, element_type))
}

/// Fluent builder for [`ParameterSpace`]
#[derive(Debug, Default, Clone)]
pub struct ParameterSpaceBuilder {
	descriptors: BTreeMap<String, Descriptor>,
	boundaries: BTreeMap<String, Vec<f64>>,
}

impl ParameterSpaceBuilder {
	pub fn optimized(mut self, name: &str, element_type: ElementType, lower: f64, upper: f64) -> Self {
		self.descriptors.insert(name.to_string(), Descriptor::Optimized(element_type));
		self.boundaries.insert(name.to_string(), vec![lower, upper]);
		self
	}
	pub fn float(self, name: &str, lower: f64, upper: f64) -> Self {
		self.optimized(name, ElementType::Float, lower, upper)
	}
	pub fn int(self, name: &str, lower: i64, upper: i64) -> Self {
		self.optimized(name, ElementType::Int, lower as f64, upper as f64)
	}
	pub fn fixed(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
		let value = value.into();
		let t = ElementType::of(&value);
		self.descriptors.insert(name.to_string(), Descriptor::Static(value, t));
		self
	}
	pub fn build(self) -> Result<ParameterSpace, ConfigError> {
		ParameterSpace::new(self.descriptors, self.boundaries)
	}
}
