use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Element type of a parameter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
	Int,
	Float,
	Bool,
	Str,
}

impl ElementType {
	/// Type of a concrete value
	pub fn of(value: &ParamValue) -> Self {
		match value {
			ParamValue::Int(_) => ElementType::Int,
			ParamValue::Float(_) => ElementType::Float,
			ParamValue::Bool(_) => ElementType::Bool,
			ParamValue::Str(_) => ElementType::Str,
		}
	}

	/// Only numeric types can be searched over
	pub fn is_numeric(self) -> bool {
		matches!(self, ElementType::Int | ElementType::Float)
	}
}

impl FromStr for ElementType {
	type Err = String;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"int" | "integer" => Ok(ElementType::Int),
			"float" | "f64" => Ok(ElementType::Float),
			"bool" | "boolean" => Ok(ElementType::Bool),
			"str" | "string" => Ok(ElementType::Str),
			_ => Err(format!("unknown element type: {}", s)),
		}
	}
}

impl fmt::Display for ElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ElementType::Int => "int",
			ElementType::Float => "float",
			ElementType::Bool => "bool",
			ElementType::Str => "str",
		};
		f.write_str(name)
	}
}

/// Value held by one dimension of a parameter assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
	Int(i64),
	Float(f64),
	Bool(bool),
	Str(String),
}

impl ParamValue {
	/// Numeric view of the value (`None` for bool and string)
	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			ParamValue::Int(v) => Some(v as f64),
			ParamValue::Float(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match *self {
			ParamValue::Int(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match *self {
			ParamValue::Bool(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			ParamValue::Str(v) => Some(v),
			_ => None,
		}
	}

	pub fn element_type(&self) -> ElementType {
		ElementType::of(self)
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParamValue::Int(v) => write!(f, "{}", v),
			ParamValue::Float(v) => write!(f, "{}", v),
			ParamValue::Bool(v) => write!(f, "{}", v),
			ParamValue::Str(v) => write!(f, "{:?}", v),
		}
	}
}

impl From<i64> for ParamValue {
	fn from(v: i64) -> Self {
		ParamValue::Int(v)
	}
}

impl From<f64> for ParamValue {
	fn from(v: f64) -> Self {
		ParamValue::Float(v)
	}
}

impl From<bool> for ParamValue {
	fn from(v: bool) -> Self {
		ParamValue::Bool(v)
	}
}

impl From<&str> for ParamValue {
	fn from(v: &str) -> Self {
		ParamValue::Str(v.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(v: String) -> Self {
		ParamValue::Str(v)
	}
}

/// A named parameter assignment, handed to the evaluator as-is
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
		self.0.insert(name.into(), value);
	}

	pub fn get(&self, name: &str) -> Option<&ParamValue> {
		self.0.get(name)
	}

	/// Numeric value of `name`, ints are widened
	pub fn get_f64(&self, name: &str) -> Option<f64> {
		self.0.get(name).and_then(ParamValue::as_f64)
	}

	pub fn get_i64(&self, name: &str) -> Option<i64> {
		self.0.get(name).and_then(ParamValue::as_i64)
	}

	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.0.get(name).and_then(ParamValue::as_str)
	}

	pub fn get_bool(&self, name: &str) -> Option<bool> {
		self.0.get(name).and_then(ParamValue::as_bool)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl FromIterator<(String, ParamValue)> for Params {
	fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl fmt::Display for Params {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{")?;
		for (i, (k, v)) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{}: {}", k, v)?;
		}
		write!(f, "}}")
	}
}
