use std::fmt;

/// Invalid configuration, always raised before the first evaluation
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{name} : should be given as ga parameter")]
	MissingParameter { name: String },

	#[error("{name} : unknown parameter")]
	UnknownParameter { name: String },

	#[error("{name} : wrong type, should be {expected}")]
	WrongType { name: String, expected: String },

	#[error("{name} : is out of range, the range for this is {range}")]
	OutOfRange { name: String, range: String },

	#[error("{name} : parameters with no static value should have a specified boundary")]
	MissingBound { name: String },

	#[error("{name} : boundary given for a parameter that is not optimized")]
	ExtraneousBound { name: String },

	#[error("{name} : boundaries should have two values, a start and an end (got {len})")]
	BoundArity { name: String, len: usize },

	#[error("{name} : boundaries values are invalid ({lower}, {upper})")]
	InvalidBound { name: String, lower: f64, upper: f64 },

	#[error(
		"{name} : wrong format, format of parameter should be either [null, type] or [value, type] ({reason})"
	)]
	WrongFormat { name: String, reason: String },

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("cannot read configuration: {0}")]
	Io(#[from] std::io::Error),
}

impl ConfigError {
	/// Name of the parameter the error is about, when there is one
	pub fn parameter(&self) -> Option<&str> {
		match self {
			ConfigError::MissingParameter { name }
			| ConfigError::UnknownParameter { name }
			| ConfigError::WrongType { name, .. }
			| ConfigError::OutOfRange { name, .. }
			| ConfigError::MissingBound { name }
			| ConfigError::ExtraneousBound { name }
			| ConfigError::BoundArity { name, .. }
			| ConfigError::InvalidBound { name, .. }
			| ConfigError::WrongFormat { name, .. } => Some(name),
			ConfigError::Json(_) | ConfigError::Io(_) => None,
		}
	}

	pub(crate) fn wrong_format(name: &str, reason: impl Into<String>) -> Self {
		ConfigError::WrongFormat { name: name.to_string(), reason: reason.into() }
	}

	pub(crate) fn out_of_range(name: &str, range: impl Into<String>) -> Self {
		ConfigError::OutOfRange { name: name.to_string(), range: range.into() }
	}
}

/// Failure reported by an evaluator; aborts the run
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct EvaluatorError {
	message: String,
	#[source]
	source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl EvaluatorError {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into(), source: None }
	}

	/// Wrap any error raised by the scoring code, keeping its message
	pub fn from_error<E>(err: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		Self { message: err.to_string(), source: Some(Box::new(err)) }
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Top level error of a tuning run
#[derive(Debug, thiserror::Error)]
pub enum TunerError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Evaluator(#[from] EvaluatorError),

	#[error("output failed: {0}")]
	Output(String),
}

impl From<gatuner_env::EnvError> for TunerError {
	fn from(e: gatuner_env::EnvError) -> Self {
		TunerError::Output(e.to_string())
	}
}

/// Recoverable configuration issue; the run continues with a corrected value
#[derive(Debug, Clone, PartialEq)]
pub enum TunerWarning {
	VerbosityReset { given: i64, used: i64 },
}

impl fmt::Display for TunerWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TunerWarning::VerbosityReset { given, used } => write!(
				f,
				"Invalid verbosity level {} provided. Using default value of {}.",
				given, used
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages_lead_with_parameter() {
		let e = ConfigError::MissingParameter { name: "cp".into() };
		assert!(e.to_string().starts_with("cp"));
		assert_eq!(e.parameter(), Some("cp"));
	}

	#[test]
	fn test_evaluator_error_is_transparent() {
		let io = std::io::Error::other("fold 3 failed");
		let err: TunerError = EvaluatorError::from_error(io).into();
		assert_eq!(err.to_string(), "fold 3 failed");
		assert!(std::error::Error::source(&err).is_some());
	}
}
