//! Parameter validation errors

use thiserror::Error;

/// Error raised when a request parameter fails validation.
///
/// The only error this crate produces. It is raised synchronously to the
/// caller of the validation entry point, never wrapped, logged, or retried
/// here; translating it into a user-facing response is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidParameterError {
	/// Key of the offending field
	pub param: String,
	/// Message surfaced to the caller
	pub message: String,
}

impl InvalidParameterError {
	/// Create a new error for `param` with the given message.
	pub fn new(param: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			param: param.into(),
			message: message.into(),
		}
	}
}
