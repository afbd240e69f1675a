//! Email address field validation

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::InvalidParameterError;

// Email address pattern.
//
// Local part: dot-separated runs of alphanumerics plus `+`, `-`, `_`;
// no leading, trailing, or doubled dots.
// Domain: dot-separated labels of alphanumerics with inner hyphens only,
// ending in an all-alphabetic top-level label of at least two characters.
// Bracketed literals, underscores in the domain, and single-character or
// digit-bearing top-level labels do not match.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9_+-]+(\.[A-Za-z0-9_+-]+)*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates a parameter holding one email address or a `,`/`;`-separated
/// list of them.
///
/// Candidates are trimmed individually, so any spacing around the
/// delimiters is accepted. An empty candidate between delimiters fails the
/// field. Validation stops at the first malformed candidate.
///
/// # Examples
///
/// ```
/// use relaykit_params::EmailListValidator;
/// use std::collections::HashMap;
///
/// let validator = EmailListValidator::new();
///
/// let mut params = HashMap::new();
/// params.insert("cc".to_string(), "a@example.com , b@example.org".to_string());
/// assert!(validator.validate(&params, "cc").is_ok());
///
/// params.insert("cc".to_string(), "a@example.com, ,b@example.org".to_string());
/// let err = validator.validate(&params, "cc").unwrap_err();
/// assert_eq!(err.param, "cc");
/// assert_eq!(err.message, "cc must follow the email format");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailListValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailListValidator {
	/// Creates a new `EmailListValidator` with the default error message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use relaykit_params::EmailListValidator;
	/// use std::collections::HashMap;
	///
	/// let mut params = HashMap::new();
	/// params.insert("email".to_string(), "jone.doe@".to_string());
	///
	/// let err = EmailListValidator::new()
	/// 	.with_message("email is invalid")
	/// 	.validate(&params, "email")
	/// 	.unwrap_err();
	/// assert_eq!(err.message, "email is invalid");
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the field `key` of `params`.
	///
	/// A missing key or a blank value validates successfully; only fields
	/// that carry a value are checked. Returns the first failure with the
	/// field key and the configured or default message.
	pub fn validate(
		&self,
		params: &HashMap<String, String>,
		key: &str,
	) -> Result<(), InvalidParameterError> {
		let Some(value) = params.get(key) else {
			return Ok(());
		};

		if value.trim().is_empty() {
			return Ok(());
		}

		for candidate in value.split([',', ';']) {
			if !EMAIL_REGEX.is_match(candidate.trim()) {
				return Err(self.error(key));
			}
		}

		Ok(())
	}

	fn error(&self, key: &str) -> InvalidParameterError {
		let message = self
			.message
			.clone()
			.unwrap_or_else(|| format!("{key} must follow the email format"));

		InvalidParameterError::new(key, message)
	}
}

/// Validates the field `key` of `params` with the default error message.
///
/// # Examples
///
/// ```
/// use relaykit_params::email_format;
/// use std::collections::HashMap;
///
/// let mut params = HashMap::new();
/// params.insert("email".to_string(), "sales-team@company.io".to_string());
/// assert!(email_format(&params, "email").is_ok());
/// ```
pub fn email_format(
	params: &HashMap<String, String>,
	key: &str,
) -> Result<(), InvalidParameterError> {
	EmailListValidator::new().validate(params, key)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn params_with(key: &str, value: &str) -> HashMap<String, String> {
		let mut params = HashMap::new();
		params.insert(key.to_string(), value.to_string());
		params
	}

	#[test]
	fn test_missing_key_is_valid() {
		let params = HashMap::new();
		assert!(email_format(&params, "email").is_ok());
	}

	#[test]
	fn test_blank_value_is_valid() {
		// A present-but-empty field skips validation entirely.
		assert!(email_format(&params_with("email", ""), "email").is_ok());
		assert!(email_format(&params_with("email", "   "), "email").is_ok());
	}

	#[test]
	fn test_default_message_names_the_field() {
		let err = email_format(&params_with("reply_to", "not-an-email"), "reply_to").unwrap_err();
		assert_eq!(err.param, "reply_to");
		assert_eq!(err.message, "reply_to must follow the email format");
	}

	#[test]
	fn test_validation_is_idempotent() {
		let validator = EmailListValidator::new();
		let params = params_with("email", "john.doe@example.com");

		assert_eq!(
			validator.validate(&params, "email"),
			validator.validate(&params, "email")
		);

		let params = params_with("email", "jone.doe@");
		assert_eq!(
			validator.validate(&params, "email"),
			validator.validate(&params, "email")
		);
	}
}
