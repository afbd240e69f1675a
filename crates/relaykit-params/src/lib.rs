//! # Relaykit Params
//!
//! Request parameter validation for email address fields.
//!
//! A field value may hold a single address or several separated by `,` or
//! `;` (any mixture, with or without surrounding whitespace). Every
//! candidate must satisfy the address grammar; the first malformed one
//! fails the whole field with a typed [`InvalidParameterError`] carrying
//! the field key and either a caller-supplied message or the default
//! `"<key> must follow the email format"`.
//!
//! Absent and blank fields validate successfully; only fields that carry a
//! value are checked.
//!
//! ## Examples
//!
//! ```rust
//! use relaykit_params::{EmailListValidator, email_format};
//! use std::collections::HashMap;
//!
//! let mut params = HashMap::new();
//! params.insert(
//! 	"email".to_string(),
//! 	"john.doe@example.com; jane+news@domain.org".to_string(),
//! );
//! assert!(email_format(&params, "email").is_ok());
//!
//! params.insert("email".to_string(), "jone.doe@".to_string());
//! let err = EmailListValidator::new()
//! 	.with_message("email is invalid")
//! 	.validate(&params, "email")
//! 	.unwrap_err();
//! assert_eq!(err.to_string(), "email is invalid");
//! ```

pub mod email;
pub mod error;

pub use email::{EmailListValidator, email_format};
pub use error::InvalidParameterError;
