//! # Relaykit
//!
//! Email delivery configuration and request parameter validation for
//! multi-tenant web applications.
//!
//! Relaykit decides, per outgoing message, which transport the application
//! should hand a message to (a tenant's stored SMTP settings, a
//! deployment-wide sender pool, or the no-op test sink) and validates
//! free-text email address fields before they reach the mailer.
//!
//! Both pieces are pure functions over their inputs: nothing in this
//! workspace opens a connection, reads a database, or sends anything.
//!
//! ## Feature Flags
//!
//! - `delivery` - Delivery method selection and SMTP transport configuration
//! - `params` - Parameter validation for email address fields
//! - `full` (default) - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use relaykit::delivery::{DeliverySelection, MailSettings, select};
//! use relaykit::params::email_format;
//! use std::collections::HashMap;
//!
//! // Validate a recipient list field before doing anything with it.
//! let mut params = HashMap::new();
//! params.insert("email".to_string(), "a@example.com; b@example.org".to_string());
//! email_format(&params, "email").unwrap();
//!
//! // Outside production the host transport is left untouched.
//! let settings = MailSettings::default();
//! assert_eq!(select(&settings, None), DeliverySelection::Unchanged);
//! ```

#[cfg(feature = "delivery")]
pub use relaykit_delivery as delivery;

#[cfg(feature = "params")]
pub use relaykit_params as params;

/// Re-export of the most commonly used types
pub mod prelude {
	#[cfg(feature = "delivery")]
	pub use relaykit_delivery::{
		DeliveryMethod, DeliveryPreference, DeliverySelection, MailSettings, SmtpAccountConfig,
		SmtpSecurity, TransportConfig, select,
	};

	#[cfg(feature = "params")]
	pub use relaykit_params::{EmailListValidator, InvalidParameterError, email_format};
}
