//! # Relaykit Delivery
//!
//! Per-message email delivery configuration selection.
//!
//! Given the process-wide [`MailSettings`] and the sending account's stored
//! SMTP configuration (if any), this crate decides which delivery method an
//! outgoing message uses and assembles the transport configuration the mail
//! transport layer receives:
//!
//! - Outside production the message passes through unchanged, keeping
//!   whatever transport the host environment already configured.
//! - Demo deployments capture every message in the no-op test sink.
//! - Managed deployments with forced delivery send from a shared pool
//!   address, chosen per message.
//! - Otherwise the account's stored SMTP settings are mapped onto a
//!   [`TransportConfig`], falling back to the test sink when the account
//!   has none.
//!
//! Selection is pure: nothing here opens a connection or sends anything.
//! The assembled [`TransportConfig`] serializes compactly, so a blank stored
//! value is never handed to the transport layer as an empty setting.
//!
//! ## Examples
//!
//! ```rust
//! use relaykit_delivery::{
//! 	DeliverySelection, MailSettings, SmtpAccountConfig, SmtpSecurity, select,
//! };
//!
//! let settings = MailSettings::default().with_production(true);
//!
//! let account = SmtpAccountConfig {
//! 	username: "mailer".to_string(),
//! 	password: "hunter2".to_string(),
//! 	host: "smtp.example.com".to_string(),
//! 	port: Some(587),
//! 	from_email: "billing@example.com".to_string(),
//! 	account_display_name: "Example Corp".to_string(),
//! 	..SmtpAccountConfig::default()
//! };
//!
//! match select(&settings, Some(account)) {
//! 	DeliverySelection::Smtp { config, from } => {
//! 		assert_eq!(from, r#""Example Corp" <billing@example.com>"#);
//! 		assert_eq!(config.address.as_deref(), Some("smtp.example.com"));
//! 	}
//! 	other => panic!("expected SMTP delivery, got {other:?}"),
//! }
//! ```

pub mod config;
pub mod selector;
pub mod settings;

pub use config::{
	DeliveryMethod, OpensslVerifyMode, SmtpAccountConfig, SmtpSecurity, TransportConfig,
};
pub use selector::{DeliveryPreference, DeliverySelection, OriginRewrite, select};
pub use settings::{DEFAULT_OPEN_TIMEOUT, DEFAULT_READ_TIMEOUT, MailSettings};
