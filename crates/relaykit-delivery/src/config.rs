//! SMTP configuration types
//!
//! [`SmtpAccountConfig`] is the account's stored record as the external
//! configuration store hands it over; [`TransportConfig`] is what the mail
//! transport layer receives after the mapping and blank-omission pass.

use serde::{Deserialize, Serialize};

use crate::settings::MailSettings;

/// Connection security requested by a stored SMTP configuration.
///
/// Stored records carry this as a plain string; anything other than the
/// three known values (including the empty string) reads as
/// [`SmtpSecurity::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SmtpSecurity {
	/// Direct TLS on the connection
	Tls,
	/// Implicit SSL
	Ssl,
	/// TLS with certificate verification disabled
	Noverify,
	/// Nothing stored; the port decides (see [`TransportConfig::from_account`])
	#[default]
	Unspecified,
}

impl SmtpSecurity {
	/// String form as the configuration store writes it
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Tls => "tls",
			Self::Ssl => "ssl",
			Self::Noverify => "noverify",
			Self::Unspecified => "",
		}
	}
}

impl From<&str> for SmtpSecurity {
	fn from(value: &str) -> Self {
		match value.trim().to_lowercase().as_str() {
			"tls" => Self::Tls,
			"ssl" => Self::Ssl,
			"noverify" => Self::Noverify,
			_ => Self::Unspecified,
		}
	}
}

impl From<String> for SmtpSecurity {
	fn from(value: String) -> Self {
		Self::from(value.as_str())
	}
}

impl From<SmtpSecurity> for String {
	fn from(value: SmtpSecurity) -> Self {
		value.as_str().to_string()
	}
}

/// An account's stored SMTP configuration.
///
/// Owned by the external configuration store and read-only here; fields may
/// be blank when the tenant never filled them in, so every field is
/// defaulted for deserialization of partial records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SmtpAccountConfig {
	#[serde(default)]
	pub username: String,

	#[serde(default)]
	pub password: String,

	/// SMTP server hostname
	#[serde(default)]
	pub host: String,

	#[serde(default)]
	pub port: Option<u16>,

	/// HELO domain
	#[serde(default)]
	pub domain: String,

	#[serde(default)]
	pub security: SmtpSecurity,

	/// Sender address for the From header
	#[serde(default)]
	pub from_email: String,

	/// Account name shown as the From display name
	#[serde(default)]
	pub account_display_name: String,

	/// Explicit SASL mechanism override; when absent, `plain` is assumed
	/// for password-authenticated records
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub authentication: Option<String>,
}

impl SmtpAccountConfig {
	/// Format the From header as `"display name" <address>`.
	///
	/// Double quotes are stripped from the display name so the header stays
	/// well-formed regardless of what the tenant typed.
	///
	/// # Examples
	///
	/// ```
	/// use relaykit_delivery::SmtpAccountConfig;
	///
	/// let account = SmtpAccountConfig {
	/// 	from_email: "billing@example.com".to_string(),
	/// 	account_display_name: r#"Example "The Best" Corp"#.to_string(),
	/// 	..SmtpAccountConfig::default()
	/// };
	///
	/// assert_eq!(
	/// 	account.from_header(),
	/// 	r#""Example The Best Corp" <billing@example.com>"#
	/// );
	/// ```
	pub fn from_header(&self) -> String {
		format!(
			"\"{}\" <{}>",
			self.account_display_name.replace('"', ""),
			self.from_email
		)
	}
}

/// Delivery method an outgoing message is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
	/// Real SMTP delivery
	Smtp,
	/// No-op sink that captures the message instead of sending it
	Test,
}

/// OpenSSL certificate verification mode handed to the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpensslVerifyMode {
	/// Skip certificate verification
	None,
	/// Verify the peer certificate
	Peer,
}

/// Assembled SMTP transport configuration.
///
/// Optional fields are present only when the stored record carried a value;
/// serialization skips absent fields entirely, so the transport layer never
/// sees an empty setting. Timeouts and the boolean switches are always
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportConfig {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_name: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,

	/// SMTP server hostname
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub port: Option<u16>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub domain: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub openssl_verify_mode: Option<OpensslVerifyMode>,

	/// SASL mechanism; absent when the record has no password
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authentication: Option<String>,

	pub enable_starttls_auto: bool,

	/// Connection-open timeout in seconds
	pub open_timeout: u64,

	/// Read timeout in seconds
	pub read_timeout: u64,

	pub ssl: bool,

	pub tls: bool,
}

impl TransportConfig {
	/// Map a stored account record onto a transport configuration.
	///
	/// Each rule is independent:
	///
	/// - `openssl_verify_mode` is `none` only for `noverify` records.
	/// - `authentication` is the record's override, or `plain` when a
	///   password is stored without one; records without a password carry
	///   no mechanism at all.
	/// - `enable_starttls_auto` is on unless the record demands direct TLS.
	/// - `tls` is also inferred for records that store no security mode but
	///   use the legacy implicit-TLS port 465.
	///
	/// The result is compacted once at the end: blank stored strings are
	/// dropped rather than passed on as empty settings.
	pub fn from_account(account: &SmtpAccountConfig, settings: &MailSettings) -> Self {
		let assembled = Self {
			user_name: Some(account.username.clone()),
			password: Some(account.password.clone()),
			address: Some(account.host.clone()),
			port: account.port,
			domain: Some(account.domain.clone()),
			openssl_verify_mode: match account.security {
				SmtpSecurity::Noverify => Some(OpensslVerifyMode::None),
				_ => None,
			},
			authentication: if account.password.is_empty() {
				None
			} else {
				Some(
					account
						.authentication
						.clone()
						.unwrap_or_else(|| "plain".to_string()),
				)
			},
			enable_starttls_auto: account.security != SmtpSecurity::Tls,
			open_timeout: settings.open_timeout,
			read_timeout: settings.read_timeout,
			ssl: account.security == SmtpSecurity::Ssl,
			tls: account.security == SmtpSecurity::Tls
				|| (account.security == SmtpSecurity::Unspecified && account.port == Some(465)),
		};

		assembled.compact()
	}

	// Blank-omission happens here and only here, so the rule stays
	// auditable in one place.
	fn compact(mut self) -> Self {
		for field in [
			&mut self.user_name,
			&mut self.password,
			&mut self.address,
			&mut self.domain,
			&mut self.authentication,
		] {
			if field.as_deref().is_some_and(str::is_empty) {
				*field = None;
			}
		}

		self
	}
}
