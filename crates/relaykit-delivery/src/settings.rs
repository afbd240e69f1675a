//! Process-wide mail delivery settings
//!
//! Read once at startup from environment variables and treated as immutable
//! afterwards; the selector only ever borrows them.

use serde::{Deserialize, Serialize};

/// Default SMTP connection-open timeout, in seconds.
pub const DEFAULT_OPEN_TIMEOUT: u64 = 15;

/// Default SMTP read timeout, in seconds.
pub const DEFAULT_READ_TIMEOUT: u64 = 25;

/// Deployment-wide mail configuration consulted for every outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailSettings {
	/// Whether the process runs in production mode
	pub production: bool,

	/// Demo deployments capture all outbound mail in the test sink
	pub demo: bool,

	/// Deployment-wide forced delivery through the shared sender pool
	pub force_delivery: bool,

	/// Sender addresses available to forced delivery
	pub from_pool: Vec<String>,

	/// SMTP connection-open timeout in seconds, handed through to the
	/// transport layer
	pub open_timeout: u64,

	/// SMTP read timeout in seconds, handed through to the transport layer
	pub read_timeout: u64,
}

impl Default for MailSettings {
	fn default() -> Self {
		Self {
			production: false,
			demo: false,
			force_delivery: false,
			from_pool: Vec::new(),
			open_timeout: DEFAULT_OPEN_TIMEOUT,
			read_timeout: DEFAULT_READ_TIMEOUT,
		}
	}
}

impl MailSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Set production mode
	pub fn with_production(mut self, production: bool) -> Self {
		self.production = production;
		self
	}

	/// Set demo mode
	pub fn with_demo(mut self, demo: bool) -> Self {
		self.demo = demo;
		self
	}

	/// Enable or disable forced delivery
	pub fn with_force_delivery(mut self, force: bool) -> Self {
		self.force_delivery = force;
		self
	}

	/// Set the forced-delivery sender pool
	pub fn with_from_pool(mut self, pool: Vec<String>) -> Self {
		self.from_pool = pool;
		self
	}

	/// Set the connection-open timeout in seconds
	pub fn with_open_timeout(mut self, seconds: u64) -> Self {
		self.open_timeout = seconds;
		self
	}

	/// Set the read timeout in seconds
	pub fn with_read_timeout(mut self, seconds: u64) -> Self {
		self.read_timeout = seconds;
		self
	}

	/// Load settings from environment variables.
	///
	/// Recognized variables:
	///
	/// - `RELAYKIT_ENV` - production mode when set to `production`
	/// - `RELAYKIT_DEMO` - demo mode when `true` or `1`
	/// - `SMTP_FORCE_DELIVERY` - forced delivery when `true` or `1`
	/// - `SMTP_FROM` - comma-separated forced sender pool
	/// - `SMTP_OPEN_TIMEOUT` / `SMTP_READ_TIMEOUT` - timeouts in seconds
	///
	/// Missing or unparseable values fall back to the defaults.
	pub fn from_env() -> Self {
		let production = std::env::var("RELAYKIT_ENV")
			.map(|v| v.to_lowercase() == "production")
			.unwrap_or(false);

		let demo = std::env::var("RELAYKIT_DEMO")
			.map(|v| v.to_lowercase() == "true" || v == "1")
			.unwrap_or(false);

		let force_delivery = std::env::var("SMTP_FORCE_DELIVERY")
			.map(|v| v.to_lowercase() == "true" || v == "1")
			.unwrap_or(false);

		let from_pool = std::env::var("SMTP_FROM")
			.map(|v| {
				v.split(',')
					.map(|s| s.trim().to_string())
					.filter(|s| !s.is_empty())
					.collect()
			})
			.unwrap_or_default();

		let open_timeout = std::env::var("SMTP_OPEN_TIMEOUT")
			.ok()
			.and_then(|v| v.parse().ok())
			.unwrap_or(DEFAULT_OPEN_TIMEOUT);

		let read_timeout = std::env::var("SMTP_READ_TIMEOUT")
			.ok()
			.and_then(|v| v.parse().ok())
			.unwrap_or(DEFAULT_READ_TIMEOUT);

		Self {
			production,
			demo,
			force_delivery,
			from_pool,
			open_timeout,
			read_timeout,
		}
	}
}
