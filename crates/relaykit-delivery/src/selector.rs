//! Delivery method selection
//!
//! Classifies a send into a [`DeliveryPreference`] by precedence, then maps
//! it onto the [`DeliverySelection`] the mailer hook applies to the
//! outgoing message.

use rand::seq::SliceRandom;

use crate::config::{DeliveryMethod, SmtpAccountConfig, TransportConfig};
use crate::settings::MailSettings;

// Pool sender whose outgoing templates still carry links to the
// pre-migration origin.
const POOL_REWRITE_SENDER: &str = "Relaykit <info@relaykit.com>";
const LEGACY_ORIGIN: &str = "https://relaykit.co/";
const CURRENT_ORIGIN: &str = "https://relaykit.com/";

/// Which delivery configuration applies to a send.
///
/// Exactly one variant applies per message, chosen by precedence:
/// non-production, then demo, then forced delivery, then the account's own
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryPreference {
	/// Outside production the host transport stays as configured
	None,
	/// Demo deployments capture mail in the no-op sink
	Demo,
	/// Deployment-wide forced delivery through the shared sender pool
	Forced {
		/// Candidate sender addresses, never empty
		from_pool: Vec<String>,
	},
	/// The account's stored SMTP configuration, when it has one
	AccountSmtp(Option<SmtpAccountConfig>),
}

impl DeliveryPreference {
	/// Classify a send by the precedence order above.
	///
	/// A forced-delivery flag with an empty sender pool falls through to
	/// the account path; a pool-less forced selection could never send.
	pub fn resolve(settings: &MailSettings, account_smtp: Option<SmtpAccountConfig>) -> Self {
		if !settings.production {
			return Self::None;
		}

		if settings.demo {
			return Self::Demo;
		}

		if settings.force_delivery && !settings.from_pool.is_empty() {
			return Self::Forced {
				from_pool: settings.from_pool.clone(),
			};
		}

		Self::AccountSmtp(account_smtp)
	}
}

/// Exact-substring origin substitution applied to a message body.
///
/// This is the one hardcoded special case of the forced-delivery path: mail
/// sent from the reserved pool sender rewrites links to the retired origin.
/// It is deliberately not a general URL rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginRewrite {
	from: &'static str,
	to: &'static str,
}

impl OriginRewrite {
	fn legacy_origin() -> Self {
		Self {
			from: LEGACY_ORIGIN,
			to: CURRENT_ORIGIN,
		}
	}

	/// Replace every occurrence of the retired origin in `body`.
	///
	/// # Examples
	///
	/// ```
	/// use relaykit_delivery::{DeliverySelection, MailSettings, select};
	///
	/// let settings = MailSettings::default()
	/// 	.with_production(true)
	/// 	.with_force_delivery(true)
	/// 	.with_from_pool(vec!["Relaykit <info@relaykit.com>".to_string()]);
	///
	/// let DeliverySelection::ForcedFrom { rewrite: Some(rewrite), .. } =
	/// 	select(&settings, None)
	/// else {
	/// 	panic!("expected the reserved sender");
	/// };
	///
	/// assert_eq!(
	/// 	rewrite.apply("visit https://relaykit.co/settings"),
	/// 	"visit https://relaykit.com/settings"
	/// );
	/// ```
	pub fn apply(&self, body: &str) -> String {
		body.replace(self.from, self.to)
	}
}

/// What the mailer hook applies to an outgoing message.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliverySelection {
	/// Keep whatever transport the host environment already configured
	Unchanged,
	/// Hand the message to the no-op test sink
	Test,
	/// Keep the host transport but send from the chosen pool address
	ForcedFrom {
		/// Sender drawn from the pool for this message
		from: String,
		/// Origin substitution, present only for the reserved sender
		rewrite: Option<OriginRewrite>,
	},
	/// Deliver over the account's own SMTP transport
	Smtp {
		/// Assembled transport configuration
		config: TransportConfig,
		/// Sanitized From header
		from: String,
	},
}

impl DeliverySelection {
	/// Transport method override carried by this selection, if any.
	///
	/// `Unchanged` and `ForcedFrom` leave the host-configured method in
	/// place and return `None`.
	pub fn method(&self) -> Option<DeliveryMethod> {
		match self {
			Self::Unchanged | Self::ForcedFrom { .. } => None,
			Self::Test => Some(DeliveryMethod::Test),
			Self::Smtp { .. } => Some(DeliveryMethod::Smtp),
		}
	}
}

/// Select the delivery configuration for one outgoing message.
///
/// Pure aside from the per-message pool draw: the forced-delivery sender is
/// chosen uniformly at random on every call and never persisted.
///
/// # Examples
///
/// ```
/// use relaykit_delivery::{DeliverySelection, MailSettings, select};
///
/// // Production account without stored SMTP settings: drop into the sink
/// // instead of failing the send.
/// let settings = MailSettings::default().with_production(true);
/// assert_eq!(select(&settings, None), DeliverySelection::Test);
/// ```
pub fn select(
	settings: &MailSettings,
	account_smtp: Option<SmtpAccountConfig>,
) -> DeliverySelection {
	match DeliveryPreference::resolve(settings, account_smtp) {
		DeliveryPreference::None => DeliverySelection::Unchanged,

		DeliveryPreference::Demo => DeliverySelection::Test,

		DeliveryPreference::Forced { from_pool } => {
			match from_pool.choose(&mut rand::thread_rng()) {
				Some(from) => {
					tracing::debug!(%from, "sending through the forced delivery pool");

					let rewrite = (from.as_str() == POOL_REWRITE_SENDER)
						.then(OriginRewrite::legacy_origin);

					DeliverySelection::ForcedFrom {
						from: from.clone(),
						rewrite,
					}
				}
				// Unreachable through resolve(), which never yields an
				// empty pool.
				None => DeliverySelection::Unchanged,
			}
		}

		DeliveryPreference::AccountSmtp(Some(account)) => {
			let config = TransportConfig::from_account(&account, settings);

			DeliverySelection::Smtp {
				from: account.from_header(),
				config,
			}
		}

		DeliveryPreference::AccountSmtp(None) => {
			tracing::debug!("account has no stored SMTP configuration, using the test sink");

			DeliverySelection::Test
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_preference_precedence() {
		let base = MailSettings::default()
			.with_demo(true)
			.with_force_delivery(true)
			.with_from_pool(vec!["ops@relaykit.com".to_string()]);

		// Non-production wins over everything.
		assert_eq!(
			DeliveryPreference::resolve(&base, None),
			DeliveryPreference::None
		);

		// Demo wins over forced delivery.
		let production = base.with_production(true);
		assert_eq!(
			DeliveryPreference::resolve(&production, None),
			DeliveryPreference::Demo
		);

		// Forced delivery wins over the account path.
		let forced = production.with_demo(false);
		assert_eq!(
			DeliveryPreference::resolve(&forced, Some(SmtpAccountConfig::default())),
			DeliveryPreference::Forced {
				from_pool: vec!["ops@relaykit.com".to_string()]
			}
		);
	}

	#[test]
	fn test_forced_with_empty_pool_falls_through() {
		let settings = MailSettings::default()
			.with_production(true)
			.with_force_delivery(true);

		assert_eq!(
			DeliveryPreference::resolve(&settings, None),
			DeliveryPreference::AccountSmtp(None)
		);
	}

	#[test]
	fn test_origin_rewrite_replaces_every_occurrence() {
		let rewrite = OriginRewrite::legacy_origin();

		assert_eq!(
			rewrite.apply("https://relaykit.co/a and https://relaykit.co/b"),
			"https://relaykit.com/a and https://relaykit.com/b"
		);
		assert_eq!(rewrite.apply("no links here"), "no links here");
	}

	#[test]
	fn test_selection_method() {
		assert_eq!(DeliverySelection::Unchanged.method(), None);
		assert_eq!(
			DeliverySelection::Test.method(),
			Some(DeliveryMethod::Test)
		);
		assert_eq!(
			DeliverySelection::ForcedFrom {
				from: "ops@relaykit.com".to_string(),
				rewrite: None,
			}
			.method(),
			None
		);
	}
}
