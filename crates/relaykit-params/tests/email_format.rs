//! Email format acceptance tables
//!
//! The grammar is defined by these tables, not by an RFC: every entry came
//! out of production traffic at some point.

use relaykit_params::{EmailListValidator, email_format};
use rstest::*;
use std::collections::HashMap;

fn params_with(value: &str) -> HashMap<String, String> {
	let mut params = HashMap::new();
	params.insert("email".to_string(), value.to_string());
	params
}

#[rstest]
#[case("  john.doe@example.com  ")]
#[case("john.doe@example.com")]
#[case("jane+newsletter@domain.org")]
#[case("mike_smith@company.net")]
#[case("lisa-wong@sub.example.co.uk")]
#[case("peter@webmail.com")]
#[case("anna.jones123@my-domain.com")]
#[case("contact@company.email")]
#[case("info@my-company123.org")]
#[case("hello.world@business.info")]
#[case("feedback@new-domain.com")]
#[case("alerts+user@localdomain.net")]
#[case("webmaster@industry.biz")]
#[case("services@agency.example")]
#[case("george123@consultant.pro")]
#[case("sales-team@company.io")]
fn accepts_valid_single_addresses(#[case] email: &str) {
	assert!(
		email_format(&params_with(email), "email").is_ok(),
		"expected {email:?} to validate"
	);
}

#[rstest]
#[case("jone.doe@")]
#[case("mike.smith@")]
#[case("jane.doe@@example.com")]
#[case("@example.com")]
#[case("lisa.wong@example")]
#[case("peter.parker..@example.com")]
#[case("anna.jones@.com")]
#[case("jack.brown@com")]
#[case("john doe@example.com")]
#[case("laura.martin@ example.com")]
#[case("dave.clark@example .com")]
#[case("susan.green@example,com")]
#[case("chris.lee@example;com")]
#[case("jenny.king@.example.com")]
#[case(".henry.ford@example.com")]
#[case("amy.baker@sub_domain.com")]
#[case("george.morris@-example.com")]
#[case("nancy.davis@example..com")]
#[case("kevin.white@.")]
#[case("diana.robinson@.example..com")]
#[case("oliver.scott@example.c")]
#[case("email1@g.comemail@g.com")]
#[case("user.name@subdomain.example@example.com")]
#[case("double@at@sign.com")]
#[case("user@@example.com")]
#[case("email@123.123.123.123")]
#[case("this...is@strange.but.valid.com")]
#[case("mix-and.match@strangely-formed-email_address.com")]
#[case("email@domain..com")]
#[case("user@-weird-domain-.com")]
#[case("user.name@[IPv6:2001:db8::1]")]
#[case("tricky.email@sub.example-.com")]
#[case("user@domain.c0m")]
fn rejects_invalid_single_addresses(#[case] email: &str) {
	let err = email_format(&params_with(email), "email")
		.expect_err(&format!("expected {email:?} to fail validation"));

	assert_eq!(err.param, "email");
	assert_eq!(err.message, "email must follow the email format");
}

#[rstest]
#[case("john.doe@example.com, jane.doe+newsletter@domain.org")]
#[case("joshua@automobile.car ; chloe+fashion@food.delivery")]
#[case("mike-smith@company.net;lisa.wong-sales@sub.example.co.uk")]
#[case("peter.parker+info@webmail.com,laura.martin-office@company.co")]
#[case("anna.jones123@my-domain.com, jack.brown+work@college.edu")]
#[case("susan.green@business-info.org; dave.clark+personal@nonprofit.org")]
#[case("chris.lee+team@new-domain.com;jenny.king.marketing@localdomain.net")]
#[case("george.morris@consultant.pro; nancy.davis-office@company.io")]
#[case("joshua-jones@automobile.car; chloe.taylor+fashion@food.delivery")]
#[case("ryan.moore+alerts@music-band.com,isabella.walker.design@fashion.design")]
#[case("support-team@company.com, contact.us@domain.org")]
#[case("admin.office@industry.biz, hr.department@service.pro")]
#[case("feedback@agency-example.org; hello.world@creative-studio.net")]
#[case("sales-team@e-commerce.shop, support.department@technology.co")]
#[case("media.contact@financial.servicesl; events-coordinator@food.delivery")]
#[case("order@music-band.com; info.support@creative.example")]
#[case("design.team@webmail.com , admin-office@company.co")]
#[case("contact.sales@sub-example.co.uk, support+info@legal.gov")]
#[case("support@media.group;subscribe-updates@concert.events")]
fn accepts_valid_address_lists(#[case] emails: &str) {
	assert!(
		email_format(&params_with(emails), "email").is_ok(),
		"expected {emails:?} to validate"
	);
}

#[rstest]
#[case("jone@gmail.com, ,mike@gmail.com")]
#[case("john.doe@example.com  dave@nonprofit.org")]
#[case("; oliver.scott@example.com")]
#[case("amy.baker@ example.com, george.morris@ example.com")]
#[case("jenny.king@example.com . diana.robinson@example.com")]
#[case("nancy.davis@.com, henry.ford@.com")]
#[case("jack.brown@example.com, laura.martin@example .com")]
#[case("anna.jones@example,com lisa.wong@example.com")]
#[case("dave.clark@example.com kevin.white@example;com")]
#[case("susan.green@ example.com; john.doe@example.com")]
#[case("amy.baker@sub_domain.com george.morris@-example.com")]
#[case("nancy.davis@example..com john.doe@example.c")]
#[case("peter.parker@example.com, .henry.ford@example.com")]
#[case("diana.robinson@.example..com, mike.smith@.")]
#[case("oliver.scott@example.com; laura.martin@ example.com, jane.doe@@example.com")]
fn rejects_invalid_address_lists(#[case] emails: &str) {
	let err = email_format(&params_with(emails), "email")
		.expect_err(&format!("expected {emails:?} to fail validation"));

	assert_eq!(err.param, "email");
	assert_eq!(err.message, "email must follow the email format");
}

#[test]
fn custom_message_replaces_the_default() {
	let err = EmailListValidator::new()
		.with_message("email is invalid")
		.validate(&params_with("jone.doe@"), "email")
		.unwrap_err();

	assert_eq!(err.param, "email");
	assert_eq!(err.message, "email is invalid");
	assert_eq!(err.to_string(), "email is invalid");
}

#[test]
fn custom_message_is_not_used_on_success() {
	let result = EmailListValidator::new()
		.with_message("email is invalid")
		.validate(&params_with("john.doe@example.com"), "email");

	assert!(result.is_ok());
}

#[test]
fn only_the_requested_field_is_validated() {
	let mut params = params_with("jone.doe@");
	params.insert("cc".to_string(), "team@example.com".to_string());

	assert!(email_format(&params, "cc").is_ok());
	assert!(email_format(&params, "reply_to").is_ok());
	assert!(email_format(&params, "email").is_err());
}
