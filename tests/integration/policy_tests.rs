//! Integration tests for the unsafe-attribute policy and its TOML settings.

use html_attributes::prelude::*;
use rstest::*;

#[rstest]
fn test_policy_from_settings() {
	let policy = AttributePolicy::from_toml_str(
		r#"
		allow_unsafe = false
		unsafe_prefixes = ["on", "formaction"]
		"#,
	)
	.unwrap();

	let mut attributes = AttributeSet::with_policy(policy);
	attributes
		.set_attribute("formaction", "/delete")
		.unwrap()
		.set_attribute("onclick", "go()")
		.unwrap()
		.set_attribute("name", "delete")
		.unwrap();

	assert_eq!(attributes.to_string(), r#"name="delete""#);
	assert_eq!(attributes.len(), 3);
}

#[rstest]
fn test_policy_survives_subsetting() {
	let mut attributes = AttributeSet::new();
	attributes
		.set_attribute("data-js", "x")
		.unwrap()
		.set_attribute("onclick", "go()")
		.unwrap()
		.set_unsafe_prefixes(["data-js"])
		.allow_unsafe(false);

	assert_eq!(attributes.to_string(), r#"onclick="go()""#);
	assert_eq!(attributes.only(["data-js", "onclick"]).to_string(), r#"onclick="go()""#);
	assert_eq!(attributes.without("onclick").to_string(), "");
}

#[rstest]
fn test_invalid_settings() {
	assert!(matches!(
		AttributePolicy::from_toml_str("unsafe_prefixes = 3"),
		Err(AttributeError::Config(_))
	));
}

#[rstest]
fn test_custom_escaper() {
	#[derive(Debug)]
	struct Shouting;

	impl Escaper for Shouting {
		fn escape_attribute_value<'a>(&self, value: &'a str) -> std::borrow::Cow<'a, str> {
			HtmlEscaper.escape_attribute_value(value).to_uppercase().into()
		}

		fn escape_attribute_name<'a>(&self, name: &'a str) -> std::borrow::Cow<'a, str> {
			HtmlEscaper.escape_attribute_name(name)
		}
	}

	let mut attributes = AttributeSet::new().with_escaper(Shouting);
	attributes.set_attribute("title", "a & b").unwrap();

	assert_eq!(attributes.to_string(), r#"title="A &AMP; B""#);
}
