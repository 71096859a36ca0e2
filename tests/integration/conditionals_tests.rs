//! Integration tests for conditional (`If` / `Unless`) operations.

use html_attributes::prelude::*;
use html_attributes_integration_tests::render_after;
use rstest::*;

#[rstest]
#[case("setAttributeIf", true, r#"id="card""#)]
#[case("setAttributeIf", false, "")]
#[case("setAttributeUnless", true, "")]
#[case("setAttributeUnless", false, r#"id="card""#)]
fn test_set_attribute_with_boolean(
	#[case] name: &str,
	#[case] condition: bool,
	#[case] expected: &str,
) {
	assert_eq!(render_after(name, condition.into()), expected);
}

#[rstest]
#[case("setAttributeIf", true, r#"id="card""#)]
#[case("setAttributeIf", false, "")]
#[case("setAttributeUnless", true, "")]
#[case("setAttributeUnless", false, r#"id="card""#)]
fn test_set_attribute_with_callable(
	#[case] name: &str,
	#[case] condition: bool,
	#[case] expected: &str,
) {
	assert_eq!(
		render_after(name, Argument::callable(move || condition)),
		expected
	);
}

#[rstest]
fn test_typed_helpers_match_dispatch() {
	let mut typed = AttributeSet::new();
	typed
		.set_attribute_if("id", "card", true)
		.unwrap()
		.add_class_unless("hidden", Condition::lazy(|| true))
		.unwrap();

	let mut dispatched = AttributeSet::new();
	dispatched
		.call("setAttributeIf", vec!["id".into(), "card".into(), true.into()])
		.unwrap()
		.call("addClassUnless", vec!["hidden".into(), Argument::callable(|| true)])
		.unwrap();

	assert_eq!(typed, dispatched);
	assert_eq!(typed.to_string(), r#"id="card""#);
}

#[rstest]
fn test_unknown_method_is_reported() {
	let mut attributes = AttributeSet::new();
	let err = attributes
		.call("fooIf", vec![true.into()])
		.map(|_| ())
		.unwrap_err();

	assert_eq!(err, AttributeError::UnknownMethod("fooIf".to_string()));
	assert_eq!(err.to_string(), "Call to undefined method AttributeSet::fooIf()");
}
