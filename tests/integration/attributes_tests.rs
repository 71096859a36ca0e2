//! Integration tests for building, merging and rendering attribute sets.

use html_attributes::prelude::*;
use html_attributes_integration_tests::card;
use rstest::*;
use serde_json::json;

#[rstest]
fn test_initial_attributes_render_sorted() {
	let attributes = AttributeSet::from_pairs(
		[
			("disabled", AttributeValue::from("disabled")),
			("class", AttributeValue::from(["card"])),
		],
		false,
	)
	.unwrap();

	assert_eq!(attributes.get("class"), Some(&["card".to_string()][..]));
	assert!(attributes.has_class("card"));
	assert_eq!(
		attributes.to_string(),
		r#"class="card" disabled="disabled""#
	);
}

#[rstest]
fn test_set_then_remove_attribute() {
	let mut attributes = AttributeSet::new();
	attributes.set_attribute("id", "card").unwrap();
	assert_eq!(attributes.to_string(), r#"id="card""#);

	attributes.remove_attribute("id");
	assert_eq!(attributes.get("id"), None);
	assert_eq!(attributes.to_string(), "");
}

#[rstest]
fn test_classes_added_in_order() {
	let mut attributes = AttributeSet::new();
	attributes
		.add_class("card")
		.unwrap()
		.add_class("card--wide")
		.unwrap();

	assert_eq!(attributes.to_string(), r#"class="card card--wide""#);
}

#[rstest]
fn test_removing_all_classes_omits_class() {
	let mut attributes =
		AttributeSet::from_pairs([("class", ["card", "card--wide"])], false).unwrap();

	attributes.remove_class("card--wide");
	assert_eq!(attributes.to_string(), r#"class="card""#);

	attributes.remove_class("card");
	assert_eq!(attributes.get("class"), None);
	assert_eq!(attributes.to_string(), "");
}

#[rstest]
fn test_merge_text_and_lists() {
	let mut attributes = AttributeSet::try_from(json!({
		"class": ["card", "card--wide"],
		"id": "card-1",
	}))
	.unwrap();
	let mut copy = attributes.clone();

	attributes
		.merge_attributes("aria-description", "A description.")
		.unwrap();
	copy.merge("aria-description", "A description.").unwrap();
	assert_eq!(attributes, copy);
	assert_eq!(
		attributes.to_string(),
		r#"aria-description="A description." class="card card--wide" id="card-1""#
	);

	// Text with spaces is a single value, not split into tokens.
	attributes.merge_attributes("class", "one two three").unwrap();
	assert_eq!(
		attributes.to_string(),
		r#"aria-description="A description." class="card card--wide one two three" id="card-1""#
	);

	attributes
		.merge_attributes("class", ["red", "blue", "green", "card"])
		.unwrap();
	assert_eq!(
		attributes.to_string(),
		r#"aria-description="A description." class="card card--wide one two three red blue green" id="card-1""#
	);
}

#[rstest]
fn test_unsafe_attributes_hidden_by_default() {
	let mut attributes =
		AttributeSet::try_from(json!({ "onclick": ["alert(\"hello\");"] })).unwrap();
	assert_eq!(attributes.to_string(), "");

	attributes.allow_unsafe(true);
	assert_eq!(
		attributes.to_string(),
		r#"onclick="alert(&quot;hello&quot;);""#
	);
}

#[rstest]
fn test_escaping_keeps_attribute_boundary() {
	let mut attributes = AttributeSet::new();
	attributes
		.set_attribute("title", r#"alert("hi") <script> & more"#)
		.unwrap();

	let rendered = attributes.to_string();
	assert!(!rendered.contains(r#"alert("hi")"#));
	assert_eq!(
		rendered,
		r#"title="alert(&quot;hi&quot;) &lt;script&gt; &amp; more""#
	);
}

#[rstest]
fn test_name_with_whitespace_stays_one_attribute() {
	let mut attributes = AttributeSet::new();
	attributes
		.set_attribute("data-x onclick", "alert(1)")
		.unwrap()
		.set_attribute("title x=y onmouseover", "steal()")
		.unwrap();

	let rendered = attributes.to_string();
	assert_eq!(rendered.matches('=').count(), 2);
	assert!(!rendered.contains(" onclick="));
	assert!(!rendered.contains(" onmouseover="));
}

#[rstest]
fn test_zero_values_are_dropped_like_falsy_conditions() {
	let mut rendered = AttributeSet::new();
	rendered.set_attribute("class", vec!["0", "a"]).unwrap();

	let mut conditional = AttributeSet::new();
	conditional
		.call("addClassIf", vec!["x".into(), "0".into()])
		.unwrap();

	assert_eq!(rendered.to_string(), r#"class="a""#);
	assert_eq!(conditional.to_string(), "");
}

#[rstest]
fn test_render_independent_of_insertion_order() {
	let forward = AttributeSet::from_pairs(
		[("id", "x"), ("role", "button"), ("aria-label", "Close")],
		false,
	)
	.unwrap();
	let backward = AttributeSet::from_pairs(
		[("aria-label", "Close"), ("role", "button"), ("id", "x")],
		false,
	)
	.unwrap();

	assert_eq!(forward.to_string(), backward.to_string());
}

#[rstest]
#[case(AttributeNames::from("class"), r#"class="one two three""#)]
#[case(AttributeNames::from(["id", "class"]), r#"class="one two three" id="card""#)]
#[case(AttributeNames::from(["id"]), r#"id="card""#)]
fn test_only(card: AttributeSet, #[case] names: AttributeNames, #[case] expected: &str) {
	assert_eq!(card.only(names).to_string(), expected);
}

#[rstest]
#[case(AttributeNames::from("id"), r#"class="one two three" for="carditem""#)]
#[case(AttributeNames::from(["id", "class"]), r#"for="carditem""#)]
fn test_without(card: AttributeSet, #[case] names: AttributeNames, #[case] expected: &str) {
	assert_eq!(card.without(names).to_string(), expected);
}

#[rstest]
fn test_invalid_value_kinds_rejected() {
	let mut attributes = AttributeSet::new();

	for value in [json!(42), json!(true), json!(null), json!({"a": "b"})] {
		assert!(matches!(
			attributes.set_attribute("id", value),
			Err(AttributeError::InvalidValueKind { .. })
		));
	}
	assert!(attributes.is_empty());
}

#[rstest]
fn test_component_accessor() {
	#[derive(Default)]
	struct Button {
		attributes: Option<AttributeSet>,
	}

	impl HasHtmlAttributes for Button {
		fn html_attributes_slot(&mut self) -> &mut Option<AttributeSet> {
			&mut self.attributes
		}
	}

	let mut button = Button::default();
	button
		.html_attributes([("type", "button")])
		.unwrap()
		.add_class("btn")
		.unwrap();

	assert_eq!(
		button.html_attributes([("type", "submit")]).unwrap().to_string(),
		r#"class="btn" type="button""#
	);
}
