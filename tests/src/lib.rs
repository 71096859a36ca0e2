//! Shared fixtures for the html-attributes integration suites.

use html_attributes::prelude::*;
use rstest::fixture;
use serde_json::json;

/// Fixture providing a card with three attributes
#[fixture]
pub fn card() -> AttributeSet {
	AttributeSet::try_from(json!({
		"class": ["one", "two", "three"],
		"id": "card",
		"for": "carditem",
	}))
	.expect("Failed to build card attributes")
}

/// Runs a name-based `id="card"` call on a fresh set and renders the result.
pub fn render_after(name: &str, condition: Argument) -> String {
	let mut attributes = AttributeSet::new();
	attributes
		.call(name, vec!["id".into(), "card".into(), condition])
		.expect("Conditional call failed");
	attributes.to_string()
}
