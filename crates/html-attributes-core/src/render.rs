//! Attribute rendering
//!
//! Rendering is deterministic:
//!
//! 1. Unsafe attributes are dropped unless the policy allows them.
//! 2. The remaining attributes are visited in name order.
//! 3. Empty and `"0"` values are dropped, the rest are joined with a single
//!    space, and both the name and the joined value are escaped.
//! 4. The `name="value"` pieces are joined with a single space.
//!
//! An attribute whose value list is empty still renders as `name=""`.

use crate::attributes::AttributeSet;
use std::fmt;

impl AttributeSet {
	/// Renders the attributes for interpolation into an open start tag.
	///
	/// # Examples
	///
	/// ```
	/// use html_attributes_core::AttributeSet;
	///
	/// let mut attributes = AttributeSet::new();
	/// attributes.set_attribute("title", r#"Say "hi" <now>"#)?;
	/// attributes.set_attribute("id", "x")?;
	///
	/// assert_eq!(
	///     attributes.render(),
	///     r#"id="x" title="Say &quot;hi&quot; &lt;now&gt;""#
	/// );
	/// # Ok::<(), html_attributes_core::AttributeError>(())
	/// ```
	pub fn render(&self) -> String {
		let policy = self.policy();
		let mut rendered = Vec::with_capacity(self.len());
		let mut dropped = Vec::new();

		for (name, values) in self.iter() {
			if !policy.allow_unsafe && policy.is_unsafe(name) {
				dropped.push(name);
				continue;
			}
			rendered.push(self.render_attribute(name, values));
		}

		if !dropped.is_empty() {
			tracing::debug!(attributes = ?dropped, "Dropped unsafe attributes from rendered output");
		}

		rendered.join(" ")
	}

	fn render_attribute(&self, name: &str, values: &[String]) -> String {
		let value = values
			.iter()
			.filter(|value| !value.is_empty() && value.as_str() != "0")
			.map(String::as_str)
			.collect::<Vec<_>>()
			.join(" ");
		let escaper = self.escaper();

		format!(
			"{}=\"{}\"",
			escaper.escape_attribute_name(name),
			escaper.escape_attribute_value(&value)
		)
	}
}

impl fmt::Display for AttributeSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
