//! CSS class helpers
//!
//! `class` is stored like any other multi-value attribute; these helpers treat
//! its value list as a list of class tokens.

use crate::attributes::AttributeSet;
use crate::error::Result;
use crate::value::IntoAttributeValue;

/// Name of the attribute the class helpers operate on.
pub const CLASS_ATTRIBUTE: &str = "class";

impl AttributeSet {
	/// Adds one or more classes, skipping ones already present.
	pub fn add_class(&mut self, class: impl IntoAttributeValue) -> Result<&mut Self> {
		self.merge_attributes(CLASS_ATTRIBUTE, class)
	}

	/// Removes the first occurrence of `class`.
	///
	/// Removing the last class removes the `class` attribute itself, so it is
	/// never rendered as `class=""`. Removing an absent class, or removing when
	/// no `class` attribute was ever set, does nothing.
	pub fn remove_class(&mut self, class: &str) -> &mut Self {
		let Some(classes) = self.values_mut(CLASS_ATTRIBUTE) else {
			return self;
		};
		if let Some(index) = classes.iter().position(|existing| existing == class) {
			classes.remove(index);
			if classes.is_empty() {
				self.remove_attribute(CLASS_ATTRIBUTE);
			}
		}
		self
	}

	/// Whether `class` is present (exact, case-sensitive match).
	pub fn has_class(&self, class: &str) -> bool {
		self.get(CLASS_ATTRIBUTE)
			.is_some_and(|classes| classes.iter().any(|existing| existing == class))
	}
}
