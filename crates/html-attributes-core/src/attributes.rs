//! The attribute set
//!
//! [`AttributeSet`] owns a mapping of attribute name to an ordered list of
//! values. Callers mutate it in place, derive subsets from it, and finally render
//! it into the text that goes inside an HTML start tag.
//!
//! ```
//! use html_attributes_core::AttributeSet;
//!
//! let mut attributes = AttributeSet::new();
//! attributes
//!     .set_attribute("id", "card-1")?
//!     .add_class(["card", "card--wide"])?
//!     .set_attribute("onclick", "track()")?;
//!
//! // Event handlers are dropped unless explicitly allowed.
//! assert_eq!(attributes.to_string(), r#"class="card card--wide" id="card-1""#);
//! # Ok::<(), html_attributes_core::AttributeError>(())
//! ```

use crate::error::{AttributeError, Result};
use crate::policy::AttributePolicy;
use crate::value::{AttributeNames, IntoAttributeValue, json_kind, normalize};
use html_attributes_escape::{Escaper, HtmlEscaper};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// A set of HTML attributes ready to be rendered into a start tag.
///
/// Names are stored verbatim (never lowercased). Rendering always emits
/// attributes sorted by name, so insertion order of distinct names never
/// changes the output.
#[derive(Debug, Clone)]
pub struct AttributeSet {
	values: BTreeMap<String, Vec<String>>,
	policy: AttributePolicy,
	escaper: Arc<dyn Escaper>,
}

impl Default for AttributeSet {
	fn default() -> Self {
		Self::with_policy(AttributePolicy::default())
	}
}

impl PartialEq for AttributeSet {
	fn eq(&self, other: &Self) -> bool {
		self.values == other.values && self.policy == other.policy
	}
}

impl AttributeSet {
	/// Creates an empty set with the default policy.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty set governed by `policy`.
	pub fn with_policy(policy: AttributePolicy) -> Self {
		Self {
			values: BTreeMap::new(),
			policy,
			escaper: Arc::new(HtmlEscaper),
		}
	}

	/// Replaces the escaper used when rendering.
	pub fn with_escaper(mut self, escaper: impl Escaper + 'static) -> Self {
		self.escaper = Arc::new(escaper);
		self
	}

	/// Creates a set from name/value pairs.
	///
	/// Pairs are applied in order with [`set_attribute`](Self::set_attribute), so a
	/// repeated name keeps its last value.
	///
	/// # Errors
	///
	/// Returns [`AttributeError::InvalidValueKind`] for the first value that is
	/// neither text nor a list of text.
	///
	/// # Examples
	///
	/// ```
	/// use html_attributes_core::{AttributeSet, AttributeValue};
	///
	/// let attributes = AttributeSet::from_pairs(
	///     [
	///         ("class", AttributeValue::from(["card"])),
	///         ("disabled", AttributeValue::from("disabled")),
	///     ],
	///     false,
	/// )?;
	/// assert_eq!(attributes.to_string(), r#"class="card" disabled="disabled""#);
	/// # Ok::<(), html_attributes_core::AttributeError>(())
	/// ```
	pub fn from_pairs<I, K, V>(pairs: I, allow_unsafe: bool) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: IntoAttributeValue,
	{
		let mut set = Self::with_policy(AttributePolicy {
			allow_unsafe,
			..AttributePolicy::default()
		});
		for (name, value) in pairs {
			set.set_attribute(name, value)?;
		}
		Ok(set)
	}

	/// Sets an attribute, replacing any previous values.
	///
	/// Text becomes a one-element list; a list is stored as given.
	pub fn set_attribute(
		&mut self,
		name: impl Into<String>,
		value: impl IntoAttributeValue,
	) -> Result<&mut Self> {
		let values = normalize(value)?;
		self.values.insert(name.into(), values);
		Ok(self)
	}

	/// Adds values to an attribute, keeping the existing ones.
	///
	/// The combined list keeps the first occurrence of each value, so merging
	/// never introduces duplicates.
	pub fn merge_attributes(
		&mut self,
		name: impl Into<String>,
		value: impl IntoAttributeValue,
	) -> Result<&mut Self> {
		let incoming = normalize(value)?;
		let entry = self.values.entry(name.into()).or_default();
		entry.extend(incoming);

		let mut seen = HashSet::with_capacity(entry.len());
		entry.retain(|value| seen.insert(value.clone()));
		Ok(self)
	}

	/// Alias for [`merge_attributes`](Self::merge_attributes).
	pub fn merge(
		&mut self,
		name: impl Into<String>,
		value: impl IntoAttributeValue,
	) -> Result<&mut Self> {
		self.merge_attributes(name, value)
	}

	/// Removes an attribute. Removing a missing attribute is a no-op.
	pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
		self.values.remove(name);
		self
	}

	/// Returns the stored values of an attribute.
	pub fn get(&self, name: &str) -> Option<&[String]> {
		self.values.get(name).map(Vec::as_slice)
	}

	pub(crate) fn values_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
		self.values.get_mut(name)
	}

	/// Whether an attribute is set (even with an empty value list).
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// All stored attributes, including unsafe ones.
	pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
		&self.values
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.values
			.iter()
			.map(|(name, values)| (name.as_str(), values.as_slice()))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Returns a new set holding only the named attributes that exist here.
	///
	/// The new set shares this set's policy and escaper; its value lists are
	/// copies.
	pub fn only(&self, names: impl Into<AttributeNames>) -> Self {
		let mut subset = self.derive();
		for name in names.into() {
			if let Some(values) = self.values.get(&name) {
				subset.values.insert(name, values.clone());
			}
		}
		subset
	}

	/// Returns a copy of this set without the named attributes.
	pub fn without(&self, names: impl Into<AttributeNames>) -> Self {
		let mut subset = self.derive();
		subset.values = self.values.clone();
		for name in names.into() {
			subset.values.remove(&name);
		}
		subset
	}

	fn derive(&self) -> Self {
		Self {
			values: BTreeMap::new(),
			policy: self.policy.clone(),
			escaper: Arc::clone(&self.escaper),
		}
	}

	/// Whether `name` is considered unsafe by this set's policy.
	pub fn is_unsafe(&self, name: &str) -> bool {
		self.policy.is_unsafe(name)
	}

	/// Replaces the unsafe prefix policy wholesale.
	pub fn set_unsafe_prefixes<I, S>(&mut self, prefixes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.policy.unsafe_prefixes = prefixes.into_iter().map(Into::into).collect();
		self
	}

	/// Whether unsafe attributes are included in rendered output.
	///
	/// Storage is unaffected either way.
	pub fn allow_unsafe(&mut self, allow: bool) -> &mut Self {
		self.policy.allow_unsafe = allow;
		self
	}

	pub fn policy(&self) -> &AttributePolicy {
		&self.policy
	}

	pub(crate) fn escaper(&self) -> &dyn Escaper {
		self.escaper.as_ref()
	}
}

impl TryFrom<Value> for AttributeSet {
	type Error = AttributeError;

	/// Builds a set from a JSON object of attributes, as template contexts
	/// provide them.
	fn try_from(value: Value) -> Result<Self> {
		match value {
			Value::Object(map) => Self::from_pairs(map, false),
			other => Err(AttributeError::invalid_kind(format!(
				"{} where an object of attributes was expected",
				json_kind(&other)
			))),
		}
	}
}
