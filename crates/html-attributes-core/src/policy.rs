//! Unsafe-attribute policy
//!
//! Attributes whose names start with one of the configured prefixes (by default
//! `on`, which covers inline event handlers such as `onclick` and `onload`) are
//! considered unsafe and are left out of rendered output unless explicitly
//! allowed. The policy only affects rendering, never storage.
//!
//! Policies can be loaded from TOML settings:
//!
//! ```toml
//! allow_unsafe = false
//! unsafe_prefixes = ["on", "formaction"]
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Prefix that marks inline event handler attributes.
pub const DEFAULT_UNSAFE_PREFIX: &str = "on";

/// Rendering policy shared by an attribute set and the sets derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributePolicy {
	/// Whether unsafe attributes are included in rendered output
	pub allow_unsafe: bool,
	/// Name prefixes that mark an attribute as unsafe
	pub unsafe_prefixes: BTreeSet<String>,
}

impl Default for AttributePolicy {
	fn default() -> Self {
		Self {
			allow_unsafe: false,
			unsafe_prefixes: BTreeSet::from([DEFAULT_UNSAFE_PREFIX.to_string()]),
		}
	}
}

impl AttributePolicy {
	/// Parses a policy from a TOML document.
	///
	/// Missing keys fall back to [`AttributePolicy::default`].
	///
	/// # Examples
	///
	/// ```
	/// use html_attributes_core::AttributePolicy;
	///
	/// let policy = AttributePolicy::from_toml_str("allow_unsafe = true").unwrap();
	/// assert!(policy.allow_unsafe);
	/// assert!(policy.is_unsafe("onclick"));
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let policy: Self = toml::from_str(source)?;
		tracing::debug!(
			allow_unsafe = policy.allow_unsafe,
			prefixes = ?policy.unsafe_prefixes,
			"Loaded attribute policy"
		);
		Ok(policy)
	}

	/// Returns `true` if `name` starts with any configured unsafe prefix.
	///
	/// Names are compared verbatim, so `ONCLICK` is not caught by the default `on`
	/// prefix.
	pub fn is_unsafe(&self, name: &str) -> bool {
		self.unsafe_prefixes
			.iter()
			.any(|prefix| name.starts_with(prefix.as_str()))
	}
}
