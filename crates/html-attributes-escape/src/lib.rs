//! HTML escaping for attribute output
//!
//! Attribute sets never write raw text into markup. Every name and every joined
//! value goes through an [`Escaper`] first. [`HtmlEscaper`] is the default and
//! delegates to the `html-escape` crate.
//!
//! Values sit between double quotes, so only the characters that can end the
//! quoted context are escaped:
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//!
//! Names are never quoted. Apart from ASCII letters, digits and `-_.:`, every
//! ASCII character is escaped with the unquoted-attribute encoder, so
//! whitespace, `=`, quotes and `/` cannot end the name.

use std::borrow::Cow;
use std::fmt;

/// Escaping capability consumed by attribute rendering.
///
/// Output of [`escape_attribute_value`](Self::escape_attribute_value) must be
/// safe between the double quotes of an attribute. Output of
/// [`escape_attribute_name`](Self::escape_attribute_name) must be a single
/// attribute name, even though it is not quoted.
pub trait Escaper: fmt::Debug + Send + Sync {
	/// Escapes a (space-joined) attribute value.
	fn escape_attribute_value<'a>(&self, value: &'a str) -> Cow<'a, str>;

	/// Escapes an attribute name.
	fn escape_attribute_name<'a>(&self, name: &'a str) -> Cow<'a, str>;
}

/// Default escaper backed by `html-escape`.
///
/// # Examples
///
/// ```
/// use html_attributes_escape::{Escaper, HtmlEscaper};
///
/// let escaper = HtmlEscaper;
/// assert_eq!(
///     escaper.escape_attribute_value(r#"alert("hi") <b>"#),
///     "alert(&quot;hi&quot;) &lt;b&gt;"
/// );
/// assert_eq!(escaper.escape_attribute_name("data-id"), "data-id");
/// assert_eq!(escaper.escape_attribute_name("x onclick"), "x&#x20;onclick");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
	fn escape_attribute_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
		html_escape::encode_double_quoted_attribute(value)
	}

	fn escape_attribute_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
		if name.chars().all(is_plain_name_char) {
			return Cow::Borrowed(name);
		}

		let mut escaped = String::with_capacity(name.len() * 2);
		let mut rest = name;
		while let Some(start) = rest.find(|c: char| !is_plain_name_char(c)) {
			escaped.push_str(&rest[..start]);
			let tail = &rest[start..];
			let end = tail.find(is_plain_name_char).unwrap_or(tail.len());
			escaped.push_str(&html_escape::encode_unquoted_attribute(&tail[..end]));
			rest = &tail[end..];
		}
		escaped.push_str(rest);
		Cow::Owned(escaped)
	}
}

// `encode_unquoted_attribute` would also escape the punctuation found in
// ordinary names such as `aria-label` or `xml:lang`.
fn is_plain_name_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')
}
