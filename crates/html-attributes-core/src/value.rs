//! Attribute value normalization
//!
//! Every value handed to an attribute set is normalized into an [`AttributeValue`]
//! first: a single piece of text, or a list of text. Statically typed inputs
//! convert infallibly. Dynamic inputs (`serde_json::Value`, the shape template
//! contexts come in) convert fallibly, and anything that is not a string or an
//! array of strings is rejected with [`AttributeError::InvalidValueKind`].

use crate::error::{AttributeError, Result};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// A normalized attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
	/// A single piece of text, stored as a one-element list
	Text(String),
	/// A list of text, stored as given
	List(Vec<String>),
}

impl AttributeValue {
	/// Builds a value from anything with a text form.
	///
	/// # Examples
	///
	/// ```
	/// use html_attributes_core::AttributeValue;
	///
	/// assert_eq!(
	///     AttributeValue::display(&42),
	///     AttributeValue::Text("42".to_string())
	/// );
	/// ```
	pub fn display(value: &impl fmt::Display) -> Self {
		Self::Text(value.to_string())
	}

	/// Returns the value as the list that gets stored.
	pub fn into_values(self) -> Vec<String> {
		match self {
			Self::Text(text) => vec![text],
			Self::List(values) => values,
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<Cow<'_, str>> for AttributeValue {
	fn from(value: Cow<'_, str>) -> Self {
		Self::Text(value.into_owned())
	}
}

impl From<char> for AttributeValue {
	fn from(value: char) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<Vec<String>> for AttributeValue {
	fn from(values: Vec<String>) -> Self {
		Self::List(values)
	}
}

impl From<Vec<&str>> for AttributeValue {
	fn from(values: Vec<&str>) -> Self {
		Self::List(values.into_iter().map(str::to_string).collect())
	}
}

impl From<&[&str]> for AttributeValue {
	fn from(values: &[&str]) -> Self {
		Self::List(values.iter().map(|v| (*v).to_string()).collect())
	}
}

impl From<&[String]> for AttributeValue {
	fn from(values: &[String]) -> Self {
		Self::List(values.to_vec())
	}
}

impl<const N: usize> From<[&str; N]> for AttributeValue {
	fn from(values: [&str; N]) -> Self {
		Self::List(values.iter().map(|v| (*v).to_string()).collect())
	}
}

impl TryFrom<Value> for AttributeValue {
	type Error = AttributeError;

	fn try_from(value: Value) -> Result<Self> {
		match value {
			Value::String(text) => Ok(Self::Text(text)),
			Value::Array(items) => items
				.into_iter()
				.map(|item| match item {
					Value::String(text) => Ok(text),
					other => Err(AttributeError::invalid_kind(format!(
						"array containing {}",
						json_kind(&other)
					))),
				})
				.collect::<Result<Vec<_>>>()
				.map(Self::List),
			other => Err(AttributeError::invalid_kind(json_kind(&other))),
		}
	}
}

impl TryFrom<&Value> for AttributeValue {
	type Error = AttributeError;

	fn try_from(value: &Value) -> Result<Self> {
		Self::try_from(value.clone())
	}
}

/// Anything an attribute set accepts as a value.
///
/// Implemented for every type that converts into an [`AttributeValue`], either
/// infallibly (`&str`, `Vec<String>`, ...) or fallibly (`serde_json::Value`).
pub trait IntoAttributeValue {
	/// Performs the conversion.
	fn into_attribute_value(self) -> Result<AttributeValue>;
}

impl<T> IntoAttributeValue for T
where
	T: TryInto<AttributeValue>,
	T::Error: Into<AttributeError>,
{
	fn into_attribute_value(self) -> Result<AttributeValue> {
		self.try_into().map_err(Into::into)
	}
}

/// Normalizes any supported input into the list that gets stored.
pub(crate) fn normalize(value: impl IntoAttributeValue) -> Result<Vec<String>> {
	Ok(value.into_attribute_value()?.into_values())
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// One attribute name or a list of them, as accepted by `only` and `without`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeNames(Vec<String>);

impl AttributeNames {
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}
}

impl IntoIterator for AttributeNames {
	type Item = String;
	type IntoIter = std::vec::IntoIter<String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl From<&str> for AttributeNames {
	fn from(name: &str) -> Self {
		Self(vec![name.to_string()])
	}
}

impl From<String> for AttributeNames {
	fn from(name: String) -> Self {
		Self(vec![name])
	}
}

impl From<&String> for AttributeNames {
	fn from(name: &String) -> Self {
		Self(vec![name.clone()])
	}
}

impl From<Vec<String>> for AttributeNames {
	fn from(names: Vec<String>) -> Self {
		Self(names)
	}
}

impl From<Vec<&str>> for AttributeNames {
	fn from(names: Vec<&str>) -> Self {
		Self(names.into_iter().map(str::to_string).collect())
	}
}

impl From<&[&str]> for AttributeNames {
	fn from(names: &[&str]) -> Self {
		Self(names.iter().map(|n| (*n).to_string()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for AttributeNames {
	fn from(names: [&str; N]) -> Self {
		Self(names.iter().map(|n| (*n).to_string()).collect())
	}
}
