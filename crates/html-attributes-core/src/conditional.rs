//! Conditional variants of the mutation operations
//!
//! Every mutation has an `If` form that only runs when a condition holds and an
//! `Unless` form that only runs when it does not. Both forms always hand the set
//! back, whether or not the operation ran.
//!
//! Two entry points share the same suffix table:
//!
//! - statically typed helpers such as [`AttributeSet::add_class_if`];
//! - name-based dispatch through [`AttributeSet::call`], for template layers
//!   that only know the method name at runtime (`"addClassIf"`,
//!   `"set_attribute_unless"`, ...).
//!
//! ```
//! use html_attributes_core::{AttributeSet, Condition};
//!
//! let row = 3;
//! let mut attributes = AttributeSet::new();
//! attributes
//!     .add_class_if("even", row % 2 == 0)?
//!     .add_class_unless("even", Condition::lazy(move || row % 2 == 0))?;
//!
//! assert!(!attributes.has_class("even"));
//! # Ok::<(), html_attributes_core::AttributeError>(())
//! ```

use crate::attributes::AttributeSet;
use crate::error::{AttributeError, Result};
use crate::value::{AttributeValue, IntoAttributeValue};
use serde_json::Value;
use std::fmt;

/// When a conditional call runs its base operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunWhen {
	/// Run when the condition holds (`If`)
	Truthy,
	/// Run when the condition does not hold (`Unless`)
	Falsy,
}

impl RunWhen {
	/// Evaluates `condition` and decides whether to run.
	pub fn should_run(self, condition: Condition) -> bool {
		let passed = condition.evaluate();
		match self {
			Self::Truthy => passed,
			Self::Falsy => !passed,
		}
	}
}

/// Recognized method-name suffixes.
pub const CONDITIONAL_SUFFIXES: &[(&str, RunWhen)] = &[
	("If", RunWhen::Truthy),
	("Unless", RunWhen::Falsy),
	("_if", RunWhen::Truthy),
	("_unless", RunWhen::Falsy),
];

/// Returns the first of `suffixes` that `name` ends with.
///
/// # Examples
///
/// ```
/// use html_attributes_core::conditional::extract_suffix;
///
/// assert_eq!(extract_suffix("MyTestValue", &["Value", "Missing"]), Some("Value"));
/// assert_eq!(extract_suffix("MyTestValue", &["Missing"]), None);
/// ```
pub fn extract_suffix<'a>(name: &str, suffixes: &[&'a str]) -> Option<&'a str> {
	suffixes
		.iter()
		.copied()
		.find(|suffix| !suffix.is_empty() && name.ends_with(suffix))
}

/// Condition guarding a conditional call.
pub enum Condition {
	/// A plain boolean
	Value(bool),
	/// A thunk, evaluated only when the call is dispatched
	Lazy(Box<dyn FnOnce() -> bool>),
}

impl Condition {
	/// Wraps a zero-argument callable whose result decides the call.
	pub fn lazy(thunk: impl FnOnce() -> bool + 'static) -> Self {
		Self::Lazy(Box::new(thunk))
	}

	pub fn evaluate(self) -> bool {
		match self {
			Self::Value(value) => value,
			Self::Lazy(thunk) => thunk(),
		}
	}
}

impl From<bool> for Condition {
	fn from(value: bool) -> Self {
		Self::Value(value)
	}
}

impl fmt::Debug for Condition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
			Self::Lazy(_) => f.write_str("Lazy(..)"),
		}
	}
}

/// Base operations reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	SetAttribute,
	MergeAttributes,
	Merge,
	RemoveAttribute,
	AddClass,
	RemoveClass,
	SetUnsafePrefixes,
	AllowUnsafe,
}

impl Method {
	/// Looks up a base operation by its camelCase or snake_case name.
	pub fn from_name(name: &str) -> Option<Self> {
		let method = match name {
			"setAttribute" | "set_attribute" => Self::SetAttribute,
			"mergeAttributes" | "merge_attributes" => Self::MergeAttributes,
			"merge" => Self::Merge,
			"removeAttribute" | "remove_attribute" => Self::RemoveAttribute,
			"addClass" | "add_class" => Self::AddClass,
			"removeClass" | "remove_class" => Self::RemoveClass,
			"setUnsafePrefixes" | "set_unsafe_prefixes" => Self::SetUnsafePrefixes,
			"allowUnsafe" | "allow_unsafe" => Self::AllowUnsafe,
			_ => return None,
		};
		Some(method)
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::SetAttribute => "setAttribute",
			Self::MergeAttributes => "mergeAttributes",
			Self::Merge => "merge",
			Self::RemoveAttribute => "removeAttribute",
			Self::AddClass => "addClass",
			Self::RemoveClass => "removeClass",
			Self::SetUnsafePrefixes => "setUnsafePrefixes",
			Self::AllowUnsafe => "allowUnsafe",
		}
	}

	fn invoke(self, set: &mut AttributeSet, args: Vec<Argument>) -> Result<()> {
		let mut args = Arguments::new(self, args);
		match self {
			Self::SetAttribute | Self::MergeAttributes | Self::Merge => {
				let (name, value) = args.exactly_two()?;
				let name = args.text(name)?;
				let value = args.value(value)?;
				if self == Self::SetAttribute {
					set.set_attribute(name, value)?;
				} else {
					set.merge_attributes(name, value)?;
				}
			}
			Self::RemoveAttribute => {
				let name = args.exactly_one()?;
				set.remove_attribute(&args.text(name)?);
			}
			Self::AddClass => {
				let class = args.exactly_one()?;
				set.add_class(args.value(class)?)?;
			}
			Self::RemoveClass => {
				let class = args.exactly_one()?;
				set.remove_class(&args.text(class)?);
			}
			Self::SetUnsafePrefixes => {
				let prefixes = args.exactly_one()?;
				set.set_unsafe_prefixes(args.value(prefixes)?.into_values());
			}
			Self::AllowUnsafe => {
				let allow = match args.at_most_one()? {
					None => true,
					Some(Argument::Value(Value::Bool(allow))) => allow,
					Some(other) => return Err(args.invalid(format!("expected a boolean, got {other:?}"))),
				};
				set.allow_unsafe(allow);
			}
		}
		Ok(())
	}
}

/// A positional argument of a name-based conditional call.
pub enum Argument {
	/// Any JSON-like value (names, attribute values, boolean conditions)
	Value(Value),
	/// A zero-argument callable, only meaningful as the trailing condition
	Callable(Box<dyn FnOnce() -> bool>),
}

impl Argument {
	pub fn callable(thunk: impl FnOnce() -> bool + 'static) -> Self {
		Self::Callable(Box::new(thunk))
	}

	/// Turns the trailing argument into a condition.
	///
	/// Values follow template truthiness: `null`, `false`, `0`, `""`, `"0"` and
	/// empty arrays or objects are falsy.
	fn into_condition(self) -> Condition {
		match self {
			Self::Callable(thunk) => Condition::Lazy(thunk),
			Self::Value(value) => Condition::Value(is_truthy(&value)),
		}
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(value) => *value,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty() && text != "0",
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}

impl From<Value> for Argument {
	fn from(value: Value) -> Self {
		Self::Value(value)
	}
}

impl From<&str> for Argument {
	fn from(value: &str) -> Self {
		Self::Value(Value::from(value))
	}
}

impl From<String> for Argument {
	fn from(value: String) -> Self {
		Self::Value(Value::from(value))
	}
}

impl From<bool> for Argument {
	fn from(value: bool) -> Self {
		Self::Value(Value::from(value))
	}
}

impl From<Vec<&str>> for Argument {
	fn from(values: Vec<&str>) -> Self {
		Self::Value(Value::from(values))
	}
}

impl fmt::Debug for Argument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(value) => write!(f, "{value}"),
			Self::Callable(_) => f.write_str("<callable>"),
		}
	}
}

/// Arity and type checks for forwarded arguments.
struct Arguments {
	method: Method,
	args: Vec<Argument>,
}

impl Arguments {
	fn new(method: Method, args: Vec<Argument>) -> Self {
		Self { method, args }
	}

	fn invalid(&self, reason: String) -> AttributeError {
		AttributeError::InvalidArguments {
			method: self.method.name(),
			reason,
		}
	}

	fn arity(&self, expected: usize) -> AttributeError {
		self.invalid(format!(
			"expected {expected} argument{}, got {}",
			if expected == 1 { "" } else { "s" },
			self.args.len()
		))
	}

	fn exactly_one(&mut self) -> Result<Argument> {
		if self.args.len() != 1 {
			return Err(self.arity(1));
		}
		self.args.pop().ok_or_else(|| self.arity(1))
	}

	fn exactly_two(&mut self) -> Result<(Argument, Argument)> {
		if self.args.len() != 2 {
			return Err(self.arity(2));
		}
		let second = self.args.pop().ok_or_else(|| self.arity(2))?;
		let first = self.args.pop().ok_or_else(|| self.arity(2))?;
		Ok((first, second))
	}

	fn at_most_one(&mut self) -> Result<Option<Argument>> {
		if self.args.len() > 1 {
			return Err(self.invalid(format!(
				"expected at most 1 argument, got {}",
				self.args.len()
			)));
		}
		Ok(self.args.pop())
	}

	fn text(&self, arg: Argument) -> Result<String> {
		match arg {
			Argument::Value(Value::String(text)) => Ok(text),
			other => Err(self.invalid(format!("expected a string, got {other:?}"))),
		}
	}

	fn value(&self, arg: Argument) -> Result<AttributeValue> {
		match arg {
			Argument::Value(value) => value.into_attribute_value(),
			Argument::Callable(_) => {
				Err(self.invalid("expected a value, got a callable".to_string()))
			}
		}
	}
}

macro_rules! conditional_variants {
	($(
		$(#[$meta:meta])*
		$if_fn:ident / $unless_fn:ident ($($arg:ident : $ty:ty),*) => |$set:ident| $body:expr;
	)*) => {
		impl AttributeSet {
			$(
				$(#[$meta])*
				pub fn $if_fn(
					&mut self,
					$($arg: $ty,)*
					condition: impl Into<Condition>,
				) -> Result<&mut Self> {
					self.run_when(RunWhen::Truthy, condition.into(), stringify!($if_fn), |$set| $body)
				}

				$(#[$meta])*
				pub fn $unless_fn(
					&mut self,
					$($arg: $ty,)*
					condition: impl Into<Condition>,
				) -> Result<&mut Self> {
					self.run_when(RunWhen::Falsy, condition.into(), stringify!($unless_fn), |$set| $body)
				}
			)*
		}
	};
}

conditional_variants! {
	/// Conditional [`set_attribute`](AttributeSet::set_attribute).
	set_attribute_if / set_attribute_unless (name: impl Into<String>, value: impl IntoAttributeValue)
		=> |set| set.set_attribute(name, value).map(drop);
	/// Conditional [`merge_attributes`](AttributeSet::merge_attributes).
	merge_attributes_if / merge_attributes_unless (name: impl Into<String>, value: impl IntoAttributeValue)
		=> |set| set.merge_attributes(name, value).map(drop);
	/// Conditional [`remove_attribute`](AttributeSet::remove_attribute).
	remove_attribute_if / remove_attribute_unless (name: &str)
		=> |set| { set.remove_attribute(name); Ok(()) };
	/// Conditional [`add_class`](AttributeSet::add_class).
	add_class_if / add_class_unless (class: impl IntoAttributeValue)
		=> |set| set.add_class(class).map(drop);
	/// Conditional [`remove_class`](AttributeSet::remove_class).
	remove_class_if / remove_class_unless (class: &str)
		=> |set| { set.remove_class(class); Ok(()) };
}

impl AttributeSet {
	fn run_when(
		&mut self,
		when: RunWhen,
		condition: Condition,
		method: &str,
		operation: impl FnOnce(&mut Self) -> Result<()>,
	) -> Result<&mut Self> {
		if when.should_run(condition) {
			operation(self)?;
		} else {
			tracing::trace!(method, "Skipped conditional attribute operation");
		}
		Ok(self)
	}

	/// Calls a conditional operation by name.
	///
	/// `name` is a base operation name followed by `If` or `Unless` (or `_if` /
	/// `_unless`). The last element of `args` is the condition; the rest are
	/// forwarded to the base operation. A missing condition counts as falsy.
	///
	/// # Errors
	///
	/// - [`AttributeError::UnknownMethod`] if `name` has no recognized suffix or
	///   names no base operation.
	/// - [`AttributeError::InvalidArguments`] if the forwarded arguments do not
	///   fit the base operation (only checked when the operation runs).
	/// - Any error of the base operation itself.
	///
	/// # Examples
	///
	/// ```
	/// use html_attributes_core::{Argument, AttributeSet};
	///
	/// let mut attributes = AttributeSet::new();
	/// attributes.call("setAttributeIf", vec!["id".into(), "card".into(), true.into()])?;
	/// attributes.call("setAttributeUnless", vec!["title".into(), "x".into(), Argument::callable(|| true)])?;
	///
	/// assert_eq!(attributes.to_string(), r#"id="card""#);
	/// # Ok::<(), html_attributes_core::AttributeError>(())
	/// ```
	pub fn call(&mut self, name: &str, mut args: Vec<Argument>) -> Result<&mut Self> {
		let Some((method, when)) = resolve(name) else {
			tracing::warn!(method = name, "Call to undefined attribute method");
			return Err(AttributeError::UnknownMethod(name.to_string()));
		};
		let condition = args
			.pop()
			.map_or(Condition::Value(false), Argument::into_condition);

		self.run_when(when, condition, name, |set| method.invoke(set, args))
	}
}

fn resolve(name: &str) -> Option<(Method, RunWhen)> {
	let suffixes: Vec<&str> = CONDITIONAL_SUFFIXES.iter().map(|(suffix, _)| *suffix).collect();
	let suffix = extract_suffix(name, &suffixes)?;
	let (_, when) = CONDITIONAL_SUFFIXES
		.iter()
		.find(|(candidate, _)| *candidate == suffix)?;
	let base = &name[..name.len() - suffix.len()];
	Method::from_name(base).map(|method| (method, *when))
}
