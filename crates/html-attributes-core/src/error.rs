//! Error types for html-attributes-core

use std::convert::Infallible;
use thiserror::Error;

/// Error type for attribute set operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
	/// The supplied value was neither text nor a list of text
	#[error("Invalid attribute value: expected a string or a list of strings, got {kind}")]
	InvalidValueKind {
		/// Kind of the rejected value (e.g. `number`, `null`)
		kind: String,
	},

	/// Conditional dispatch could not resolve a base operation
	#[error("Call to undefined method AttributeSet::{0}()")]
	UnknownMethod(String),

	/// Dynamic dispatch forwarded the wrong arguments to a base operation
	#[error("Invalid arguments for {method}(): {reason}")]
	InvalidArguments {
		/// Base operation name
		method: &'static str,
		/// What was wrong with the forwarded arguments
		reason: String,
	},

	/// An attribute policy could not be loaded
	#[error("Invalid attribute policy: {0}")]
	Config(String),
}

impl AttributeError {
	pub(crate) fn invalid_kind(kind: impl Into<String>) -> Self {
		Self::InvalidValueKind { kind: kind.into() }
	}
}

impl From<Infallible> for AttributeError {
	fn from(never: Infallible) -> Self {
		match never {}
	}
}

impl From<toml::de::Error> for AttributeError {
	fn from(err: toml::de::Error) -> Self {
		Self::Config(err.to_string())
	}
}

/// Result type for attribute set operations
pub type Result<T> = std::result::Result<T, AttributeError>;
