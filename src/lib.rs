//! # html-attributes
//!
//! Build the attributes of an HTML element, merge and filter them, and render
//! them into an escaped string ready to drop into a start tag.
//!
//! ## Crates
//!
//! - [`core`]: [`AttributeSet`], value normalization, the unsafe-prefix policy
//!   and conditional operations
//! - [`escape`]: the [`Escaper`] capability and its default implementation
//!
//! ## Quick Example
//!
//! ```
//! use html_attributes::prelude::*;
//!
//! let mut attributes = AttributeSet::from_pairs(
//!     [
//!         ("class", AttributeValue::from(["card"])),
//!         ("id", AttributeValue::from("card-1")),
//!     ],
//!     false,
//! )?;
//!
//! let is_wide = true;
//! attributes
//!     .add_class_if("card--wide", is_wide)?
//!     .set_attribute("onclick", "alert(1)")?;
//!
//! assert_eq!(
//!     format!("<div {attributes}>"),
//!     r#"<div class="card card--wide" id="card-1">"#
//! );
//! # Ok::<(), html_attributes::AttributeError>(())
//! ```

pub mod core;
pub mod escape;

pub use html_attributes_core::{
	Argument, AttributeError, AttributeNames, AttributePolicy, AttributeSet, AttributeValue,
	Condition, HasHtmlAttributes, IntoAttributeValue, Result,
};
pub use html_attributes_escape::{Escaper, HtmlEscaper};

/// Commonly used types
pub mod prelude {
	pub use crate::{
		Argument, AttributeError, AttributeNames, AttributePolicy, AttributeSet, AttributeValue,
		Condition, Escaper, HasHtmlAttributes, HtmlEscaper, IntoAttributeValue,
	};
}
