//! # html-attributes-core
//!
//! In-memory model for building the attributes of an HTML element and rendering
//! them into a safely escaped attribute string.
//!
//! ## Pipeline
//!
//! - **Normalization**: values are text or lists of text ([`AttributeValue`]);
//!   anything else is rejected with [`AttributeError::InvalidValueKind`].
//! - **Merging**: [`AttributeSet::merge_attributes`] appends and deduplicates,
//!   keeping first-seen order.
//! - **Safety filtering**: attributes matching the unsafe-prefix policy
//!   ([`AttributePolicy`], `on*` by default) stay in storage but are not rendered
//!   unless allowed.
//! - **Rendering**: attributes are emitted sorted by name, with names and values
//!   escaped by an [`Escaper`](html_attributes_escape::Escaper).
//!
//! ## Example
//!
//! ```
//! use html_attributes_core::AttributeSet;
//! use serde_json::json;
//!
//! let mut attributes = AttributeSet::try_from(json!({
//!     "class": ["card"],
//!     "id": "card-1",
//!     "onclick": "alert(1)",
//! }))?;
//! attributes.add_class_if("card--wide", true)?;
//!
//! assert_eq!(
//!     attributes.to_string(),
//!     r#"class="card card--wide" id="card-1""#
//! );
//! assert_eq!(attributes.only("id").to_string(), r#"id="card-1""#);
//! # Ok::<(), html_attributes_core::AttributeError>(())
//! ```

pub mod accessor;
pub mod attributes;
pub mod class;
pub mod conditional;
pub mod error;
pub mod policy;
pub mod render;
pub mod value;

pub use accessor::HasHtmlAttributes;
pub use attributes::AttributeSet;
pub use class::CLASS_ATTRIBUTE;
pub use conditional::{Argument, Condition, Method, RunWhen};
pub use error::{AttributeError, Result};
pub use policy::{AttributePolicy, DEFAULT_UNSAFE_PREFIX};
pub use value::{AttributeNames, AttributeValue, IntoAttributeValue};
