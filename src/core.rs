//! Attribute storage, merging, safety policy and rendering
//!
//! This module provides access to html-attributes-core.
//!
//! ## Example
//!
//! ```
//! use html_attributes::core::{AttributePolicy, AttributeSet};
//!
//! let policy = AttributePolicy::from_toml_str(r#"unsafe_prefixes = ["on", "formaction"]"#)?;
//! let mut attributes = AttributeSet::with_policy(policy);
//! attributes
//!     .set_attribute("formaction", "/delete")?
//!     .set_attribute("type", "submit")?;
//!
//! assert_eq!(attributes.to_string(), r#"type="submit""#);
//! # Ok::<(), html_attributes::AttributeError>(())
//! ```

pub use html_attributes_core::*;
