//! HTML escaping used by attribute rendering
//!
//! This module provides access to html-attributes-escape.

pub use html_attributes_escape::*;
