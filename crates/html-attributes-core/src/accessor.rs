//! Lazily created attribute sets for component types

use crate::attributes::AttributeSet;
use crate::error::Result;
use crate::value::IntoAttributeValue;

/// Gives a type its own attribute set, created on first access.
///
/// Implementors only provide storage for the set; the set itself is built the
/// first time [`html_attributes`](HasHtmlAttributes::html_attributes) is called.
///
/// # Examples
///
/// ```
/// use html_attributes_core::{AttributeSet, HasHtmlAttributes};
///
/// #[derive(Default)]
/// struct Card {
///     attributes: Option<AttributeSet>,
/// }
///
/// impl HasHtmlAttributes for Card {
///     fn html_attributes_slot(&mut self) -> &mut Option<AttributeSet> {
///         &mut self.attributes
///     }
/// }
///
/// let mut card = Card::default();
/// card.html_attributes([("class", "card")])?.add_class("card--wide")?;
///
/// // Later calls return the same set and ignore their initial pairs.
/// let attributes = card.html_attributes([("id", "ignored")])?;
/// assert_eq!(attributes.to_string(), r#"class="card card--wide""#);
/// # Ok::<(), html_attributes_core::AttributeError>(())
/// ```
pub trait HasHtmlAttributes {
	/// Storage for the lazily created set.
	fn html_attributes_slot(&mut self) -> &mut Option<AttributeSet>;

	/// Returns the attribute set, creating it from `initial` on first access.
	fn html_attributes<I, K, V>(&mut self, initial: I) -> Result<&mut AttributeSet>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: IntoAttributeValue,
	{
		let slot = self.html_attributes_slot();
		if slot.is_none() {
			*slot = Some(AttributeSet::from_pairs(initial, false)?);
		}
		Ok(slot.get_or_insert_with(AttributeSet::new))
	}
}
