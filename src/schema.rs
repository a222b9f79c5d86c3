//! Editable prop surface descriptions
//!
//! A prop schema declares which fields of a section's configuration an
//! editing UI may expose, and with which widget. The schema is pure data:
//! the rendering pipeline never reads it, defaults live on the definition,
//! and the `required` flag is advisory metadata for the editor only.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A configuration record: prop key to JSON value
///
/// Used both for a definition's defaults and for per-instance overrides;
/// [`merge_props`](crate::renderer::merge_props) combines the two.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// Editing widget for a prop field
///
/// Serializes to the wire spellings the editing UI stores (`"text"`,
/// `"richtext"`, `"items"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropFieldType {
	/// Single-line text
	Text,
	/// Multi-line plain text
	Textarea,
	/// Rich text fragment
	RichText,
	/// Single image URL
	Image,
	/// List of image URLs
	Images,
	/// Color value
	Color,
	/// Single choice from an enumerated option list
	Select,
	/// Boolean toggle
	Toggle,
	/// URL
	Url,
	/// Numeric value
	Number,
	/// Repeating item list; the item shape is given by `item_fields`
	Items,
}

/// One option of a [`PropFieldType::Select`] field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
	/// Human label shown in the editor
	pub label: String,
	/// Stored value
	pub value: String,
}

impl SelectOption {
	/// Create an option from a label and its stored value
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

/// One editable attribute of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropField {
	/// Key into the configuration record; unique within one schema
	pub key: String,

	/// Human label shown in the editor
	pub label: String,

	/// Editing widget
	#[serde(rename = "type")]
	pub field_type: PropFieldType,

	/// Advisory flag for the editing UI; never enforced at render time
	#[serde(default)]
	pub required: bool,

	/// Placeholder text for the editing widget
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placeholder: Option<String>,

	/// Options for [`PropFieldType::Select`] fields
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<SelectOption>,

	/// Shape of each repeated item for [`PropFieldType::Items`] fields
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub item_fields: Vec<PropField>,
}

impl PropField {
	/// Create a field with the given key, label, and widget
	pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: PropFieldType) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			field_type,
			required: false,
			placeholder: None,
			options: Vec::new(),
			item_fields: Vec::new(),
		}
	}

	/// Mark the field as required (advisory, for the editing UI)
	#[must_use]
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the placeholder text
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Set the option list for a select field
	#[must_use]
	pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
		self.options = options.into_iter().collect();
		self
	}

	/// Set the item shape for a repeating item list
	#[must_use]
	pub fn with_item_fields(mut self, fields: Vec<PropField>) -> Self {
		self.item_fields = fields;
		self
	}
}

/// First key that appears more than once in a field list, searching
/// item shapes recursively. Keys are scoped per list: an item shape may
/// reuse a key from the outer schema.
pub(crate) fn find_duplicate_key(fields: &[PropField]) -> Option<String> {
	let mut seen = HashSet::new();
	for field in fields {
		if !seen.insert(field.key.as_str()) {
			return Some(field.key.clone());
		}
		if let Some(duplicate) = find_duplicate_key(&field.item_fields) {
			return Some(duplicate);
		}
	}
	None
}

/// Keys of required fields absent from a configuration record
///
/// Advisory helper for editing UIs that want to flag incomplete
/// configuration. The rendering pipeline never calls this: a rendering
/// function must tolerate missing values itself.
pub fn missing_required_keys(schema: &[PropField], props: &Props) -> Vec<String> {
	schema
		.iter()
		.filter(|field| field.required && !props.contains_key(&field.key))
		.map(|field| field.key.clone())
		.collect()
}
