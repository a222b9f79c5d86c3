//! Per-page section placements
//!
//! A section instance is one placement of a section definition on a
//! specific page. Instances are created and mutated by the page-editing
//! collaborator; the composition pipeline only reads them.

use crate::definition::SectionDefinition;
use crate::schema::Props;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// One placement of a section definition on a page
///
/// Serializes with the page-storage wire names (`sectionId`,
/// `customClasses`), so persisted pages load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstance {
	/// Instance id, unique within the containing page
	pub id: String,

	/// Referenced section definition id
	pub section_id: String,

	/// Configuration overrides applied on top of the definition defaults
	#[serde(default)]
	pub props: Props,

	/// Free-form extra classes applied by the chrome wrapper
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub custom_classes: Option<String>,
}

impl SectionInstance {
	/// New instance of the given section, with a fresh id and no overrides
	pub fn new(section_id: impl Into<String>) -> Self {
		Self {
			id: new_instance_id(),
			section_id: section_id.into(),
			props: Props::new(),
			custom_classes: None,
		}
	}

	/// New instance seeded with a copy of the definition's default props
	pub fn from_definition(definition: &SectionDefinition) -> Self {
		Self {
			id: new_instance_id(),
			section_id: definition.id.clone(),
			props: definition.default_props.clone(),
			custom_classes: None,
		}
	}

	/// Replace the override record from a JSON object
	///
	/// Non-object values are treated as an empty record.
	#[must_use]
	pub fn with_props(mut self, props: JsonValue) -> Self {
		self.props = props.as_object().cloned().unwrap_or_default();
		self
	}

	/// Set the custom classes
	#[must_use]
	pub fn with_custom_classes(mut self, classes: impl Into<String>) -> Self {
		self.custom_classes = Some(classes.into());
		self
	}
}

/// Fresh id for a new section instance
pub(crate) fn new_instance_id() -> String {
	Uuid::new_v4().to_string()
}
