//! Section definitions and the rendering capability
//!
//! A section definition is one registered visual variant: stable identity,
//! catalogue metadata, the editable prop surface, default configuration,
//! and the rendering function that turns a merged configuration record
//! into markup.

use crate::category::SectionCategory;
use crate::error::{SectionError, SectionResult};
use crate::schema::{self, PropField, Props};
use serde_json::Value as JsonValue;
use std::fmt;

/// Rendering capability held by every section definition
///
/// Implementations are expected to be pure functions of the merged
/// configuration: no I/O, no shared mutable state. Missing configuration
/// values must be tolerated with internal fallbacks rather than failure —
/// the pipeline never checks configuration against the schema.
///
/// A plain closure `Fn(&Props) -> SectionResult<String>` implements this
/// trait, so content modules can register functions directly.
pub trait Renderable: Send + Sync {
	/// Render the merged configuration record to markup
	fn render(&self, props: &Props) -> SectionResult<String>;
}

impl<F> Renderable for F
where
	F: Fn(&Props) -> SectionResult<String> + Send + Sync,
{
	fn render(&self, props: &Props) -> SectionResult<String> {
		self(props)
	}
}

/// A registered, reusable visual template
///
/// The id is chosen by the content author, globally unique, and stable
/// across releases: every section instance and template reference uses it
/// as a foreign key. A definition knows nothing about who references it.
pub struct SectionDefinition {
	/// Globally unique, stable id
	pub id: String,

	/// Section kind, used for category filtering
	pub category: SectionCategory,

	/// Display name
	pub name: String,

	/// Short description for pickers and search
	pub description: String,

	/// Free-text tags for search
	pub tags: Vec<String>,

	/// Base configuration used when an instance supplies no override
	pub default_props: Props,

	/// Editable surface, consumed by the external editing UI
	pub schema: Vec<PropField>,

	renderer: Box<dyn Renderable>,
}

impl SectionDefinition {
	/// Create a definition with empty metadata and an empty schema
	pub fn new(
		id: impl Into<String>,
		category: SectionCategory,
		name: impl Into<String>,
		renderer: impl Renderable + 'static,
	) -> Self {
		Self {
			id: id.into(),
			category,
			name: name.into(),
			description: String::new(),
			tags: Vec::new(),
			default_props: Props::new(),
			schema: Vec::new(),
			renderer: Box::new(renderer),
		}
	}

	/// Set the description
	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Set the search tags
	#[must_use]
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	/// Set the default configuration from a JSON object
	///
	/// Non-object values are treated as an empty record.
	#[must_use]
	pub fn with_default_props(mut self, props: JsonValue) -> Self {
		self.default_props = props.as_object().cloned().unwrap_or_default();
		self
	}

	/// Set the prop schema
	#[must_use]
	pub fn with_schema(mut self, schema: Vec<PropField>) -> Self {
		self.schema = schema;
		self
	}

	/// Validate the prop schema: keys must be unique within the schema and
	/// within each repeated-item shape
	pub fn validate(&self) -> SectionResult<()> {
		if let Some(key) = schema::find_duplicate_key(&self.schema) {
			return Err(SectionError::DuplicatePropKey {
				section_id: self.id.clone(),
				key,
			});
		}
		Ok(())
	}

	/// Invoke the rendering function on a merged configuration record
	pub fn render(&self, props: &Props) -> SectionResult<String> {
		self.renderer.render(props)
	}
}

impl fmt::Debug for SectionDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SectionDefinition")
			.field("id", &self.id)
			.field("category", &self.category)
			.field("name", &self.name)
			.field("tags", &self.tags)
			.finish_non_exhaustive()
	}
}
