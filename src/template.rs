//! Page templates and the template catalogue
//!
//! A page template is a pattern: a named, ordered list of section
//! references used to seed a new page in one step. The catalogue stores
//! and retrieves templates; instantiation copies references into fresh
//! section instances. Section ids in a template are not validated at
//! registration time — a template may reference ids that do not (yet, or
//! ever) exist, and each reference resolves lazily when used.

use crate::catalogue::SectionCatalogue;
use crate::category::TemplateCategory;
use crate::instance::{SectionInstance, new_instance_id};
use crate::renderer::merge_props;
use crate::schema::Props;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// One entry of a template: a section id plus optional overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSectionRef {
	/// Referenced section definition id; resolved lazily at use
	pub section_id: String,

	/// Overrides applied on top of the definition's defaults
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub props: Option<Props>,
}

impl TemplateSectionRef {
	/// Reference a section with no overrides
	pub fn new(section_id: impl Into<String>) -> Self {
		Self {
			section_id: section_id.into(),
			props: None,
		}
	}

	/// Set the overrides from a JSON object
	///
	/// Non-object values are treated as no overrides.
	#[must_use]
	pub fn with_props(mut self, props: JsonValue) -> Self {
		self.props = props.as_object().cloned();
		self
	}
}

/// A named, reusable ordered list of section references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTemplate {
	/// Globally unique template id
	pub id: String,

	/// Template kind, used for gallery filtering
	pub category: TemplateCategory,

	/// Display name
	pub name: String,

	/// Short description for the template gallery
	pub description: String,

	/// Free-text tags for search
	pub tags: Vec<String>,

	/// Ordered section references
	pub sections: Vec<TemplateSectionRef>,
}

impl PageTemplate {
	/// Create a template with empty metadata and no sections
	pub fn new(
		id: impl Into<String>,
		category: TemplateCategory,
		name: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			category,
			name: name.into(),
			description: String::new(),
			tags: Vec::new(),
			sections: Vec::new(),
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

	/// Set the section references
	#[must_use]
	pub fn with_sections(mut self, sections: Vec<TemplateSectionRef>) -> Self {
		self.sections = sections;
		self
	}

	/// Copy this template's references into fresh section instances
	///
	/// References naming a section id absent from the catalogue are
	/// skipped. Each surviving instance gets a fresh id and the
	/// definition's defaults shallow-merged with the reference's
	/// overrides, so the new page renders the same whether its sections
	/// are edited afterwards or not.
	pub fn instantiate(&self, catalogue: &SectionCatalogue) -> Vec<SectionInstance> {
		self.sections
			.iter()
			.filter_map(|reference| {
				let definition = catalogue.get(&reference.section_id)?;
				let overrides = reference.props.clone().unwrap_or_default();
				Some(SectionInstance {
					id: new_instance_id(),
					section_id: reference.section_id.clone(),
					props: merge_props(&definition.default_props, &overrides),
					custom_classes: None,
				})
			})
			.collect()
	}
}

/// Store of page templates keyed by template id
///
/// Same contract as [`SectionCatalogue`]: silent last-write-wins
/// registration, atomic replacement with respect to concurrent readers,
/// registration-order listings, lookups that never fail.
#[derive(Default)]
pub struct TemplateCatalogue {
	entries: RwLock<IndexMap<String, Arc<PageTemplate>>>,
}

impl TemplateCatalogue {
	/// Create an empty catalogue
	pub fn new() -> Self {
		Self {
			entries: RwLock::new(IndexMap::new()),
		}
	}

	/// Insert or replace the template keyed by its id
	pub fn register(&self, template: PageTemplate) {
		let mut entries = self.entries.write();
		if entries.contains_key(&template.id) {
			tracing::debug!(template_id = %template.id, "replacing registered page template");
		}
		entries.insert(template.id.clone(), Arc::new(template));
	}

	/// Register several templates, in list order
	pub fn register_many(&self, templates: impl IntoIterator<Item = PageTemplate>) {
		for template in templates {
			self.register(template);
		}
	}

	/// Exact lookup by id; `None` is a normal outcome
	pub fn get(&self, id: &str) -> Option<Arc<PageTemplate>> {
		self.entries.read().get(id).cloned()
	}

	/// All templates with the given category, in registration order
	pub fn by_category(&self, category: TemplateCategory) -> Vec<Arc<PageTemplate>> {
		self.entries
			.read()
			.values()
			.filter(|template| template.category == category)
			.cloned()
			.collect()
	}

	/// Case-insensitive substring search over name, description, and tags
	pub fn search(&self, query: &str) -> Vec<Arc<PageTemplate>> {
		let query = query.to_lowercase();
		self.entries
			.read()
			.values()
			.filter(|template| {
				template.name.to_lowercase().contains(&query)
					|| template.description.to_lowercase().contains(&query)
					|| template
						.tags
						.iter()
						.any(|tag| tag.to_lowercase().contains(&query))
			})
			.cloned()
			.collect()
	}

	/// Every template, in registration order
	pub fn all(&self) -> Vec<Arc<PageTemplate>> {
		self.entries.read().values().cloned().collect()
	}

	/// Number of distinct registered ids
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Whether the catalogue holds no templates
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}
}
