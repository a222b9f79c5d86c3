//! Section catalogue
//!
//! Process-lifetime store of section definitions, keyed by section id.
//! Content modules populate it once at startup; after that it is
//! read-mostly, shared behind `Arc` with the rendering layer. Lookups
//! never fail — absence is `None` or an empty list, not an error.

use crate::category::SectionCategory;
use crate::definition::SectionDefinition;
use crate::error::SectionResult;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Store of section definitions keyed by section id
///
/// Registration is last-write-wins: re-registering an id silently replaces
/// the definition. Replacement is atomic with respect to concurrent
/// readers (the stored `Arc` is swapped whole) and keeps the id's original
/// position, so ordered listings stay stable across re-registration.
#[derive(Default)]
pub struct SectionCatalogue {
	entries: RwLock<IndexMap<String, Arc<SectionDefinition>>>,
}

impl SectionCatalogue {
	/// Create an empty catalogue
	pub fn new() -> Self {
		Self {
			entries: RwLock::new(IndexMap::new()),
		}
	}

	/// Insert or replace the definition keyed by its id
	///
	/// Fails only when the definition's prop schema declares a duplicate
	/// key. Overwriting an existing id is not an error.
	pub fn register(&self, definition: SectionDefinition) -> SectionResult<()> {
		definition.validate()?;
		let mut entries = self.entries.write();
		if entries.contains_key(&definition.id) {
			tracing::debug!(section_id = %definition.id, "replacing registered section definition");
		}
		entries.insert(definition.id.clone(), Arc::new(definition));
		Ok(())
	}

	/// Register several definitions, in list order
	///
	/// Equivalent to repeated [`register`](Self::register). Stops at the
	/// first definition with an invalid schema; earlier definitions stay
	/// registered.
	pub fn register_many(
		&self,
		definitions: impl IntoIterator<Item = SectionDefinition>,
	) -> SectionResult<()> {
		for definition in definitions {
			self.register(definition)?;
		}
		Ok(())
	}

	/// Exact lookup by id
	///
	/// `None` is a normal, expected outcome; callers handle it rather than
	/// treating it as exceptional.
	pub fn get(&self, id: &str) -> Option<Arc<SectionDefinition>> {
		self.entries.read().get(id).cloned()
	}

	/// All definitions with the given category, in registration order
	pub fn by_category(&self, category: SectionCategory) -> Vec<Arc<SectionDefinition>> {
		self.entries
			.read()
			.values()
			.filter(|definition| definition.category == category)
			.cloned()
			.collect()
	}

	/// Case-insensitive substring search over name, description, and tags
	///
	/// Matches keep registration order.
	pub fn search(&self, query: &str) -> Vec<Arc<SectionDefinition>> {
		let query = query.to_lowercase();
		self.entries
			.read()
			.values()
			.filter(|definition| {
				definition.name.to_lowercase().contains(&query)
					|| definition.description.to_lowercase().contains(&query)
					|| definition
						.tags
						.iter()
						.any(|tag| tag.to_lowercase().contains(&query))
			})
			.cloned()
			.collect()
	}

	/// Every definition, in registration order
	pub fn all(&self) -> Vec<Arc<SectionDefinition>> {
		self.entries.read().values().cloned().collect()
	}

	/// Number of distinct registered ids
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Whether the catalogue holds no definitions
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Display name for an id, falling back to the id itself
	pub fn label_for(&self, id: &str) -> String {
		self.get(id)
			.map(|definition| definition.name.clone())
			.unwrap_or_else(|| id.to_string())
	}
}
