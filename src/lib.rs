//! # Pagecraft
//!
//! Section catalogue, page templates, and composition engine for
//! page-builder applications.
//!
//! A page builder ships a large catalogue of visual section templates
//! (heroes, CTAs, pricing tables, footers) that non-technical users
//! assemble into marketing pages. This crate is the engine underneath that
//! catalogue: stable identity for every section variant, machine-readable
//! metadata describing its editable surface, reusable page templates, and a
//! rendering pipeline that merges configuration and isolates failures so
//! one broken section can never take down a page.
//!
//! ## Features
//!
//! - **Section Catalogue**: register section definitions under stable ids,
//!   look them up exactly, filter by category, search by name/description/tag
//! - **Prop Schemas**: declarative field descriptions consumed by an
//!   external editing UI to build forms
//! - **Page Templates**: named, ordered lists of section references with
//!   per-reference overrides, instantiable into fresh pages
//! - **Composition Pipeline**: resolve → merge → render with per-section
//!   failure isolation and labelled placeholders for missing or crashing
//!   sections
//!
//! ## Architecture
//!
//! ```text
//! pagecraft
//! ├── schema     - Editable prop surface descriptions (PropField)
//! ├── category   - Section and template category vocabulary
//! ├── definition - Section definitions and the Renderable capability
//! ├── catalogue  - Section catalogue (register, lookup, search)
//! ├── template   - Page templates and the template catalogue
//! ├── instance   - Per-page section placements
//! └── renderer   - Composition pipeline with failure isolation
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use pagecraft::prelude::*;
//! use serde_json::json;
//!
//! // Content modules register definitions once, at startup
//! let catalogue = Arc::new(SectionCatalogue::new());
//! catalogue
//! 	.register(
//! 		SectionDefinition::new(
//! 			"hero-001",
//! 			SectionCategory::Hero,
//! 			"Simple Hero",
//! 			|props: &Props| -> SectionResult<String> {
//! 				let heading = props.get("heading").and_then(|v| v.as_str()).unwrap_or("");
//! 				Ok(format!("<h1>{heading}</h1>"))
//! 			},
//! 		)
//! 		.with_default_props(json!({ "heading": "Build Something Amazing" })),
//! 	)
//! 	.unwrap();
//!
//! // The page-editing collaborator supplies the instance list
//! let page = vec![
//! 	SectionInstance::new("hero-001").with_props(json!({ "heading": "Ship It Today" })),
//! ];
//!
//! let renderer = PageRenderer::new(catalogue);
//! let outputs = renderer.render_page(&page);
//! assert_eq!(outputs[0].outcome, RenderOutcome::Rendered);
//! assert!(outputs[0].html.contains("Ship It Today"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

// Module declarations
pub mod catalogue;
pub mod category;
pub mod definition;
pub mod instance;
pub mod renderer;
pub mod schema;
pub mod template;

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items

	// Schema
	pub use crate::schema::{PropField, PropFieldType, Props, SelectOption};

	// Categories
	pub use crate::category::{SectionCategory, TemplateCategory};

	// Definitions and catalogue
	pub use crate::catalogue::SectionCatalogue;
	pub use crate::definition::{Renderable, SectionDefinition};

	// Templates
	pub use crate::template::{PageTemplate, TemplateCatalogue, TemplateSectionRef};

	// Instances
	pub use crate::instance::SectionInstance;

	// Rendering
	pub use crate::renderer::{
		PageRenderOptions, PageRenderer, RenderOutcome, SectionChrome, SectionOutput, merge_props,
	};

	// Errors
	pub use crate::error::{SectionError, SectionResult};
}

/// Catalogue and rendering error types
pub mod error {
	use thiserror::Error;

	/// Errors surfaced by catalogue registration and rendering functions
	#[derive(Error, Debug)]
	pub enum SectionError {
		/// A prop schema declared the same key twice within one field list
		#[error("duplicate prop key `{key}` in schema for section `{section_id}`")]
		DuplicatePropKey {
			/// Id of the definition whose schema is invalid
			section_id: String,
			/// The key that appeared more than once
			key: String,
		},

		/// A rendering function reported failure
		#[error("render failed: {0}")]
		Render(String),
	}

	/// Result type for catalogue and rendering operations
	pub type SectionResult<T> = Result<T, SectionError>;
}
