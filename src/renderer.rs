//! Page composition and rendering
//!
//! Turns an ordered list of section instances into an ordered list of
//! rendered outputs: resolve each instance's definition, merge its
//! configuration, invoke the rendering function inside an isolation
//! boundary, and wrap the result with presentation-only chrome. A missing
//! or crashing section becomes a small labelled placeholder in place; it
//! never aborts the rest of the page.

use crate::catalogue::SectionCatalogue;
use crate::instance::SectionInstance;
use crate::schema::Props;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Shallow-merge overrides onto defaults
///
/// Flat, key-by-key: keys present only in defaults are kept, keys present
/// only in overrides are added, conflicting keys take the override value.
/// Values are never merged recursively.
pub fn merge_props(defaults: &Props, overrides: &Props) -> Props {
	let mut merged = defaults.clone();
	for (key, value) in overrides {
		merged.insert(key.clone(), value.clone());
	}
	merged
}

/// Terminal state of one output in a render pass
///
/// Computed fresh on every render call; nothing is cached between passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
	/// The rendering function completed normally
	Rendered,
	/// The instance referenced a section id absent from the catalogue
	MissingSection,
	/// The rendering function returned an error or panicked
	RenderFailed,
	/// The page had no instances at all
	EmptyPage,
}

/// One output of a render pass
///
/// Placeholder outcomes carry markup too, so the output sequence is
/// always renderable as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutput {
	/// Id of the instance this output came from; `None` for the
	/// page-level empty state
	pub instance_id: Option<String>,

	/// Referenced section definition id; `None` for the page-level empty
	/// state
	pub section_id: Option<String>,

	/// Terminal state of this output
	pub outcome: RenderOutcome,

	/// Markup: the rendering function's return value, or placeholder
	/// markup, wrapped in the section chrome
	pub html: String,
}

impl SectionOutput {
	/// Whether this output is any of the placeholder states
	pub fn is_placeholder(&self) -> bool {
		self.outcome != RenderOutcome::Rendered
	}
}

/// Presentation-only decoration applied around one section's output
///
/// Chrome never fails and is applied uniformly whether the inner output
/// was a normal render or a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionChrome {
	/// Mark this section as selected in an editor view
	pub selected: bool,

	/// Emit activation attributes (`role="button"`, `tabindex`,
	/// `data-section-index`) so an editor host can wire click handling
	pub interactive: bool,

	/// Position of the section on the page, used by the activation hook
	pub index: Option<usize>,
}

/// Options for a page-level render
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRenderOptions {
	/// Index of the section currently selected in the editor, if any
	pub selected_index: Option<usize>,

	/// Emit activation attributes on every section wrapper
	pub interactive: bool,
}

/// Composition and rendering pipeline over a shared section catalogue
///
/// The catalogue is passed in explicitly at construction; the renderer
/// holds no other state and every call is a fresh pass.
pub struct PageRenderer {
	catalogue: Arc<SectionCatalogue>,
}

impl PageRenderer {
	/// Create a renderer over the given catalogue
	pub fn new(catalogue: Arc<SectionCatalogue>) -> Self {
		Self { catalogue }
	}

	/// The catalogue this renderer resolves section ids against
	pub fn catalogue(&self) -> &Arc<SectionCatalogue> {
		&self.catalogue
	}

	/// Render one section instance
	///
	/// Resolution, merge, and invocation happen inside the isolation
	/// boundary: an unknown section id yields a labelled not-found
	/// placeholder, and a rendering function that returns an error or
	/// panics yields a crash placeholder. Neither escapes to the caller,
	/// and neither affects sibling instances.
	pub fn render_section(
		&self,
		instance: &SectionInstance,
		chrome: &SectionChrome,
	) -> SectionOutput {
		let output = match self.catalogue.get(&instance.section_id) {
			None => SectionOutput {
				instance_id: Some(instance.id.clone()),
				section_id: Some(instance.section_id.clone()),
				outcome: RenderOutcome::MissingSection,
				html: missing_section_placeholder(&instance.section_id),
			},
			Some(definition) => {
				let merged = merge_props(&definition.default_props, &instance.props);
				match catch_unwind(AssertUnwindSafe(|| definition.render(&merged))) {
					Ok(Ok(html)) => SectionOutput {
						instance_id: Some(instance.id.clone()),
						section_id: Some(instance.section_id.clone()),
						outcome: RenderOutcome::Rendered,
						html,
					},
					Ok(Err(error)) => {
						tracing::error!(
							section_id = %instance.section_id,
							%error,
							"section failed to render"
						);
						SectionOutput {
							instance_id: Some(instance.id.clone()),
							section_id: Some(instance.section_id.clone()),
							outcome: RenderOutcome::RenderFailed,
							html: render_failed_placeholder(),
						}
					}
					Err(payload) => {
						tracing::error!(
							section_id = %instance.section_id,
							error = %panic_message(payload.as_ref()),
							"section panicked while rendering"
						);
						SectionOutput {
							instance_id: Some(instance.id.clone()),
							section_id: Some(instance.section_id.clone()),
							outcome: RenderOutcome::RenderFailed,
							html: render_failed_placeholder(),
						}
					}
				}
			}
		};

		apply_chrome(output, instance.custom_classes.as_deref(), chrome)
	}

	/// Render a whole page, in list order
	///
	/// Equivalent to [`render_page_with`](Self::render_page_with) with
	/// default options (no selection, not interactive).
	pub fn render_page(&self, instances: &[SectionInstance]) -> Vec<SectionOutput> {
		self.render_page_with(instances, &PageRenderOptions::default())
	}

	/// Render a whole page with editor-view options
	///
	/// Output order matches input order regardless of how many outputs are
	/// placeholders. An empty instance list produces a single empty-state
	/// placeholder, so callers can tell "no sections configured yet" apart
	/// from "zero instances rendered".
	pub fn render_page_with(
		&self,
		instances: &[SectionInstance],
		options: &PageRenderOptions,
	) -> Vec<SectionOutput> {
		if instances.is_empty() {
			return vec![SectionOutput {
				instance_id: None,
				section_id: None,
				outcome: RenderOutcome::EmptyPage,
				html: empty_page_placeholder(),
			}];
		}

		instances
			.iter()
			.enumerate()
			.map(|(index, instance)| {
				let chrome = SectionChrome {
					selected: options.selected_index == Some(index),
					interactive: options.interactive,
					index: Some(index),
				};
				self.render_section(instance, &chrome)
			})
			.collect()
	}
}

/// Wrap an output with its presentation chrome
fn apply_chrome(
	mut output: SectionOutput,
	custom_classes: Option<&str>,
	chrome: &SectionChrome,
) -> SectionOutput {
	let mut classes = String::from("relative");
	if let Some(custom) = custom_classes {
		if !custom.is_empty() {
			classes.push(' ');
			classes.push_str(&escape_html(custom));
		}
	}
	if chrome.selected {
		classes.push_str(" ring-2 ring-indigo-500 ring-offset-2");
	}

	let mut attributes = format!(" class=\"{classes}\"");
	if chrome.interactive {
		if let Some(index) = chrome.index {
			attributes.push_str(&format!(" data-section-index=\"{index}\""));
		}
		attributes.push_str(" role=\"button\" tabindex=\"0\"");
	}

	output.html = format!("<div{attributes}>{}</div>", output.html);
	output
}

fn missing_section_placeholder(section_id: &str) -> String {
	format!(
		"<div class=\"py-12 text-center text-gray-400 border-2 border-dashed border-gray-200 rounded-lg\">\
		<p class=\"text-sm\">Section not found: {}</p></div>",
		escape_html(section_id)
	)
}

fn render_failed_placeholder() -> String {
	"<div class=\"py-8 text-center text-slate-400\">\
	<p class=\"text-sm\">This section failed to render.</p></div>"
		.to_string()
}

fn empty_page_placeholder() -> String {
	"<div class=\"py-24 text-center text-gray-400\">\
	<p class=\"text-lg font-medium\">No sections yet</p>\
	<p class=\"text-sm mt-2\">Add sections to start building your page</p></div>"
		.to_string()
}

/// Best-effort message from a caught panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"non-string panic payload".to_string()
	}
}

/// Escapes HTML special characters in author-controlled text
fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
