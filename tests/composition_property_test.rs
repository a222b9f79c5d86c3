//! Property-based tests for configuration merging and page composition

use pagecraft::catalogue::SectionCatalogue;
use pagecraft::category::SectionCategory;
use pagecraft::definition::SectionDefinition;
use pagecraft::error::SectionResult;
use pagecraft::instance::SectionInstance;
use pagecraft::renderer::{PageRenderer, RenderOutcome, merge_props};
use pagecraft::schema::Props;
use proptest::prelude::*;
use std::sync::Arc;

fn props_from(pairs: &[(String, String)]) -> Props {
	let mut props = Props::new();
	for (key, value) in pairs {
		props.insert(key.clone(), serde_json::Value::String(value.clone()));
	}
	props
}

fn record_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
	proptest::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9 ]{0,12}"), 0..8)
}

fn seeded_catalogue(ids: &[&str]) -> Arc<SectionCatalogue> {
	let catalogue = SectionCatalogue::new();
	for id in ids {
		catalogue
			.register(SectionDefinition::new(
				*id,
				SectionCategory::Hero,
				format!("Section {id}"),
				|_: &Props| -> SectionResult<String> { Ok("<section></section>".to_string()) },
			))
			.unwrap();
	}
	Arc::new(catalogue)
}

proptest! {
	#[test]
	fn prop_merge_override_always_wins(
		defaults in record_strategy(),
		overrides in record_strategy(),
	) {
		// Arrange
		let defaults = props_from(&defaults);
		let overrides = props_from(&overrides);

		// Act
		let merged = merge_props(&defaults, &overrides);

		// Assert
		for (key, value) in &overrides {
			prop_assert_eq!(merged.get(key), Some(value));
		}
	}

	#[test]
	fn prop_merge_keeps_default_only_keys(
		defaults in record_strategy(),
		overrides in record_strategy(),
	) {
		let defaults = props_from(&defaults);
		let overrides = props_from(&overrides);

		let merged = merge_props(&defaults, &overrides);

		for (key, value) in &defaults {
			if !overrides.contains_key(key) {
				prop_assert_eq!(merged.get(key), Some(value));
			}
		}
	}

	#[test]
	fn prop_merge_introduces_no_extra_keys(
		defaults in record_strategy(),
		overrides in record_strategy(),
	) {
		let defaults = props_from(&defaults);
		let overrides = props_from(&overrides);

		let merged = merge_props(&defaults, &overrides);

		for key in merged.keys() {
			prop_assert!(defaults.contains_key(key) || overrides.contains_key(key));
		}
	}

	#[test]
	fn prop_render_page_preserves_length_and_order(
		picks in proptest::collection::vec(0..3usize, 1..12),
	) {
		// Arrange - instances alternate between two known ids and an unknown one
		let catalogue = seeded_catalogue(&["hero-001", "cta-001"]);
		let renderer = PageRenderer::new(catalogue);
		let ids = ["hero-001", "cta-001", "ghost-123"];
		let page: Vec<SectionInstance> =
			picks.iter().map(|pick| SectionInstance::new(ids[*pick])).collect();

		// Act
		let outputs = renderer.render_page(&page);

		// Assert - one output per instance, same relative order
		prop_assert_eq!(outputs.len(), page.len());
		for (output, instance) in outputs.iter().zip(&page) {
			prop_assert_eq!(output.instance_id.as_deref(), Some(instance.id.as_str()));
			let expected = if instance.section_id == "ghost-123" {
				RenderOutcome::MissingSection
			} else {
				RenderOutcome::Rendered
			};
			prop_assert_eq!(output.outcome, expected);
		}
	}

	#[test]
	fn fuzz_search_never_panics(query in ".*") {
		let catalogue = seeded_catalogue(&["hero-001", "cta-001"]);

		let _ = catalogue.search(&query);
	}

	#[test]
	fn fuzz_unknown_ids_never_escalate(section_id in ".*") {
		// Arbitrary ids, registered or not, must always produce an output
		let catalogue = seeded_catalogue(&["hero-001"]);
		let renderer = PageRenderer::new(catalogue);
		let page = vec![SectionInstance::new(section_id)];

		let outputs = renderer.render_page(&page);

		prop_assert_eq!(outputs.len(), 1);
	}
}
