//! Template catalogue tests: registration contract and instantiation

use pagecraft::catalogue::SectionCatalogue;
use pagecraft::category::{SectionCategory, TemplateCategory};
use pagecraft::definition::SectionDefinition;
use pagecraft::error::SectionResult;
use pagecraft::schema::Props;
use pagecraft::template::{PageTemplate, TemplateCatalogue, TemplateSectionRef};
use rstest::rstest;
use serde_json::json;

fn section(id: &str, category: SectionCategory, name: &str) -> SectionDefinition {
	SectionDefinition::new(id, category, name, |_: &Props| -> SectionResult<String> {
		Ok("<section></section>".to_string())
	})
}

fn template(id: &str, category: TemplateCategory, name: &str) -> PageTemplate {
	PageTemplate::new(id, category, name)
}

#[rstest]
fn test_register_then_get_returns_the_template() {
	// Arrange
	let catalogue = TemplateCatalogue::new();
	let tpl = template("saas-landing", TemplateCategory::Saas, "SaaS Landing")
		.with_description("Hero, features, pricing, footer")
		.with_tags(["landing", "startup"])
		.with_sections(vec![
			TemplateSectionRef::new("hero-001"),
			TemplateSectionRef::new("pricing-001"),
		]);

	// Act
	catalogue.register(tpl);
	let found = catalogue.get("saas-landing").unwrap();

	// Assert
	assert_eq!(found.category, TemplateCategory::Saas);
	assert_eq!(found.sections.len(), 2);
	assert_eq!(found.sections[0].section_id, "hero-001");
}

#[rstest]
fn test_template_registration_is_last_write_wins() {
	let catalogue = TemplateCatalogue::new();
	catalogue.register(template("saas-landing", TemplateCategory::Saas, "First"));
	catalogue.register(template("saas-landing", TemplateCategory::Saas, "Second"));

	assert_eq!(catalogue.len(), 1);
	assert_eq!(catalogue.get("saas-landing").unwrap().name, "Second");
}

#[rstest]
fn test_by_category_and_search_keep_registration_order() {
	// Arrange
	let catalogue = TemplateCatalogue::new();
	catalogue.register_many([
		template("coach-1", TemplateCategory::Coach, "Coaching Studio"),
		template("saas-1", TemplateCategory::Saas, "SaaS Launch"),
		template("coach-2", TemplateCategory::Coach, "Consulting Suite")
			.with_tags(["coaching", "services"]),
	]);

	// Act
	let coaching: Vec<String> = catalogue
		.by_category(TemplateCategory::Coach)
		.iter()
		.map(|t| t.id.clone())
		.collect();
	let searched: Vec<String> = catalogue
		.search("COACHING")
		.iter()
		.map(|t| t.id.clone())
		.collect();

	// Assert
	assert_eq!(coaching, vec!["coach-1", "coach-2"]);
	assert_eq!(searched, vec!["coach-1", "coach-2"]);
}

#[rstest]
fn test_dangling_section_ids_are_allowed_at_registration() {
	// No cross-validation against the section catalogue happens when a
	// template is registered; the reference resolves lazily at use.
	let catalogue = TemplateCatalogue::new();

	catalogue.register(
		template("future", TemplateCategory::Landing, "Future")
			.with_sections(vec![TemplateSectionRef::new("not-yet-registered")]),
	);

	assert_eq!(catalogue.len(), 1);
}

#[rstest]
fn test_instantiate_copies_references_into_fresh_instances() {
	// Arrange
	let sections = SectionCatalogue::new();
	sections
		.register_many([
			section("hero-001", SectionCategory::Hero, "Hero")
				.with_default_props(json!({ "heading": "Welcome", "align": "center" })),
			section("cta-001", SectionCategory::Cta, "CTA")
				.with_default_props(json!({ "label": "Sign up" })),
		])
		.unwrap();
	let tpl = template("landing", TemplateCategory::Landing, "Landing").with_sections(vec![
		TemplateSectionRef::new("hero-001").with_props(json!({ "heading": "Launch Faster" })),
		TemplateSectionRef::new("cta-001"),
	]);

	// Act
	let instances = tpl.instantiate(&sections);

	// Assert - defaults merged with reference overrides, override wins
	assert_eq!(instances.len(), 2);
	assert_eq!(instances[0].section_id, "hero-001");
	assert_eq!(instances[0].props["heading"], json!("Launch Faster"));
	assert_eq!(instances[0].props["align"], json!("center"));
	assert_eq!(instances[1].props["label"], json!("Sign up"));
}

#[rstest]
fn test_instantiate_skips_unknown_section_ids() {
	// Arrange
	let sections = SectionCatalogue::new();
	sections
		.register(section("hero-001", SectionCategory::Hero, "Hero"))
		.unwrap();
	let tpl = template("partial", TemplateCategory::Landing, "Partial").with_sections(vec![
		TemplateSectionRef::new("hero-001"),
		TemplateSectionRef::new("ghost-123"),
		TemplateSectionRef::new("hero-001"),
	]);

	// Act
	let instances = tpl.instantiate(&sections);

	// Assert - unknown reference dropped, order otherwise preserved
	assert_eq!(instances.len(), 2);
	assert!(instances.iter().all(|i| i.section_id == "hero-001"));
}

#[rstest]
fn test_instantiate_assigns_distinct_instance_ids() {
	let sections = SectionCatalogue::new();
	sections
		.register(section("hero-001", SectionCategory::Hero, "Hero"))
		.unwrap();
	let tpl = template("twice", TemplateCategory::Landing, "Twice").with_sections(vec![
		TemplateSectionRef::new("hero-001"),
		TemplateSectionRef::new("hero-001"),
	]);

	let instances = tpl.instantiate(&sections);

	assert_ne!(instances[0].id, instances[1].id);
}

#[rstest]
fn test_instantiate_against_empty_catalogue_yields_no_instances() {
	let sections = SectionCatalogue::new();
	let tpl = template("empty", TemplateCategory::Landing, "Empty")
		.with_sections(vec![TemplateSectionRef::new("hero-001")]);

	assert!(tpl.instantiate(&sections).is_empty());
}

#[rstest]
fn test_template_wire_format_round_trips() {
	// Arrange
	let tpl = template("saas-landing", TemplateCategory::ContentCreator, "Creator Home")
		.with_sections(vec![
			TemplateSectionRef::new("hero-001").with_props(json!({ "heading": "Hi" })),
		]);

	// Act
	let value = serde_json::to_value(&tpl).unwrap();
	let back: PageTemplate = serde_json::from_value(value.clone()).unwrap();

	// Assert
	assert_eq!(value["category"], "content-creator");
	assert_eq!(value["sections"][0]["sectionId"], "hero-001");
	assert_eq!(back, tpl);
}
