//! Section and template category vocabulary
//!
//! Fixed enumerations used to group catalogue entries in pickers and
//! galleries. `Display` gives the wire id; `label` (and `description` for
//! section categories) carry the copy the editing UI shows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a section definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionCategory {
	/// Hero sections with headlines and CTAs
	Hero,
	/// Showcase features and services
	Features,
	/// Drive user action
	Cta,
	/// Pricing tables and plans
	Pricing,
	/// Customer reviews and quotes
	Testimonials,
	/// Frequently asked questions
	Faq,
	/// Team member profiles
	Team,
	/// Image galleries and portfolios
	Gallery,
	/// Numbers and statistics
	Stats,
	/// Contact forms and info
	Contact,
	/// Page footers
	Footer,
	/// Navigation headers
	Header,
	/// Blog post layouts
	Blog,
	/// Client and partner logos
	Logos,
	/// Email signup forms
	Newsletter,
	/// Product displays
	Ecommerce,
	/// Video showcases
	Video,
	/// About and story sections
	About,
	/// Announcement banners
	Banner,
	/// Visual section dividers
	Divider,
	/// Dynamic sections that display real data
	Live,
}

impl SectionCategory {
	/// Every section category, in picker order
	pub const fn all() -> &'static [Self] {
		&[
			Self::Hero,
			Self::Features,
			Self::Cta,
			Self::Pricing,
			Self::Testimonials,
			Self::Faq,
			Self::Team,
			Self::Gallery,
			Self::Stats,
			Self::Contact,
			Self::Footer,
			Self::Header,
			Self::Blog,
			Self::Logos,
			Self::Newsletter,
			Self::Ecommerce,
			Self::Video,
			Self::About,
			Self::Banner,
			Self::Divider,
			Self::Live,
		]
	}

	/// Wire id, as serialized (`"hero"`, `"cta"`, ...)
	pub const fn id(&self) -> &'static str {
		match self {
			Self::Hero => "hero",
			Self::Features => "features",
			Self::Cta => "cta",
			Self::Pricing => "pricing",
			Self::Testimonials => "testimonials",
			Self::Faq => "faq",
			Self::Team => "team",
			Self::Gallery => "gallery",
			Self::Stats => "stats",
			Self::Contact => "contact",
			Self::Footer => "footer",
			Self::Header => "header",
			Self::Blog => "blog",
			Self::Logos => "logos",
			Self::Newsletter => "newsletter",
			Self::Ecommerce => "ecommerce",
			Self::Video => "video",
			Self::About => "about",
			Self::Banner => "banner",
			Self::Divider => "divider",
			Self::Live => "live",
		}
	}

	/// Human label for pickers
	pub const fn label(&self) -> &'static str {
		match self {
			Self::Hero => "Hero",
			Self::Features => "Features",
			Self::Cta => "Call to Action",
			Self::Pricing => "Pricing",
			Self::Testimonials => "Testimonials",
			Self::Faq => "FAQ",
			Self::Team => "Team",
			Self::Gallery => "Gallery",
			Self::Stats => "Stats",
			Self::Contact => "Contact",
			Self::Footer => "Footer",
			Self::Header => "Header",
			Self::Blog => "Blog",
			Self::Logos => "Logos",
			Self::Newsletter => "Newsletter",
			Self::Ecommerce => "E-commerce",
			Self::Video => "Video",
			Self::About => "About",
			Self::Banner => "Banner",
			Self::Divider => "Divider",
			Self::Live => "Live Data",
		}
	}

	/// One-line description for pickers
	pub const fn description(&self) -> &'static str {
		match self {
			Self::Hero => "Hero sections with headlines and CTAs",
			Self::Features => "Showcase features and services",
			Self::Cta => "Drive user action",
			Self::Pricing => "Pricing tables and plans",
			Self::Testimonials => "Customer reviews and quotes",
			Self::Faq => "Frequently asked questions",
			Self::Team => "Team member profiles",
			Self::Gallery => "Image galleries and portfolios",
			Self::Stats => "Numbers and statistics",
			Self::Contact => "Contact forms and info",
			Self::Footer => "Page footers",
			Self::Header => "Navigation headers",
			Self::Blog => "Blog post layouts",
			Self::Logos => "Client and partner logos",
			Self::Newsletter => "Email signup forms",
			Self::Ecommerce => "Product displays",
			Self::Video => "Video showcases",
			Self::About => "About and story sections",
			Self::Banner => "Announcement banners",
			Self::Divider => "Visual section dividers",
			Self::Live => "Dynamic sections that display real data from your dashboard",
		}
	}
}

impl fmt::Display for SectionCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Kind of a page template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
	/// Creator
	Creator,
	/// Content creator
	#[serde(rename = "content-creator")]
	ContentCreator,
	/// Coach and consultant
	Coach,
	/// Course creator
	#[serde(rename = "course-creator")]
	CourseCreator,
	/// Author and writer
	Author,
	/// Musician and artist
	Musician,
	/// SaaS and tech
	Saas,
	/// Agency
	Agency,
	/// Business
	Business,
	/// Portfolio
	Portfolio,
	/// Landing page
	Landing,
	/// E-commerce
	Ecommerce,
	/// Blog
	Blog,
	/// Personal
	Personal,
	/// Restaurant
	Restaurant,
	/// Real estate
	RealEstate,
	/// Health
	Health,
	/// Education
	Education,
	/// Event
	Event,
}

impl TemplateCategory {
	/// Every template category, in gallery order
	pub const fn all() -> &'static [Self] {
		&[
			Self::Creator,
			Self::ContentCreator,
			Self::Coach,
			Self::CourseCreator,
			Self::Author,
			Self::Musician,
			Self::Saas,
			Self::Agency,
			Self::Business,
			Self::Portfolio,
			Self::Landing,
			Self::Ecommerce,
			Self::Blog,
			Self::Personal,
			Self::Restaurant,
			Self::RealEstate,
			Self::Health,
			Self::Education,
			Self::Event,
		]
	}

	/// Wire id, as serialized (`"creator"`, `"content-creator"`, ...)
	pub const fn id(&self) -> &'static str {
		match self {
			Self::Creator => "creator",
			Self::ContentCreator => "content-creator",
			Self::Coach => "coach",
			Self::CourseCreator => "course-creator",
			Self::Author => "author",
			Self::Musician => "musician",
			Self::Saas => "saas",
			Self::Agency => "agency",
			Self::Business => "business",
			Self::Portfolio => "portfolio",
			Self::Landing => "landing",
			Self::Ecommerce => "ecommerce",
			Self::Blog => "blog",
			Self::Personal => "personal",
			Self::Restaurant => "restaurant",
			Self::RealEstate => "realestate",
			Self::Health => "health",
			Self::Education => "education",
			Self::Event => "event",
		}
	}

	/// Human label for the template gallery
	pub const fn label(&self) -> &'static str {
		match self {
			Self::Creator => "Creator",
			Self::ContentCreator => "Content Creator",
			Self::Coach => "Coach & Consultant",
			Self::CourseCreator => "Course Creator",
			Self::Author => "Author & Writer",
			Self::Musician => "Musician & Artist",
			Self::Saas => "SaaS / Tech",
			Self::Agency => "Agency",
			Self::Business => "Business",
			Self::Portfolio => "Portfolio",
			Self::Landing => "Landing Page",
			Self::Ecommerce => "E-commerce",
			Self::Blog => "Blog",
			Self::Personal => "Personal",
			Self::Restaurant => "Restaurant",
			Self::RealEstate => "Real Estate",
			Self::Health => "Health",
			Self::Education => "Education",
			Self::Event => "Event",
		}
	}
}

impl fmt::Display for TemplateCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}
