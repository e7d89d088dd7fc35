//! Native shapes of the nine content collections.
//!
//! Each struct mirrors the schema its collection is authored in, field names
//! included, so content files deserialize without translation. Every field
//! defaults: a partially broken entry still parses and is then rejected (or
//! repaired) by the normalizer instead of failing the whole file.

/// A solutions-page entry.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Solution {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub overview: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Explicit locator override; usually empty, used verbatim when set.
    pub href: String,
}

/// A professional-services entry.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Service {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// A product catalog entry.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Product {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Product family, surfaced as the record category.
    pub family: String,
    pub keywords: Vec<String>,
}

/// A blog post.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Explicit locator override for externally hosted posts.
    pub url: String,
}

/// A customer case study.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct CaseStudy {
    pub slug: String,
    pub title: String,
    pub customer: String,
    /// Industry vertical, surfaced as the record category.
    pub industry: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// A downloadable whitepaper.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Whitepaper {
    pub slug: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub synopsis: String,
    pub topic: String,
    pub tags: Vec<String>,
}

/// A webinar, conference, or meetup listing.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct EventItem {
    pub slug: String,
    pub title: String,
    pub blurb: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub tags: Vec<String>,
}

/// A documentation page.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct DocPage {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Manual section, surfaced as the record category.
    pub section: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// A standalone page addressed by its full path.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Page {
    pub path: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Everything the site publishes, one field per collection.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub solutions: Vec<Solution>,
    pub services: Vec<Service>,
    pub products: Vec<Product>,
    pub blog_posts: Vec<BlogPost>,
    pub case_studies: Vec<CaseStudy>,
    pub whitepapers: Vec<Whitepaper>,
    pub events: Vec<EventItem>,
    pub docs: Vec<DocPage>,
    pub pages: Vec<Page>,
}
