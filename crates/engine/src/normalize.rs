//! Collection-specific constructors for [`SearchRecord`].
//!
//! Each function maps one native item to at most one record. Items without a
//! usable identity (slug or path, plus a non-blank title) yield `None` and
//! are silently skipped by the index builder; nothing here performs I/O or
//! reports errors.

use crate::content::{
    BlogPost, CaseStudy, DocPage, EventItem, Page, Product, Service, Solution, Whitepaper,
};
use crate::kind::ContentKind;
use crate::record::SearchRecord;

/// Length cap, in chars, for descriptions derived from long-form bodies.
const EXCERPT_CHARS: usize = 160;

pub fn solution(item: &Solution) -> Option<SearchRecord> {
    let slug = non_blank(&item.slug)?;
    let title = non_blank(&item.title)?;
    let description = match non_blank(&item.summary) {
        Some(text) => text.to_string(),
        None => excerpt(&item.overview),
    };
    Some(SearchRecord {
        id: record_id(ContentKind::Solution, slug),
        kind: ContentKind::Solution,
        title: title.to_string(),
        description,
        category: category(&item.category),
        tags: clean_tags(&item.tags),
        href: explicit_or(&item.href, "/solutions", slug),
    })
}

pub fn service(item: &Service) -> Option<SearchRecord> {
    let slug = non_blank(&item.slug)?;
    let name = non_blank(&item.name)?;
    Some(SearchRecord {
        id: record_id(ContentKind::Service, slug),
        kind: ContentKind::Service,
        title: name.to_string(),
        description: first_filled(&[&item.description]),
        category: category(&item.category),
        tags: clean_tags(&item.tags),
        href: route("/services", slug),
    })
}

pub fn product(item: &Product) -> Option<SearchRecord> {
    let slug = non_blank(&item.slug)?;
    let name = non_blank(&item.name)?;
    Some(SearchRecord {
        id: record_id(ContentKind::Product, slug),
        kind: ContentKind::Product,
        title: name.to_string(),
        description: first_filled(&[&item.tagline, &item.description]),
        category: category(&item.family),
        tags: clean_tags(&item.keywords),
        href: route("/products", slug),
    })
}

pub fn blog_post(item: &BlogPost) -> Option<SearchRecord> {
    let slug = non_blank(&item.slug)?;
    let title = non_blank(&item.title)?;
    let description = match non_blank(&item.excerpt) {
        Some(text) => text.to_string(),
        None => excerpt(&item.body),
    };
    Some(SearchRecord {
        id: record_id(ContentKind::Blog, slug),
        kind: ContentKind::Blog,
        title: title.to_string(),
        description,
        category: category(&item.category),
        tags: clean_tags(&item.tags),
        href: explicit_or(&item.url, "/resources/blog", slug),
    })
}

/// The customer name joins the tag list so it stays searchable.
pub fn case_study(item: &CaseStudy) -> Option<SearchRecord> {
    let slug = non_blank(&item.slug)?;
    let title = non_blank(&item.title)?;
    let mut tags = item.tags.clone();
    tags.push(item.customer.clone());
    Some(SearchRecord {
        id: record_id(ContentKind::CaseStudy, slug),
        kind: ContentKind::CaseStudy,
        title: title.to_string(),
        description: first_filled(&[&item.summary]),
        category: category(&item.industry),
        tags: clean_tags(&tags),
        href: route("/resources/case-studies", slug),
    })
}

pub fn whitepaper(item: &Whitepaper) -> Option<SearchRecord> {
    let slug = non_blank(&item.slug)?;
    let title = non_blank(&item.title)?;
    Some(SearchRecord {
        id: record_id(ContentKind::Whitepaper, slug),
        kind: ContentKind::Whitepaper,
        title: title.to_string(),
        description: first_filled(&[&item.synopsis]),
        category: category(&item.topic),
        tags: clean_tags(&item.tags),
        href: route("/resources/whitepapers", slug),
    })
}

pub fn event(item: &EventItem) -> Option<SearchRecord> {
    let slug = non_blank(&item.slug)?;
    let title = non_blank(&item.title)?;
    Some(SearchRecord {
        id: record_id(ContentKind::Event, slug),
        kind: ContentKind::Event,
        title: title.to_string(),
        description: first_filled(&[&item.blurb]),
        category: category(&item.event_type),
        tags: clean_tags(&item.tags),
        href: route("/events", slug),
    })
}

pub fn doc_page(item: &DocPage) -> Option<SearchRecord> {
    let slug = non_blank(&item.slug)?;
    let title = non_blank(&item.title)?;
    let description = match non_blank(&item.description) {
        Some(text) => text.to_string(),
        None => excerpt(&item.body),
    };
    Some(SearchRecord {
        id: record_id(ContentKind::Documentation, slug),
        kind: ContentKind::Documentation,
        title: title.to_string(),
        description,
        category: category(&item.section),
        tags: clean_tags(&item.tags),
        href: route("/docs", slug),
    })
}

/// Pages carry their full path; it doubles as the locator and the id stem.
pub fn page(item: &Page) -> Option<SearchRecord> {
    let path = non_blank(&item.path)?;
    let title = non_blank(&item.title)?;
    Some(SearchRecord {
        id: record_id(ContentKind::Page, &page_slug(path)),
        kind: ContentKind::Page,
        title: title.to_string(),
        description: first_filled(&[&item.description]),
        category: None,
        tags: clean_tags(&item.tags),
        href: path.to_string(),
    })
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// First non-blank candidate, trimmed; empty string when all are blank.
fn first_filled(candidates: &[&str]) -> String {
    candidates
        .iter()
        .find_map(|c| non_blank(c))
        .unwrap_or_default()
        .to_string()
}

/// Collapse whitespace runs and cut long-form text down to a one-line blurb.
fn excerpt(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(EXCERPT_CHARS).collect();
    cut.push('…');
    cut
}

fn category(raw: &str) -> Option<String> {
    non_blank(raw).map(str::to_string)
}

/// Trim, drop blanks, and deduplicate keeping the first occurrence.
fn clean_tags(raw: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw {
        let Some(trimmed) = non_blank(tag) else {
            continue;
        };
        if tags.iter().any(|kept| kept == trimmed) {
            continue;
        }
        tags.push(trimmed.to_string());
    }
    tags
}

fn record_id(kind: ContentKind, slug: &str) -> String {
    format!("{}-{}", kind.as_str(), slug)
}

fn route(base: &str, slug: &str) -> String {
    format!("{base}/{slug}")
}

/// Use an explicit locator verbatim when the item carries one.
fn explicit_or(explicit: &str, base: &str, slug: &str) -> String {
    match non_blank(explicit) {
        Some(href) => href.to_string(),
        None => route(base, slug),
    }
}

/// Path stem with slashes folded into the id-safe form; the site root
/// becomes `home`.
fn page_slug(path: &str) -> String {
    let stem = path.trim().trim_matches('/');
    if stem.is_empty() {
        "home".to_string()
    } else {
        stem.replace('/', "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_maps_every_field() {
        let item = Solution {
            slug: "edge-networking".to_string(),
            title: "Edge Networking".to_string(),
            summary: "Push routing to the rack.".to_string(),
            category: "Infrastructure".to_string(),
            tags: vec!["edge".to_string(), "routing".to_string()],
            ..Solution::default()
        };
        let record = solution(&item).unwrap();
        assert_eq!(record.id, "solution-edge-networking");
        assert_eq!(record.kind, ContentKind::Solution);
        assert_eq!(record.title, "Edge Networking");
        assert_eq!(record.description, "Push routing to the rack.");
        assert_eq!(record.category.as_deref(), Some("Infrastructure"));
        assert_eq!(record.tags, ["edge", "routing"]);
        assert_eq!(record.href, "/solutions/edge-networking");
    }

    #[test]
    fn blank_title_or_slug_drops_the_item() {
        let no_title = Service {
            slug: "consulting".to_string(),
            name: "   ".to_string(),
            ..Service::default()
        };
        assert!(service(&no_title).is_none());

        let no_slug = Service {
            slug: String::new(),
            name: "Consulting".to_string(),
            ..Service::default()
        };
        assert!(service(&no_slug).is_none());
    }

    #[test]
    fn solution_summary_falls_back_to_overview() {
        let item = Solution {
            slug: "telemetry".to_string(),
            title: "Telemetry".to_string(),
            summary: "  ".to_string(),
            overview: "Streaming counters from every switch.".to_string(),
            ..Solution::default()
        };
        let record = solution(&item).unwrap();
        assert_eq!(record.description, "Streaming counters from every switch.");
    }

    #[test]
    fn product_prefers_tagline_over_description() {
        let item = Product {
            slug: "fabric-os".to_string(),
            name: "Fabric OS".to_string(),
            tagline: "One OS for the whole fabric.".to_string(),
            description: "Longer marketing copy.".to_string(),
            family: "Operating Systems".to_string(),
            keywords: vec!["nos".to_string(), "sonic".to_string()],
        };
        let record = product(&item).unwrap();
        assert_eq!(record.description, "One OS for the whole fabric.");
        assert_eq!(record.category.as_deref(), Some("Operating Systems"));
        assert_eq!(record.tags, ["nos", "sonic"]);
    }

    #[test]
    fn blog_body_excerpt_fills_missing_excerpt() {
        let item = BlogPost {
            slug: "long-read".to_string(),
            title: "Long Read".to_string(),
            body: "word ".repeat(100),
            ..BlogPost::default()
        };
        let record = blog_post(&item).unwrap();
        assert_eq!(record.description.chars().count(), EXCERPT_CHARS + 1);
        assert!(record.description.ends_with('…'));
    }

    #[test]
    fn excerpt_collapses_whitespace_and_respects_char_boundaries() {
        assert_eq!(excerpt("one\n\n  two\tthree"), "one two three");

        let accented = "é".repeat(200);
        let cut = excerpt(&accented);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 1);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn blog_explicit_url_wins_over_derived_route() {
        let item = BlogPost {
            slug: "guest-post".to_string(),
            title: "Guest Post".to_string(),
            url: "https://partner.example/posts/guest".to_string(),
            ..BlogPost::default()
        };
        let record = blog_post(&item).unwrap();
        assert_eq!(record.href, "https://partner.example/posts/guest");
    }

    #[test]
    fn tags_are_deduplicated_and_blank_free() {
        let item = EventItem {
            slug: "meetup".to_string(),
            title: "Meetup".to_string(),
            tags: vec![
                "bgp".to_string(),
                "  ".to_string(),
                "evpn".to_string(),
                "bgp".to_string(),
            ],
            ..EventItem::default()
        };
        let record = event(&item).unwrap();
        assert_eq!(record.tags, ["bgp", "evpn"]);
    }

    #[test]
    fn empty_category_becomes_none() {
        let item = Service {
            slug: "audit".to_string(),
            name: "Network Audit".to_string(),
            category: "   ".to_string(),
            ..Service::default()
        };
        let record = service(&item).unwrap();
        assert_eq!(record.category, None);
    }

    #[test]
    fn case_study_keeps_customer_searchable_via_tags() {
        let item = CaseStudy {
            slug: "exchange-refresh".to_string(),
            title: "Exchange Refresh".to_string(),
            customer: "Meridian Exchange".to_string(),
            industry: "Financial Services".to_string(),
            summary: "Cutover with zero downtime.".to_string(),
            tags: vec!["migration".to_string()],
        };
        let record = case_study(&item).unwrap();
        assert_eq!(record.category.as_deref(), Some("Financial Services"));
        assert_eq!(record.tags, ["migration", "Meridian Exchange"]);
        assert_eq!(record.href, "/resources/case-studies/exchange-refresh");
    }

    #[test]
    fn whitepaper_abstract_becomes_description() {
        let item = Whitepaper {
            slug: "clos-design".to_string(),
            title: "Clos Design".to_string(),
            synopsis: "Scaling leaf-spine past 100k ports.".to_string(),
            topic: "Architecture".to_string(),
            tags: vec![],
        };
        let record = whitepaper(&item).unwrap();
        assert_eq!(record.description, "Scaling leaf-spine past 100k ports.");
        assert_eq!(record.href, "/resources/whitepapers/clos-design");
    }

    #[test]
    fn doc_page_derives_description_from_body() {
        let item = DocPage {
            slug: "install".to_string(),
            title: "Installation".to_string(),
            body: "Run the installer.\nThen reboot.".to_string(),
            section: "Getting Started".to_string(),
            ..DocPage::default()
        };
        let record = doc_page(&item).unwrap();
        assert_eq!(record.description, "Run the installer. Then reboot.");
        assert_eq!(record.href, "/docs/install");
    }

    #[test]
    fn page_uses_its_path_as_locator_and_id_stem() {
        let item = Page {
            path: "/company/about".to_string(),
            title: "About Us".to_string(),
            ..Page::default()
        };
        let record = page(&item).unwrap();
        assert_eq!(record.id, "page-company-about");
        assert_eq!(record.href, "/company/about");
        assert_eq!(record.category, None);

        let home = Page {
            path: "/".to_string(),
            title: "Home".to_string(),
            ..Page::default()
        };
        assert_eq!(page(&home).unwrap().id, "page-home");
    }
}
