use crate::content::SiteContent;
use crate::kind::ContentKind;
use crate::normalize;
use crate::record::SearchRecord;

/// The flat, immutable search index over every published record.
///
/// Built once per content load and shared by reference; a content change
/// means building a fresh index, never mutating this one. Collection order
/// is fixed (solutions, services, products, blog, case studies, whitepapers,
/// events, docs, pages) and doubles as the tie-break order for equal-score
/// matches.
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    records: Vec<SearchRecord>,
}

impl SiteIndex {
    #[must_use]
    pub fn build(content: &SiteContent) -> Self {
        let mut records = Vec::new();
        records.extend(content.solutions.iter().filter_map(normalize::solution));
        records.extend(content.services.iter().filter_map(normalize::service));
        records.extend(content.products.iter().filter_map(normalize::product));
        records.extend(content.blog_posts.iter().filter_map(normalize::blog_post));
        records.extend(content.case_studies.iter().filter_map(normalize::case_study));
        records.extend(content.whitepapers.iter().filter_map(normalize::whitepaper));
        records.extend(content.events.iter().filter_map(normalize::event));
        records.extend(content.docs.iter().filter_map(normalize::doc_page));
        records.extend(content.pages.iter().filter_map(normalize::page));
        tracing::debug!(records = records.len(), "built site index");
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record totals per kind, in canonical order, zero-count kinds omitted.
    #[must_use]
    pub fn counts_by_kind(&self) -> Vec<(ContentKind, usize)> {
        ContentKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let count = self.records.iter().filter(|r| r.kind == kind).count();
                (count > 0).then_some((kind, count))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, DocPage, Service, Solution};

    fn sample_content() -> SiteContent {
        SiteContent {
            solutions: vec![Solution {
                slug: "campus".to_string(),
                title: "Campus Fabric".to_string(),
                ..Solution::default()
            }],
            services: vec![
                Service {
                    slug: "design".to_string(),
                    name: "Fabric Design".to_string(),
                    ..Service::default()
                },
                Service {
                    slug: "broken".to_string(),
                    name: String::new(),
                    ..Service::default()
                },
            ],
            blog_posts: vec![BlogPost {
                slug: "launch".to_string(),
                title: "Launch Notes".to_string(),
                ..BlogPost::default()
            }],
            docs: vec![DocPage {
                slug: "cli".to_string(),
                title: "CLI Reference".to_string(),
                ..DocPage::default()
            }],
            ..SiteContent::default()
        }
    }

    #[test]
    fn build_keeps_collection_order_and_skips_broken_items() {
        let index = SiteIndex::build(&sample_content());
        let ids: Vec<&str> = index.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            ["solution-campus", "service-design", "blog-launch", "documentation-cli"]
        );
    }

    #[test]
    fn counts_by_kind_omits_empty_collections() {
        let index = SiteIndex::build(&sample_content());
        assert_eq!(
            index.counts_by_kind(),
            [
                (ContentKind::Solution, 1),
                (ContentKind::Service, 1),
                (ContentKind::Blog, 1),
                (ContentKind::Documentation, 1),
            ]
        );
    }

    #[test]
    fn empty_content_builds_an_empty_index() {
        let index = SiteIndex::build(&SiteContent::default());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.counts_by_kind().is_empty());
    }
}
