//! Substring matching, ranking, and facet filtering over a [`SiteIndex`].

use crate::index::SiteIndex;
use crate::kind::ContentKind;
use crate::record::Hit;

/// Field weights, highest-signal first. The ordering between the classes is
/// the contract; the exact values are tuning.
pub const TITLE_WEIGHT: u32 = 8;
pub const CATEGORY_WEIGHT: u32 = 4;
pub const DESCRIPTION_WEIGHT: u32 = 2;
pub const TAG_WEIGHT: u32 = 1;

/// Cap on hits a session keeps per keystroke; screens show fewer anyway.
pub const MAX_RESULTS: usize = 50;

/// Rank every record whose fields contain the folded query.
///
/// The query is trimmed and lowercased; a blank query matches nothing.
/// Matching is plain substring containment per field, summed field weights
/// decide the order, and equal scores keep index order. `limit` truncates
/// after ranking.
#[must_use]
pub fn search<'a>(index: &'a SiteIndex, query: &str, limit: Option<usize>) -> Vec<Hit<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<Hit<'a>> = index
        .records()
        .iter()
        .filter_map(|record| {
            let mut score = 0;
            if record.title.to_lowercase().contains(&needle) {
                score += TITLE_WEIGHT;
            }
            if let Some(category) = &record.category
                && category.to_lowercase().contains(&needle)
            {
                score += CATEGORY_WEIGHT;
            }
            if record.description.to_lowercase().contains(&needle) {
                score += DESCRIPTION_WEIGHT;
            }
            // However many tags match, the tag field counts once.
            if record.tags.iter().any(|tag| tag.to_lowercase().contains(&needle)) {
                score += TAG_WEIGHT;
            }
            (score > 0).then_some(Hit { record, score })
        })
        .collect();

    // Stable sort: ties stay in index order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    tracing::debug!(query = %needle, hits = hits.len(), "ranked search pass");
    hits
}

/// Narrow a ranked list to one kind, preserving order. `None` keeps all.
#[must_use]
pub fn filter_by_kind<'a>(hits: &[Hit<'a>], kind: Option<ContentKind>) -> Vec<Hit<'a>> {
    match kind {
        None => hits.to_vec(),
        Some(kind) => hits
            .iter()
            .copied()
            .filter(|hit| hit.record.kind == kind)
            .collect(),
    }
}

/// Per-kind hit totals for the facet tab row, canonical order, zeros omitted.
#[must_use]
pub fn facet_counts(hits: &[Hit<'_>]) -> Vec<(ContentKind, usize)> {
    ContentKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let count = hits.iter().filter(|hit| hit.record.kind == kind).count();
            (count > 0).then_some((kind, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, CaseStudy, Service, SiteContent, Solution};

    fn fixture() -> SiteContent {
        SiteContent {
            solutions: vec![Solution {
                slug: "automation".to_string(),
                title: "Network Automation".to_string(),
                summary: "Automation-first config management.".to_string(),
                category: "Operations".to_string(),
                tags: vec!["ansible".to_string(), "automation".to_string()],
                ..Solution::default()
            }],
            services: vec![Service {
                slug: "sonic-support".to_string(),
                name: "Enterprise Support".to_string(),
                description: "24x7 support for SONiC deployments.".to_string(),
                category: "Support".to_string(),
                tags: vec!["sonic".to_string()],
            }],
            blog_posts: vec![BlogPost {
                slug: "sonic-migration".to_string(),
                title: "Migrating to SONiC".to_string(),
                excerpt: "A field guide to switching your fabric over.".to_string(),
                category: "Engineering".to_string(),
                tags: vec!["sonic".to_string(), "migration".to_string()],
                ..BlogPost::default()
            }],
            case_studies: vec![CaseStudy {
                slug: "retail-rollout".to_string(),
                title: "Retail Rollout".to_string(),
                customer: "Hartley Group".to_string(),
                industry: "Retail".to_string(),
                summary: "Automation across 240 stores.".to_string(),
                tags: vec![],
            }],
            ..SiteContent::default()
        }
    }

    #[test]
    fn blank_and_whitespace_queries_match_nothing() {
        let index = SiteIndex::build(&fixture());
        assert!(search(&index, "", None).is_empty());
        assert!(search(&index, "   \t ", None).is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_and_trims_the_query() {
        let index = SiteIndex::build(&fixture());
        let hits = search(&index, "  SoNiC  ", None);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn title_match_outranks_description_match() {
        let index = SiteIndex::build(&fixture());
        let hits = search(&index, "sonic", None);
        // The blog post matches on title + tag, the service only on
        // description + tag.
        assert_eq!(hits[0].record.id, "blog-sonic-migration");
        assert_eq!(hits[0].score, TITLE_WEIGHT + TAG_WEIGHT);
        assert_eq!(hits[1].record.id, "service-sonic-support");
        assert_eq!(hits[1].score, DESCRIPTION_WEIGHT + TAG_WEIGHT);
    }

    #[test]
    fn weights_are_additive_across_fields() {
        let index = SiteIndex::build(&fixture());
        let hits = search(&index, "automation", None);
        // Title + description + tag on the solution; description only on
        // the case study.
        assert_eq!(hits[0].record.id, "solution-automation");
        assert_eq!(
            hits[0].score,
            TITLE_WEIGHT + DESCRIPTION_WEIGHT + TAG_WEIGHT
        );
        assert_eq!(hits[1].record.id, "case-study-retail-rollout");
        assert_eq!(hits[1].score, DESCRIPTION_WEIGHT);
    }

    #[test]
    fn title_and_category_outrank_category_alone() {
        let content = SiteContent {
            services: vec![
                Service {
                    slug: "transit".to_string(),
                    name: "Cloud Transit".to_string(),
                    category: "Cloud".to_string(),
                    ..Service::default()
                },
                Service {
                    slug: "audit".to_string(),
                    name: "Fabric Audit".to_string(),
                    category: "Cloud".to_string(),
                    ..Service::default()
                },
            ],
            ..SiteContent::default()
        };
        let index = SiteIndex::build(&content);
        let hits = search(&index, "cloud", None);
        assert_eq!(hits[0].record.id, "service-transit");
        assert_eq!(hits[0].score, TITLE_WEIGHT + CATEGORY_WEIGHT);
        assert_eq!(hits[1].record.id, "service-audit");
        assert_eq!(hits[1].score, CATEGORY_WEIGHT);
    }

    #[test]
    fn multiple_matching_tags_count_once() {
        let content = SiteContent {
            blog_posts: vec![BlogPost {
                slug: "tagged".to_string(),
                title: "Tagged Twice".to_string(),
                tags: vec!["bgp basics".to_string(), "bgp advanced".to_string()],
                ..BlogPost::default()
            }],
            ..SiteContent::default()
        };
        let index = SiteIndex::build(&content);
        let hits = search(&index, "bgp", None);
        assert_eq!(hits[0].score, TAG_WEIGHT);
    }

    #[test]
    fn equal_scores_keep_index_order() {
        let content = SiteContent {
            services: vec![
                Service {
                    slug: "first".to_string(),
                    name: "Peering Review".to_string(),
                    ..Service::default()
                },
                Service {
                    slug: "second".to_string(),
                    name: "Peering Setup".to_string(),
                    ..Service::default()
                },
            ],
            ..SiteContent::default()
        };
        let index = SiteIndex::build(&content);
        let hits = search(&index, "peering", None);
        assert_eq!(hits[0].record.id, "service-first");
        assert_eq!(hits[1].record.id, "service-second");
    }

    #[test]
    fn search_is_deterministic() {
        let index = SiteIndex::build(&fixture());
        let first = search(&index, "sonic", None);
        let second = search(&index, "sonic", None);
        assert_eq!(first, second);
    }

    #[test]
    fn limit_truncates_after_ranking() {
        let index = SiteIndex::build(&fixture());
        let hits = search(&index, "sonic", Some(1));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.id, "blog-sonic-migration");
    }

    #[test]
    fn no_match_yields_an_empty_list() {
        let index = SiteIndex::build(&fixture());
        assert!(search(&index, "zzz", None).is_empty());
    }

    #[test]
    fn filter_none_is_identity() {
        let index = SiteIndex::build(&fixture());
        let hits = search(&index, "sonic", None);
        assert_eq!(filter_by_kind(&hits, None), hits);
    }

    #[test]
    fn filter_keeps_order_and_drops_other_kinds() {
        let index = SiteIndex::build(&fixture());
        let hits = search(&index, "sonic", None);
        let services = filter_by_kind(&hits, Some(ContentKind::Service));
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].record.id, "service-sonic-support");

        let events = filter_by_kind(&hits, Some(ContentKind::Event));
        assert!(events.is_empty());
    }

    #[test]
    fn facet_counts_follow_canonical_order() {
        let index = SiteIndex::build(&fixture());
        let hits = search(&index, "sonic", None);
        assert_eq!(
            facet_counts(&hits),
            [(ContentKind::Service, 1), (ContentKind::Blog, 1)]
        );
    }
}
