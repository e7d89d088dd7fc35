//! Facet tab row for the panel surface.

use wayfinder_engine::SearchSession;

/// Tab titles ("All" plus every populated facet, with counts) and the
/// index of the active tab.
#[must_use]
pub fn facet_tabs(session: &SearchSession<'_>) -> (Vec<String>, usize) {
    let facets = session.facets();
    let total: usize = facets.iter().map(|(_, count)| count).sum();
    let mut titles = vec![format!("All {total}")];
    let mut selected = 0;
    for (position, (kind, count)) in facets.iter().enumerate() {
        titles.push(format!("{} {}", kind.label(), count));
        if session.filter() == Some(*kind) {
            selected = position + 1;
        }
    }
    (titles, selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_engine::content::{BlogPost, Service, SiteContent};
    use wayfinder_engine::{ContentKind, MemoryStore, SearchSession, SiteIndex, Suggestions};

    fn index() -> SiteIndex {
        SiteIndex::build(&SiteContent {
            services: vec![Service {
                slug: "sonic-ops".to_string(),
                name: "SONiC Operations".to_string(),
                ..Service::default()
            }],
            blog_posts: vec![BlogPost {
                slug: "sonic-intro".to_string(),
                title: "SONiC Intro".to_string(),
                ..BlogPost::default()
            }],
            ..SiteContent::default()
        })
    }

    #[test]
    fn tabs_list_all_then_each_populated_facet() {
        let index = index();
        let suggestions = Suggestions::new(Box::new(MemoryStore::new()), vec![]);
        let mut session = SearchSession::new(&index, suggestions);
        session.open();
        session.set_query("sonic");

        let (titles, selected) = facet_tabs(&session);
        assert_eq!(titles, ["All 2", "Services 1", "Blog 1"]);
        assert_eq!(selected, 0);

        session.set_filter(Some(ContentKind::Blog));
        let (_, selected) = facet_tabs(&session);
        assert_eq!(selected, 2);
    }
}
