use crate::kind::ContentKind;

/// One normalized entry in the site index.
///
/// Every collection is flattened into this shape before indexing, so the
/// matcher never needs to know which schema a record started life in.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRecord {
    /// Stable identifier, namespaced by kind (`blog-sonic-migration`).
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    /// Short descriptive text; may be empty, never absent.
    pub description: String,
    /// Grouping label within the collection, when the source has one.
    pub category: Option<String>,
    /// Deduplicated, blank-free tag list.
    pub tags: Vec<String>,
    /// Site-relative (or explicit absolute) locator handed to navigation.
    pub href: String,
}

/// A record matched by a query, paired with its ranking score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    pub record: &'a SearchRecord,
    pub score: u32,
}
