use std::fmt;
use std::str::FromStr;

/// Identifies which content collection a record was normalized from.
///
/// The variant order is the canonical facet order: tab rows and per-kind
/// summaries iterate [`ContentKind::ALL`] rather than sorting labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Solution,
    Service,
    Product,
    Blog,
    CaseStudy,
    Whitepaper,
    Event,
    Documentation,
    Page,
}

/// Error returned when a kind name does not match any collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content kind `{value}`")]
pub struct ParseKindError {
    pub value: String,
}

impl ContentKind {
    /// Every kind in canonical facet order.
    pub const ALL: [ContentKind; 9] = [
        ContentKind::Solution,
        ContentKind::Service,
        ContentKind::Product,
        ContentKind::Blog,
        ContentKind::CaseStudy,
        ContentKind::Whitepaper,
        ContentKind::Event,
        ContentKind::Documentation,
        ContentKind::Page,
    ];

    /// Stable identifier used in record ids, config values, and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentKind::Solution => "solution",
            ContentKind::Service => "service",
            ContentKind::Product => "product",
            ContentKind::Blog => "blog",
            ContentKind::CaseStudy => "case-study",
            ContentKind::Whitepaper => "whitepaper",
            ContentKind::Event => "event",
            ContentKind::Documentation => "documentation",
            ContentKind::Page => "page",
        }
    }

    /// Human label for facet tabs and summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ContentKind::Solution => "Solutions",
            ContentKind::Service => "Services",
            ContentKind::Product => "Products",
            ContentKind::Blog => "Blog",
            ContentKind::CaseStudy => "Case studies",
            ContentKind::Whitepaper => "Whitepapers",
            ContentKind::Event => "Events",
            ContentKind::Documentation => "Docs",
            ContentKind::Page => "Pages",
        }
    }

    /// Short uppercase tag shown in front of result rows.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            ContentKind::Solution => "SOLN",
            ContentKind::Service => "SVC",
            ContentKind::Product => "PROD",
            ContentKind::Blog => "BLOG",
            ContentKind::CaseStudy => "CASE",
            ContentKind::Whitepaper => "PAPER",
            ContentKind::Event => "EVENT",
            ContentKind::Documentation => "DOCS",
            ContentKind::Page => "PAGE",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError {
                value: s.to_string(),
            })
    }
}
