//! Search engine for a content-driven site: normalization, indexing,
//! ranking, suggestions, and the selection state machine.
//!
//! Everything in here is synchronous and UI-free. Hosts build a
//! [`SiteIndex`] from their collections, wrap a [`RecentStore`] around
//! whatever persistence they have, and drive a [`SearchSession`] from
//! their input events.

pub mod content;
pub mod index;
pub mod kind;
pub mod normalize;
pub mod query;
pub mod record;
pub mod session;
pub mod suggest;

pub use content::SiteContent;
pub use index::SiteIndex;
pub use kind::{ContentKind, ParseKindError};
pub use query::{facet_counts, filter_by_kind, search};
pub use record::{Hit, SearchRecord};
pub use session::{CommitOutcome, SearchSession, SessionState};
pub use suggest::{
    MemoryStore, RECENT_CAP, RECENT_KEY, RecentStore, Suggestion, SuggestionSource, Suggestions,
};
