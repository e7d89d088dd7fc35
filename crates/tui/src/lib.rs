//! Terminal front-end for the wayfinder site search engine.
//!
//! Hosts the engine session behind two overlay surfaces, a compact palette
//! and a fuller panel, over a mock site chrome. The event loop, rendering
//! pipeline, and theming live here; all search semantics stay in
//! `wayfinder-engine`.

mod actions;
mod app;
pub mod components;
mod input;
mod render;
mod runtime;
pub mod surfaces;
pub mod theme;


pub use app::{App, AppOptions, BrowseOutcome};
pub use input::QueryInput;
pub use runtime::run;
pub use surfaces::SurfaceKind;
pub use theme::{Theme, default_theme};
