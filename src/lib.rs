//! Host-side plumbing for the `wayfinder` binary.
//!
//! The search semantics live in `wayfinder-engine` and the terminal
//! front-end in `wayfinder-tui`; this crate supplies what a deployment
//! needs around them: platform directories, log setup, the content
//! loader, and the on-disk recent-search store.

pub mod app_dirs;
pub mod loader;
pub mod logging;
pub mod store;

pub use loader::load_content;
pub use store::FileStore;
