//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers default files, explicit files,
//! environment variables, and CLI overrides, then validates the result
//! into a [`ResolvedConfig`] the workflow can use directly.

mod errors;
mod loader;
mod raw;
mod resolved;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
