use std::path::PathBuf;

use wayfinder_engine::ContentKind;
use wayfinder_tui::{SurfaceKind, Theme};

/// Application-ready configuration derived from user input, config files
/// and sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) site_title: String,
    pub(crate) content_dir: PathBuf,
    pub(crate) store_path: PathBuf,
    pub(crate) popular: Vec<String>,
    pub(crate) theme: Theme,
    pub(crate) surface: SurfaceKind,
    pub(crate) initial_query: String,
    pub(crate) initial_facet: Option<ContentKind>,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Site title: {}", self.site_title);
        println!("  Content directory: {}", self.content_dir.display());
        println!("  Recent-search store: {}", self.store_path.display());
        println!("  Theme: {}", self.theme.name);
        println!("  Surface: {}", self.surface.as_str());
        match self.initial_facet {
            Some(kind) => println!("  Initial facet: {kind}"),
            None => println!("  Initial facet: (all kinds)"),
        }
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
        if !self.popular.is_empty() {
            println!("  Popular searches: {}", self.popular.join(", "));
        }
    }
}
