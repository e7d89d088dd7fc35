use anyhow::Result;

use wayfinder::{FileStore, load_content};
use wayfinder_engine::{SearchSession, SiteContent, SiteIndex, Suggestions};
use wayfinder_tui::{AppOptions, BrowseOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates loading the site and running the interactive session.
pub(crate) struct BrowseWorkflow {
    content: SiteContent,
    config: ResolvedConfig,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let content = load_content(&config.content_dir)?;
        Ok(Self { content, config })
    }

    pub(crate) fn run(self) -> Result<BrowseOutcome> {
        let Self { content, config } = self;
        let index = SiteIndex::build(&content);
        tracing::info!(records = index.len(), "site index ready");

        let store = FileStore::new(config.store_path);
        let suggestions = Suggestions::new(Box::new(store), config.popular);
        let session = SearchSession::new(&index, suggestions);

        let options = AppOptions {
            site_title: config.site_title,
            surface: config.surface,
            theme: config.theme,
            initial_query: config.initial_query,
            initial_facet: config.initial_facet,
        };
        wayfinder_tui::run(session, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use wayfinder_tui::{SurfaceKind, Theme};

    #[test]
    fn from_config_loads_the_content_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("services.json"),
            r#"[{"slug": "sonic-ops", "name": "SONiC Operations"}]"#,
        )
        .expect("write");

        let config = ResolvedConfig {
            site_title: "wayfinder".into(),
            content_dir: dir.path().to_path_buf(),
            store_path: PathBuf::from("/tmp/recent.json"),
            popular: vec![],
            theme: Theme::default(),
            surface: SurfaceKind::Palette,
            initial_query: String::new(),
            initial_facet: None,
        };

        let workflow = BrowseWorkflow::from_config(config).expect("workflow");
        assert_eq!(workflow.content.services.len(), 1);
    }
}
