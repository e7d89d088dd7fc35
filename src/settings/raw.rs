use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result, ensure};
use serde::Deserialize;

use wayfinder::app_dirs;
use wayfinder_engine::ContentKind;
use wayfinder_tui::theme;
use wayfinder_tui::{SurfaceKind, Theme};

use crate::cli::CliArgs;

use super::errors::{ConfigError, SettingSource};
use super::resolved::ResolvedConfig;

const DEFAULT_TITLE: &str = "wayfinder";
const DEFAULT_CONTENT_DIR: &str = "content";
const STORE_FILE: &str = "recent-searches.json";

/// Popular searches shown when the site config does not supply its own.
const DEFAULT_POPULAR: [&str; 4] = ["sonic", "pricing", "edge fabric", "support"];

/// Mirror of the configuration file representation before CLI overrides
/// and validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    site: SiteSection,
    ui: UiSection,
}

/// Site specific configuration options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SiteSection {
    title: Option<String>,
    content_dir: Option<PathBuf>,
    store: Option<PathBuf>,
    popular: Option<Vec<String>>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    surface: Option<String>,
    initial_query: Option<String>,
    kind: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(title) = cli.title.clone() {
            self.site.title = Some(title);
        }
        if let Some(dir) = cli.content.clone() {
            self.site.content_dir = Some(dir);
        }
        if let Some(store) = cli.store.clone() {
            self.site.store = Some(store);
        }

        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(surface) = cli.surface {
            self.ui.surface = Some(surface.as_str().to_string());
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(kind) = cli.kind.clone() {
            self.ui.kind = Some(kind);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating
    /// and filling defaults where required. Rejected values report the flag,
    /// variable, or file key they arrived through.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let content_dir = self
            .site
            .content_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));
        if content_dir.exists() {
            ensure!(
                content_dir.is_dir(),
                "content path {} is not a directory",
                content_dir.display()
            );
        }

        let store_path = match self.site.store {
            Some(path) => path,
            None => app_dirs::get_data_dir()?.join(STORE_FILE),
        };

        let theme = match self.ui.theme.as_deref() {
            Some(name) => theme::by_name(name).ok_or_else(|| {
                Error::new(ConfigError::invalid(
                    "ui.theme",
                    name,
                    origin_of(cli.theme.is_some(), "WAYFINDER__UI__THEME", "--theme", "ui.theme"),
                    format!("unknown theme, available: {}", theme::names().join(", ")),
                ))
            })?,
            None => Theme::default(),
        };

        let surface = match self.ui.surface.as_deref() {
            Some(name) => SurfaceKind::by_name(name).ok_or_else(|| {
                Error::new(ConfigError::invalid(
                    "ui.surface",
                    name,
                    origin_of(
                        cli.surface.is_some(),
                        "WAYFINDER__UI__SURFACE",
                        "--surface",
                        "ui.surface",
                    ),
                    format!("unknown surface, available: {}", SurfaceKind::names().join(", ")),
                ))
            })?,
            None => SurfaceKind::default(),
        };

        let initial_facet = match self.ui.kind.as_deref() {
            Some(value) => {
                let kind = value.parse::<ContentKind>().map_err(|err| {
                    Error::new(ConfigError::invalid(
                        "ui.kind",
                        value,
                        origin_of(cli.kind.is_some(), "WAYFINDER__UI__KIND", "--kind", "ui.kind"),
                        format!(
                            "{err}, available: {}",
                            ContentKind::ALL.map(ContentKind::as_str).join(", ")
                        ),
                    ))
                })?;
                Some(kind)
            }
            None => None,
        };

        let popular = self
            .site
            .popular
            .unwrap_or_else(|| DEFAULT_POPULAR.map(str::to_string).to_vec());

        Ok(ResolvedConfig {
            site_title: self.site.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            content_dir,
            store_path,
            popular,
            theme,
            surface,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            initial_facet,
        })
    }
}

/// Attribute a value to the source it arrived through. CLI overrides shadow
/// everything else, and a set environment variable shadows file keys.
fn origin_of(
    cli_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> SettingSource {
    if cli_present {
        return SettingSource::CliFlag(cli_flag);
    }
    if env::var_os(env_var).is_some() {
        return SettingSource::Environment(env_var);
    }
    SettingSource::ConfigKey(key)
}
