use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use config::{Config, File};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;
use wayfinder::app_dirs;

/// Environment overrides use this prefix and nesting separator, so
/// `WAYFINDER__UI__THEME=light` sets `ui.theme`.
const ENV_PREFIX: &str = "wayfinder";
const ENV_SEPARATOR: &str = "__";

/// Load configuration by layering default files, explicit files, and
/// environment variables, then applying CLI overrides and validating.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let mut raw = read_layers(cli)?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}

/// Merge every configuration layer into a [`RawConfig`], lowest precedence
/// first. Explicit `--config` files must exist; the defaults need not.
fn read_layers(cli: &CliArgs) -> Result<RawConfig> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }
    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(","),
    );

    let merged = builder
        .build()
        .context("failed to merge configuration sources")?;
    merged
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))
}

/// Default configuration files consulted unless `--no-config` is given.
fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }
    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".wayfinder.toml"));
        files.push(current_dir.join("wayfinder.toml"));
    }

    files
}
