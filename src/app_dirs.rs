//! Resolve configuration, cache, and data directories for `wayfinder`.
//!
//! Environment overrides win over the platform-appropriate locations from
//! the `directories` crate, so scripted runs can pin every path.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "wayfinder";
const APPLICATION: &str = "wayfinder";

const CONFIG_DIR_ENV: &str = "WAYFINDER_CONFIG_DIR";
const DATA_DIR_ENV: &str = "WAYFINDER_DATA_DIR";
const CACHE_DIR_ENV: &str = "WAYFINDER_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for wayfinder"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty value is treated the same as an unset one so shell defaults
/// do not have to special-case it.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Directory consulted for `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding persisted state such as the recent-search store.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Directory for log files and other disposable state.
pub fn get_cache_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.cache_dir().to_path_buf())
}
