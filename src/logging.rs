//! Tracing setup for the binary.
//!
//! The TUI owns the terminal, so log lines go to a file under the cache
//! directory instead of stderr. Logging stays off unless `WAYFINDER_LOG`
//! is set to env-filter directives such as `debug` or `wayfinder=trace`.

use std::env;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_ENV: &str = "WAYFINDER_LOG";
const LOG_FILE: &str = "wayfinder.log";

/// Install the global subscriber when `WAYFINDER_LOG` is set. Returns the
/// log file path so the caller can mention it to the user, or `None` when
/// logging stays disabled.
pub fn initialize() -> Result<Option<PathBuf>> {
    let directives = match env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => return Ok(None),
    };

    let dir = app_dirs::get_cache_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid {LOG_ENV} directives `{directives}`"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(Some(path))
}
