//! Diagnostic logging
//!
//! The TUI owns the terminal, so tracing output goes to a file under the
//! cache directory. Logging is off unless `FOLIO_LOG` holds a filter
//! directive such as `debug` or `folio_tui::navigator=trace`.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FOLIO_LOG";

/// Default log file location
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("folio").join("folio.log"))
}

/// Install the file subscriber when `FOLIO_LOG` is set. Returns the log
/// path when logging is active.
pub fn init() -> Result<Option<PathBuf>> {
    let directive = match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => return Ok(None),
    };
    let Some(path) = log_path() else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid {} directive '{}'", LOG_ENV, directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");
    Ok(Some(path))
}
