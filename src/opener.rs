//! Hand an item off to the system viewer
//!
//! The terminal can only describe a drawing; the actual pixels are left to
//! whatever the desktop uses for images and PDFs.

use crate::catalog::CatalogItem;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Absolute location of an item's source file
pub fn resolve(media_root: Option<&Path>, item: &CatalogItem) -> PathBuf {
    match media_root {
        Some(root) => root.join(&item.source_path),
        None => item.source_path.clone(),
    }
}

/// Open `path` with the platform's default application
pub fn open_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to launch viewer")?;
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to launch viewer")?;
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg("")
            .arg(path)
            .spawn()
            .context("Failed to launch viewer")?;
    }

    tracing::debug!(path = %path.display(), "handed off to system viewer");
    Ok(())
}
