//! Configuration management for folio
//!
//! Stores settings in ~/.config/folio/config.json

use crate::catalog::Filter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file to use instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Directory that catalog source paths are relative to
    #[serde(default)]
    pub media_root: Option<PathBuf>,
    /// Filter selected at startup
    #[serde(default)]
    pub default_filter: Filter,
    /// How long a closed item stays on screen while the viewer fades out
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
    /// Seconds before a notification disappears (errors stay twice as long)
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,
}

fn default_close_delay_ms() -> u64 {
    300
}

fn default_toast_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            media_root: None,
            default_filter: Filter::All,
            close_delay_ms: default_close_delay_ms(),
            toast_secs: default_toast_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio"))
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load config from disk, or return default
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load a specific config file. A corrupt file is moved aside and
    /// defaults are returned.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            match serde_json::from_str(&content) {
                Ok(config) => return config,
                Err(err) => {
                    preserve_corrupt_config(path, &content);
                    eprintln!(
                        "  Warning: Config file was corrupted ({}). A backup was saved and defaults were loaded.",
                        err
                    );
                }
            }
        }
        Self::default()
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::config_dir()
            .ok_or_else(|| "Could not determine config directory".to_string())?;
        self.save_to(&dir.join("config.json"))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        #[cfg(unix)]
        {
            write_config_atomic(path, &content)
                .map_err(|e| format!("Failed to write config: {}", e))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))?;
        }

        Ok(())
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs.max(1))
    }

    /// Get the config file location for display
    pub fn config_location() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "~/.config/folio/config.json".to_string())
    }
}

fn preserve_corrupt_config(path: &Path, content: &str) {
    let corrupt_path = path.with_extension("json.corrupt");
    if fs::rename(path, &corrupt_path).is_err() {
        let _ = fs::write(&corrupt_path, content);
    }
}

#[cfg(unix)]
fn write_config_atomic(path: &Path, content: &str) -> Result<(), String> {
    use std::fs::OpenOptions;
    use std::os::unix::fs::PermissionsExt;

    let tmp_path = path.with_extension("tmp");
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)
        .map_err(|e| e.to_string())?;

    if let Err(e) = file.set_permissions(fs::Permissions::from_mode(0o600)) {
        eprintln!("  Warning: Failed to set temp config file permissions: {}", e);
    }

    file.write_all(content.as_bytes())
        .map_err(|e| e.to_string())?;

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.default_filter, Filter::All);
        assert_eq!(config.close_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_filter": "docs"}"#).unwrap();
        assert_eq!(config.default_filter, Filter::Only(Category::Docs));
        assert_eq!(config.close_delay_ms, 300);
        assert_eq!(config.toast_secs, 5);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            media_root: Some(PathBuf::from("/srv/projects")),
            default_filter: Filter::Only(Category::Canopy),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_corrupt_config_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
        assert!(!path.exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("config.json.corrupt")).unwrap(),
            "{ not json"
        );
    }
}
