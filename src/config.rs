//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the schema builder
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    /// Directory exports are written to (defaults to the working directory)
    pub export_dir: Option<PathBuf>,
    /// Path of the last successful import, used to prefill the dialog
    pub last_import_path: Option<String>,
}

impl BuilderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "schemabuilder", "schema-builder-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, falling back to defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: BuilderConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}
