//! Application configuration management.
//!
//! Holds where reports are written, what they are called, and how the
//! ledger is ordered. Stored at `~/.config/rollcall/config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::reports::LedgerOrder;

/// Application name used for config directory paths
const APP_NAME: &str = "rollcall";

/// Config file name
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_LEDGER_FILE: &str = "attendance.csv";
pub const DEFAULT_OUTREACH_FILE: &str = "outreach.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: Option<String>,
    pub ledger_file_name: String,
    pub outreach_file_name: String,
    pub ledger_order: LedgerOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            ledger_file_name: DEFAULT_LEDGER_FILE.to_string(),
            outreach_file_name: DEFAULT_OUTREACH_FILE.to_string(),
            ledger_order: LedgerOrder::Input,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Output directory, defaulting to the current directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
