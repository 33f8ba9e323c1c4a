//! Configuration file support.
//!
//! Loads an optional `.projmap.toml` from the scan root. CLI flags always win
//! over config values; config values win over built-in defaults.

use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".projmap.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ProjmapConfig {
    pub scan: ScanConfig,
}

/// Scan section of the configuration
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Source extensions to scan, without leading dots. Example: `["ts", "tsx"]`
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Ignore globs applied relative to the scan root.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl ProjmapConfig {
    /// Load config from `.projmap.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE_NAME))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[projmap][warn] Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[projmap][warn] Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
