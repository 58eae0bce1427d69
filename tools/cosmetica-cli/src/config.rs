//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cosmetica_auth::Role;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["cosmetica.toml", ".cosmetica.toml", "cosmetica.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where catalog and session data live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Login defaults.
    #[serde(default)]
    pub session: SessionConfig,

    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Relative paths are resolved against the directory
    /// holding the config file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".cosmetica")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Role used by `login` when `--role` is not given.
    #[serde(default)]
    pub default_role: Role,
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Generate a default cosmetica.toml config file.
pub fn generate_default_config() -> String {
    r#"# Cosmetica catalog configuration

[storage]
# Catalog and session files are written here.
data_dir = ".cosmetica"

[session]
# Role assumed by `cosmetica login` without --role: "customer" or "admin".
default_role = "customer"

[display]
currency_symbol = "$"
"#
    .to_string()
}
