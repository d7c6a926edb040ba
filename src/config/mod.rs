//! CLI configuration file
//!
//! Optional YAML file, e.g.:
//!
//! ```yaml
//! context: staging-cluster
//! namespace: team-a
//! ```
//!
//! Lookup order: `--config` / `RELEASECTL_CONFIG`, then
//! `$HOME/.config/releasectl/config.yaml`. A missing default file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;

/// Settings loaded from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Kubeconfig context to use instead of the current one
    #[serde(default)]
    pub context: Option<String>,

    /// Namespace used when `--namespace` is not given
    #[serde(default)]
    pub namespace: Option<String>,
}

impl CliConfig {
    /// Load the config from an explicit path, or the default location if present
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::from_file(path)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_yaml(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// CLI flag wins over the file
    pub fn effective_context(&self, cli_context: Option<&str>) -> Option<String> {
        cli_context
            .map(str::to_string)
            .or_else(|| self.context.clone())
            .filter(|c| !c.trim().is_empty())
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("releasectl")
            .join("config.yaml"),
    )
}
