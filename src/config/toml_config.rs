use crate::domain::model::OverwritePolicy;
use crate::utils::error::{ProvisionError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONTENT_ROOT: &str = "/var/www";
pub const DEFAULT_CONFIG_ROOT: &str = "/etc/apache/sites";

/// Optional settings file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub paths: Option<PathsConfig>,
    pub conf: Option<ConfFilesConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub content_root: Option<PathBuf>,
    pub config_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfFilesConfig {
    pub on_existing: Option<OverwritePolicy>,
}

impl TomlConfig {
    /// Reads and parses the settings file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ProvisionError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ProvisionError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn content_root(&self) -> PathBuf {
        self.paths
            .as_ref()
            .and_then(|p| p.content_root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_ROOT))
    }

    pub fn config_root(&self) -> PathBuf {
        self.paths
            .as_ref()
            .and_then(|p| p.config_root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_ROOT))
    }

    pub fn on_existing(&self) -> OverwritePolicy {
        self.conf
            .as_ref()
            .and_then(|c| c.on_existing)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.content_root", &self.content_root())?;
        validate_path("paths.config_root", &self.config_root())?;
        Ok(())
    }
}
