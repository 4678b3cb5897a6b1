//! Configuration directory and persistent user settings

use super::args::DictFormat;
use crate::engine::{EngineConfig, RhymeRule};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the configuration directory for librhyme
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("librhyme"))
}

/// Get the default user config path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Get file extension for a dictionary format
pub fn file_extension(format: DictFormat) -> &'static str {
    match format {
        DictFormat::Cmudict => "dict",
        DictFormat::Bincode => "bin",
        DictFormat::Json => "json",
        #[cfg(feature = "compression")]
        DictFormat::BincodeGzip => "bin.gz",
        #[cfg(feature = "compression")]
        DictFormat::JsonGzip => "json.gz",
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default dictionary path
    pub dict_path: Option<PathBuf>,
    /// Default phone-type table path
    pub phones_path: Option<PathBuf>,
    /// Default dictionary format
    pub format: Option<DictFormat>,
    /// Default rhyme rule
    pub rule: RhymeRule,
    /// Query limits
    pub engine: EngineConfig,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default or a custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        dict_path: Option<PathBuf>,
        phones_path: Option<PathBuf>,
        format: Option<DictFormat>,
        rule: Option<RhymeRule>,
    ) -> Self {
        Self {
            dict_path: dict_path.or_else(|| self.dict_path.clone()),
            phones_path: phones_path.or_else(|| self.phones_path.clone()),
            format: format.or(self.format),
            rule: rule.unwrap_or(self.rule),
            engine: self.engine,
        }
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            dict_path: None,
            phones_path: None,
            format: None,
            rule: RhymeRule::Perfect,
            engine: EngineConfig::default(),
        }
    }
}
