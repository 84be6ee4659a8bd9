//! Configuration file support for patrol.
//!
//! Provides YAML-based configuration through `patrol.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::ReportFormat;
use crate::shared::error::PatrolError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "patrol.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Minimum acceptable score, in percent
    pub min: Option<f64>,
    /// Report format, `LIST` or `TABLE` in any case
    pub format: Option<String>,
    /// Composer executable to run
    pub composer: Option<String>,
    /// Extra packages to leave out of the inspection
    pub exclude_packages: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed report format; only call after validation.
    pub fn report_format(&self) -> Option<ReportFormat> {
        self.format
            .as_deref()
            .and_then(|format| ReportFormat::from_str(format).ok())
    }

    /// One warning line per unknown field, sorted by field name.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(min) = config.min {
        if !min.is_finite() || min < 0.0 {
            return Err(PatrolError::ConfigError {
                path: path.to_path_buf(),
                details: format!("'min' must be a non-negative number, got {}", min),
            }
            .into());
        }
    }

    if let Some(format) = config.format.as_deref() {
        ReportFormat::from_str(format).map_err(|details| PatrolError::ConfigError {
            path: path.to_path_buf(),
            details,
        })?;
    }

    if let Some(composer) = config.composer.as_deref() {
        if composer.trim().is_empty() {
            return Err(PatrolError::ConfigError {
                path: path.to_path_buf(),
                details: "'composer' must not be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
