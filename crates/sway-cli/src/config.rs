//! Motion config loading

use std::fs;
use std::path::Path;

use sway_motion::MotionConfig;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml" | "yml") => Ok(ConfigFormat::Yaml),
            _ => Err(CliError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load and validate a config, or fall back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<MotionConfig, CliError> {
    let Some(path) = path else {
        return Ok(MotionConfig::default());
    };

    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|_| CliError::ConfigNotFound(path.display().to_string()))?;
    let config = parse_config(&content, format)?;
    config.validate()?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(content: &str, format: ConfigFormat) -> Result<MotionConfig, CliError> {
    Ok(match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    })
}

pub fn render_config(config: &MotionConfig, format: ConfigFormat) -> Result<String, CliError> {
    Ok(match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    })
}
