//! Configuration loading and management.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin used when formatting absolute report links. The original
    /// front-end reads this from the browser location; here it is explicit.
    pub origin: String,
    /// Report defaults.
    pub report: ReportConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: "https://mindgauge.app".to_string(),
            report: ReportConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Defaults for the report command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Question count used for the accuracy figure when the CLI is not told
    /// otherwise.
    pub total_questions: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            total_questions: 30,
        }
    }
}

/// Output defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format name (`json` or `text`).
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// Errors if the file does not exist. Use this for explicit `--config`
    /// flags. Env vars with `MINDGAUGE_` prefix override file values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(crate::core::Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file_exact(path))
            .merge(Env::prefixed("MINDGAUGE_").split("__"))
            .extract()
            .map_err(|e| crate::core::Error::Config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from a directory, looking for mindgauge.toml or
    /// .mindgauge/mindgauge.toml.
    ///
    /// Missing files are silently skipped (defaults are used). Env vars with
    /// `MINDGAUGE_` prefix override file/default values.
    pub fn load_default(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.join("mindgauge.toml")))
            .merge(Toml::file(dir.join(".mindgauge/mindgauge.toml")))
            .merge(Env::prefixed("MINDGAUGE_").split("__"))
            .extract()
            .map_err(|e| crate::core::Error::Config(e.to_string()))?;
        Ok(config)
    }
}
