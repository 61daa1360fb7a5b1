//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/foundry/config.json`.
//!
//! ## Format
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "start_page": "home",
//!   "carousel": {
//!     "interval_ms": 3500,
//!     "auto_advance": true,
//!     "slides": [{ "title": "Welcome", "caption": "..." }]
//!   },
//!   "predictor": { "delay_ms": 2000, "report_dir": "/tmp/reports" }
//! }
//! ```
//!
//! Every field is optional. Unknown fields are rejected so typos don't go
//! unnoticed. The `directories` crate resolves the platform config dir.

use crate::content::{default_slides, Page, Slide};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application name used for config, data and log directories.
pub const APP_NAME: &str = "foundry";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Page shown on startup.
    #[serde(default)]
    pub start_page: Page,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub predictor: PredictorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_true")]
    pub auto_advance: bool,

    /// Replaces the built-in slide list when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<Slide>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictorConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Where "Download Report" writes files. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_interval_ms() -> u64 {
    3500
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            start_page: Page::default(),
            carousel: CarouselConfig::default(),
            predictor: PredictorConfig::default(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            auto_advance: true,
            slides: None,
        }
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            report_dir: None,
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Configured slides, or the built-in list.
    pub fn slides(&self) -> Vec<Slide> {
        self.slides.clone().unwrap_or_else(default_slides)
    }
}

impl PredictorConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn report_dir(&self) -> PathBuf {
        self.report_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Config {
    /// Load configuration from disk, falling back to defaults when the file
    /// is missing or broken.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config: {:#}", e);
                eprintln!("Warning: {:#}. Using default configuration.", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()`
    /// if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME)
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
