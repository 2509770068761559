//! Configuration file management for wavescope.
//!
//! This module handles loading and saving application configuration from TOML files.
//! Configuration is stored in the user's config directory. Every field has a default,
//! so a missing file or a partial file is valid.

use crate::ruler::ScaleSetting;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Waveform display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Maximum number of samples cached per loaded file. Should be at least
    /// as wide as the widest display the file will be shown on.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Milliseconds a new terminal size must stay unchanged before the
    /// waveform and ruler are recomputed
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

fn default_max_length() -> usize {
    4096
}

fn default_settle_ms() -> u64 {
    200
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            settle_ms: default_settle_ms(),
        }
    }
}

/// Time ruler configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RulerConfig {
    /// "auto" to follow pixel density, or one of XS, S, M, L, XL, XXL
    #[serde(default)]
    pub scale: ScaleSetting,
    /// Draw a label under every major tick even when labels would touch
    #[serde(default)]
    pub dense_labels: bool,
}

/// Colors as "#rrggbb" strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    #[serde(default = "default_waveform_fg")]
    pub waveform_fg: String,
    #[serde(default = "default_waveform_bg")]
    pub waveform_bg: String,
    #[serde(default = "default_ruler_fg")]
    pub ruler_fg: String,
    #[serde(default = "default_ruler_bg")]
    pub ruler_bg: String,
}

fn default_waveform_fg() -> String {
    "#000000".to_string()
}

fn default_waveform_bg() -> String {
    "#4b704c".to_string()
}

fn default_ruler_fg() -> String {
    "#4b704c".to_string()
}

fn default_ruler_bg() -> String {
    "#000000".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            waveform_fg: default_waveform_fg(),
            waveform_bg: default_waveform_bg(),
            ruler_fg: default_ruler_fg(),
            ruler_bg: default_ruler_bg(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WavescopeConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ruler: RulerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl WavescopeConfig {
    /// Loads configuration from the user's config directory.
    ///
    /// Returns defaults when the file does not exist.
    ///
    /// # Errors
    /// - If the config directory cannot be determined
    /// - If the config file exists but cannot be read
    /// - If the TOML is malformed
    pub fn load() -> anyhow::Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(&config_path)?;
        let config = Self::from_toml(&config_content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", config_path.display()))?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Saves configuration to the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined or created
    /// - If the file cannot be written
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = get_config_path()?;
        let config_content = toml::to_string_pretty(self)?;
        fs::write(&config_path, config_content)?;
        tracing::info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

/// Retrieves the path to the config file, creating its directory if needed.
///
/// # Errors
/// - If the home directory cannot be determined
/// - If the config directory cannot be created
pub fn get_config_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
        .join(".config")
        .join("wavescope");

    fs::create_dir_all(&config_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create config directory: {e}"))?;

    Ok(config_dir.join("wavescope.toml"))
}
