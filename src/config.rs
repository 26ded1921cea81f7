//! Configuration management for bongtoast
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, MAX_DURATION_MS, MAX_VISIBLE_LIMIT};
use crate::icons::IconTheme;
use crate::toast::{PresenterConfig, ToastSpring, ToastStyle};
use crate::utils::color::parse_css_color;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub toaster: PresenterConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub installer: InstallerConfig,
}

/// Showcase UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (hover to expand, click to dismiss)
    pub mouse_enabled: bool,
    /// Redraw interval in milliseconds
    pub tick_rate_ms: u64,
    /// Icon theme: emoji, unicode, or ascii
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Log level filter: error, warn, info, debug, trace
    pub level: Option<String>,
}

/// Installer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InstallerConfig {
    /// Template tree copied into target projects
    pub template_dir: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            tick_rate_ms: 100,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("bongtoast.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("bongtoast").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let toaster = &self.toaster;

        if toaster.max_visible == 0 || toaster.max_visible > MAX_VISIBLE_LIMIT {
            anyhow::bail!(
                "max_visible must be between 1 and {}, got {}",
                MAX_VISIBLE_LIMIT,
                toaster.max_visible
            );
        }

        if let Some(duration) = toaster.duration {
            if duration > MAX_DURATION_MS {
                anyhow::bail!("duration cannot exceed {} ms, got {}", MAX_DURATION_MS, duration);
            }
        }

        if let Some(style) = &toaster.style {
            Self::validate_style(style)?;
        }

        if let Some(spring) = &toaster.spring {
            Self::validate_spring(spring)?;
        }

        if self.ui.tick_rate_ms == 0 {
            anyhow::bail!("tick_rate_ms must be greater than 0");
        }

        if let Some(level) = &self.logging.level {
            level
                .parse::<log::LevelFilter>()
                .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", level))?;
        }

        Ok(())
    }

    fn validate_style(style: &ToastStyle) -> Result<()> {
        let colors = [("bg", &style.bg), ("fg", &style.fg), ("border_color", &style.border_color)];
        for (field, value) in colors {
            if let Some(value) = value {
                if parse_css_color(value).is_none() {
                    anyhow::bail!("style.{}: unsupported colour '{}'", field, value);
                }
            }
        }
        Ok(())
    }

    fn validate_spring(spring: &ToastSpring) -> Result<()> {
        let values = [
            ("stiffness", spring.stiffness),
            ("damping", spring.damping),
            ("mass", spring.mass),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                if !(value.is_finite() && value > 0.0) {
                    anyhow::bail!("spring.{} must be a positive number, got {}", field, value);
                }
            }
        }
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# bongtoast Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("bongtoast"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
