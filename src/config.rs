//! Configuration management for the grid engine.
//!
//! This module handles loading, validating, and saving the measurement
//! metrics and default track specs in TOML format with platform-specific
//! directory resolution.

use crate::constants::{APP_CONFIG_DIR, DEFAULT_CONTENT_SPEC, DEFAULT_GAP_SPEC};
use crate::error::GridResult;
use crate::models::{Axis, ConstantSize, Track, Unit};
use crate::parser::track_spec;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Screen metrics used to turn constant sizes into pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Screen resolution in dots per inch
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    /// Average character width of the dialog font in pixels (4 horizontal dlu)
    #[serde(default = "default_dialog_char_width")]
    pub dialog_char_width: f64,
    /// Character height of the dialog font in pixels (8 vertical dlu)
    #[serde(default = "default_dialog_char_height")]
    pub dialog_char_height: f64,
}

fn default_dpi() -> f64 {
    96.0
}

fn default_dialog_char_width() -> f64 {
    8.0
}

fn default_dialog_char_height() -> f64 {
    16.0
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            dialog_char_width: default_dialog_char_width(),
            dialog_char_height: default_dialog_char_height(),
        }
    }
}

impl MetricsConfig {
    /// Converts a constant size on `axis` to whole pixels (rounded).
    ///
    /// Dialog units are horizontal on columns and vertical on rows.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixels(&self, size: &ConstantSize, axis: Axis) -> i32 {
        let per_unit = match size.unit {
            Unit::Pixel => 1.0,
            Unit::Point => self.dpi / 72.0,
            Unit::Inch => self.dpi,
            Unit::Millimeter => self.dpi / 25.4,
            Unit::Centimeter => self.dpi / 2.54,
            Unit::DialogUnit => match axis {
                Axis::Column => self.dialog_char_width / 4.0,
                Axis::Row => self.dialog_char_height / 8.0,
            },
        };
        (size.value * per_unit).round() as i32
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("dpi", self.dpi),
            ("dialog_char_width", self.dialog_char_width),
            ("dialog_char_height", self.dialog_char_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("metrics.{name} must be a positive number (got {value})");
            }
        }
        Ok(())
    }
}

/// Specs used for tracks created by row/column insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Spec of inserted content tracks
    #[serde(default = "default_content_spec")]
    pub content_spec: String,
    /// Spec of inserted gap tracks (related-component gap)
    #[serde(default = "default_gap_spec")]
    pub gap_spec: String,
}

fn default_content_spec() -> String {
    DEFAULT_CONTENT_SPEC.to_string()
}

fn default_gap_spec() -> String {
    DEFAULT_GAP_SPEC.to_string()
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            content_spec: default_content_spec(),
            gap_spec: default_gap_spec(),
        }
    }
}

impl TrackConfig {
    /// Builds a fresh content track for `axis`.
    pub fn content_track(&self, axis: Axis) -> GridResult<Track> {
        track_spec::decode(axis, &self.content_spec).map(Track::content)
    }

    /// Builds a fresh gap track for `axis`.
    pub fn gap_track(&self, axis: Axis) -> GridResult<Track> {
        track_spec::decode(axis, &self.gap_spec).map(Track::gap)
    }

    fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            self.content_track(axis)
                .context(format!("tracks.content_spec is not a valid {axis} spec"))?;
            self.gap_track(axis)
                .context(format!("tracks.gap_spec is not a valid {axis} spec"))?;
        }
        Ok(())
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/FormGrid/config.toml`
/// - macOS: `~/Library/Application Support/FormGrid/config.toml`
/// - Windows: `%APPDATA%\FormGrid\config.toml`
///
/// # Validation
///
/// - metrics must be positive and finite
/// - both track specs must decode on both axes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pixel conversion metrics
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Default specs for inserted tracks
    #[serde(default)]
    pub tracks: TrackConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path, falling back to defaults
    /// when the file is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.metrics.validate()?;
        self.tracks.validate()
    }
}
