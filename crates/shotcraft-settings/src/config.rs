//! Configuration for Shotcraft
//!
//! Supports JSON and TOML files, chosen by extension, stored in the platform
//! config directory. Configuration is organized into sections:
//! - Canvas defaults for new documents
//! - Editing behavior (history depth, nudge steps, duplicate offset)
//! - Layout generator settings

use serde::{Deserialize, Serialize};
use shotcraft_core::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DUPLICATE_OFFSET,
    HISTORY_CAPACITY, MIN_LAYER_SIZE, NUDGE_STEP, NUDGE_STEP_LARGE,
};
use shotcraft_designer::{CanvasConfig, EditorOptions, StylePreset};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "shotcraft";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Canvas defaults for new documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
    pub background_color: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Editing behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingSettings {
    /// Maximum number of undo snapshots
    pub history_capacity: usize,
    /// Arrow-key nudge distance
    pub nudge_step: f64,
    /// Shift+arrow nudge distance
    pub nudge_step_large: f64,
    /// Offset applied to duplicated layers on both axes
    pub duplicate_offset: f64,
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            nudge_step: NUDGE_STEP,
            nudge_step_large: NUDGE_STEP_LARGE,
            duplicate_offset: DUPLICATE_OFFSET,
        }
    }
}

/// Layout generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Model name passed to the generation service
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub default_style_preset: StylePreset,
    /// Pattern used when none is chosen. `None` lets the generator lay out freely.
    pub default_pattern: Option<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            api_key_env: "API_KEY".to_string(),
            default_style_preset: StylePreset::Dark,
            default_pattern: None,
        }
    }
}

impl GeneratorSettings {
    /// Reads the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub editing: EditingSettings,
    pub generator: GeneratorSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/shotcraft/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Loads `path`, or returns the defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let canvas = &self.canvas;
        if !canvas.width.is_finite() || canvas.width < MIN_LAYER_SIZE {
            return Err(ConfigError::out_of_range("canvas.width", canvas.width));
        }
        if !canvas.height.is_finite() || canvas.height < MIN_LAYER_SIZE {
            return Err(ConfigError::out_of_range("canvas.height", canvas.height));
        }
        if canvas.background_color.trim().is_empty() {
            return Err(ConfigError::Empty("canvas.background_color".to_string()));
        }

        let editing = &self.editing;
        if editing.history_capacity == 0 {
            return Err(ConfigError::out_of_range(
                "editing.history_capacity",
                editing.history_capacity,
            ));
        }
        if !editing.nudge_step.is_finite() || editing.nudge_step <= 0.0 {
            return Err(ConfigError::out_of_range("editing.nudge_step", editing.nudge_step));
        }
        if !editing.nudge_step_large.is_finite() || editing.nudge_step_large <= 0.0 {
            return Err(ConfigError::out_of_range(
                "editing.nudge_step_large",
                editing.nudge_step_large,
            ));
        }
        if !editing.duplicate_offset.is_finite() {
            return Err(ConfigError::out_of_range(
                "editing.duplicate_offset",
                editing.duplicate_offset,
            ));
        }

        if self.generator.api_key_env.trim().is_empty() {
            return Err(ConfigError::Empty("generator.api_key_env".to_string()));
        }
        if let Some(pattern) = &self.generator.default_pattern {
            if shotcraft_designer::find_pattern(pattern).is_none() {
                return Err(ConfigError::out_of_range("generator.default_pattern", pattern));
            }
        }

        Ok(())
    }

    /// Canvas configuration for a new document.
    pub fn canvas_config(&self) -> CanvasConfig {
        CanvasConfig::new(
            self.canvas.width,
            self.canvas.height,
            self.canvas.background_color.clone(),
        )
    }

    /// Runtime options for `DesignerState::with_options`.
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            canvas: self.canvas_config(),
            history_capacity: self.editing.history_capacity,
            nudge_step: self.editing.nudge_step,
            nudge_step_large: self.editing.nudge_step_large,
            duplicate_offset: self.editing.duplicate_offset,
        }
    }
}
