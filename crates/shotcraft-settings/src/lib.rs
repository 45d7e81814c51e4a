//! Shotcraft Settings Crate
//!
//! Handles editor configuration: loading, saving and validation.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, EditingSettings, GeneratorSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
