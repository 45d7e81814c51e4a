//! Error types for the settings crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or writing the config file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The platform has no per-user config directory.
    #[error("no config directory available on this platform")]
    NoConfigDir,

    /// The parent directory of the config file could not be created.
    #[error("cannot create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("cannot write TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// The file parsed but its values were rejected.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Rejected configuration values.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Config files are chosen by extension: `.json` or `.toml`.
    #[error("unsupported config format '{0}', expected .json or .toml")]
    UnsupportedFormat(String),

    #[error("'{key}' is out of range: {value}")]
    OutOfRange { key: String, value: String },

    #[error("'{0}' must not be empty")]
    Empty(String),
}

impl ConfigError {
    pub(crate) fn out_of_range(key: &str, value: impl ToString) -> Self {
        ConfigError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_key() {
        let err = ConfigError::out_of_range("editing.history_capacity", 0);
        assert_eq!(err.to_string(), "'editing.history_capacity' is out of range: 0");

        let err = ConfigError::Empty("generator.api_key_env".into());
        assert_eq!(err.to_string(), "'generator.api_key_env' must not be empty");
    }

    #[test]
    fn test_invalid_is_transparent() {
        let err: SettingsError = ConfigError::UnsupportedFormat("yaml".into()).into();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert_eq!(
            err.to_string(),
            "unsupported config format 'yaml', expected .json or .toml"
        );
    }

    #[test]
    fn test_create_dir_keeps_source() {
        use std::error::Error as _;

        let err = SettingsError::CreateDir {
            path: PathBuf::from("/nope/shotcraft"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("cannot create /nope/shotcraft"));
        assert!(err.source().is_some());
    }
}
