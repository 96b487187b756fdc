//! Run configuration for the `polycalc` binary.

use std::path::PathBuf;

use thiserror::Error;
use tracing::Level;

/// Configuration of a calculator run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Script to execute; standard input when `None`.
    pub input: Option<PathBuf>,
    /// Maximum log level; logging is disabled when `None`.
    pub log_level: Option<Level>,
}

/// Errors from building a [`Config`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The input path does not name a regular file.
    #[error("input is not a file: {0}")]
    NotAFile(PathBuf),
}

impl Config {
    /// Builds a configuration from command-line flags.
    ///
    /// `verbosity` counts `-v` flags on top of the default `WARN` level;
    /// `quiet` disables logging entirely.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAFile`] if `input` exists but is not a
    /// regular file.
    pub fn from_flags(input: Option<PathBuf>, verbosity: u8, quiet: bool) -> Result<Self, ConfigError> {
        if let Some(path) = &input {
            if path.exists() && !path.is_file() {
                return Err(ConfigError::NotAFile(path.clone()));
            }
        }

        let log_level = if quiet {
            None
        } else {
            Some(match verbosity {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            })
        };

        Ok(Self { input, log_level })
    }
}
