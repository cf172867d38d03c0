use std::path::PathBuf;

use thiserror::Error;

/// Failures loading the guild settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read from disk.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid YAML or does not match the expected shape.
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The settings parsed but violate a constraint (colour format, question count, ...).
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
