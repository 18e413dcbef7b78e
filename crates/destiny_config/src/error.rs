//! Error types for configuration loading.

use std::path::PathBuf;

use destiny_prompt::PromptError;
use thiserror::Error;

/// Errors from locating, reading, parsing or validating configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A config or prompt file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or does not match the schema.
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The file parsed but its values are inconsistent.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// A prompt entry was refused by the registry.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}
