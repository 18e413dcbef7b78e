//! Configuration for the destiny numerology tools.
//!
//! A single TOML file configures logging, date validation and the prompt
//! versions available to report generation and chat consultation:
//!
//! ```toml
//! [logging]
//! filter = "info"
//! json = false
//!
//! [profile]
//! strict_dates = true
//!
//! [[prompts]]
//! kind = "report_gen"
//! version = "v1.1"
//! active = true
//! content_file = "prompts/report_v1_1.md"
//! ```
//!
//! The file is located by [`resolve_config_path`]; a missing file means
//! defaults.

pub mod error;
pub mod loader;

use std::path::PathBuf;

use destiny_prompt::{PromptKind, PromptRegistry, SystemPrompt};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use loader::{CONFIG_ENV, DEFAULT_CONFIG_FILE, load_config, resolve_config_path};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DestinyConfig {
    pub logging: LoggingConfig,
    pub profile: ProfileConfig,
    pub prompts: Vec<PromptEntry>,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON log lines instead of plain text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

/// `[profile]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Reject dates that do not exist on the calendar instead of computing
    /// on the raw digits.
    pub strict_dates: bool,
}

/// One `[[prompts]]` entry. Exactly one of `content` and `content_file`
/// must be set; `content_file` is relative to the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptEntry {
    pub kind: PromptKind,
    pub version: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_file: Option<PathBuf>,
}

impl DestinyConfig {
    /// Parse and validate TOML text. `content_file` entries are not read.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must not be empty".into()));
        }
        for (i, p) in self.prompts.iter().enumerate() {
            if p.version.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("prompts[{i}].version must not be empty")));
            }
            match (&p.content, &p.content_file) {
                (Some(_), None) | (None, Some(_)) => {}
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "prompts[{i}] needs exactly one of content or content_file"
                    )));
                }
            }
            if p.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!("prompts[{i}].content must not be empty")));
            }
        }
        for kind in destiny_prompt::ALL_PROMPT_KINDS {
            let active = self.prompts.iter().filter(|p| p.kind == kind && p.active).count();
            if active > 1 {
                return Err(ConfigError::Invalid(format!(
                    "{active} active {kind} prompts, at most one allowed"
                )));
            }
        }
        Ok(())
    }

    /// Build the prompt registry, saving entries in file order.
    ///
    /// Every entry must have inline content by now; [`load_config`] inlines
    /// `content_file` entries.
    pub fn prompt_registry(&self) -> Result<PromptRegistry, ConfigError> {
        let mut registry = PromptRegistry::new();
        for p in &self.prompts {
            let content = p.content.clone().ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "{} prompt {} has no inline content",
                    p.kind, p.version
                ))
            })?;
            let mut prompt = SystemPrompt::new(p.kind, p.version.clone(), content);
            prompt.is_active = p.active;
            registry.save(prompt)?;
        }
        Ok(registry)
    }
}
