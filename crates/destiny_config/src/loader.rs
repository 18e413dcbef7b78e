//! Locating and reading the configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::DestinyConfig;
use crate::error::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DESTINY_CONFIG";

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "destiny.toml";

/// Pick the config file to load.
///
/// Order: `explicit` path, then `env_value` (the [`CONFIG_ENV`] variable),
/// then [`DEFAULT_CONFIG_FILE`] in `cwd` if it exists. `None` means run on
/// defaults. An explicit or environment path is returned even if missing,
/// so that loading reports the error instead of silently using defaults.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}

/// Load configuration from `path`, or defaults when `path` is `None`.
///
/// `content_file` prompt entries are read relative to the config file's
/// directory and inlined as `content`.
pub fn load_config(path: Option<&Path>) -> Result<DestinyConfig, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(DestinyConfig::default());
    };

    let contents = read_file(path)?;
    let mut config = DestinyConfig::from_toml_str(&contents)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    inline_prompt_files(&mut config, base)?;

    tracing::debug!(
        path = %path.display(),
        prompts = config.prompts.len(),
        strict_dates = config.profile.strict_dates,
        "loaded config"
    );
    Ok(config)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn inline_prompt_files(config: &mut DestinyConfig, base: &Path) -> Result<(), ConfigError> {
    for entry in &mut config.prompts {
        if let Some(rel) = entry.content_file.take() {
            let file = base.join(rel);
            let text = read_file(&file)?;
            if text.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "prompt file {} is empty",
                    file.display()
                )));
            }
            entry.content = Some(text);
        }
    }
    Ok(())
}
