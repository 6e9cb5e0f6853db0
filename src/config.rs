//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bloodline/bloodline.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `BLOODLINE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::MILLENNIAL_THRESHOLD;

/// Unified configuration for bloodline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Conversion year used by `millennials` when no `--after` is given
    pub millennial_after: i32,
    /// Show conversion years in rendered trees
    pub show_years: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            millennial_after: MILLENNIAL_THRESHOLD,
            show_years: true,
        }
    }
}

/// Raw settings for intermediate parsing (None → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub millennial_after: Option<i32>,
    pub show_years: Option<bool>,
}

/// Get the XDG config directory for bloodline.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bloodline").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bloodline.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            millennial_after: overlay.millennial_after.unwrap_or(self.millennial_after),
            show_years: overlay.show_years.unwrap_or(self.show_years),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current, None)
    }

    /// Apply BLOODLINE_* environment variables as explicit overrides.
    ///
    /// `source` replaces the process environment, for tests.
    fn apply_env_overrides(
        mut settings: Self,
        source: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BLOODLINE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_int("millennial_after"))? {
            settings.millennial_after = i32::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("millennial_after out of range: {val}"),
            })?;
        }
        if let Some(val) = env_value(config.get_bool("show_years"))? {
            settings.show_years = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bloodline configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bloodline/bloodline.toml
#   File:   bloodline --config <file>
#   Env:    BLOODLINE_* environment variables (explicit overrides)

# Conversion year after which a descendant counts as a millennial
# millennial_after = 1980

# Show conversion years next to names in `bloodline tree`
# show_years = true
"#
        .to_string()
    }
}

/// An unset key is `None`; a value that fails to parse is an error.
fn env_value<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
