use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Geography dataset settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Page text
    #[serde(default)]
    pub ui: UiConfig,

    /// Location route settings
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding `countries.json` and `cities.json`.
    /// When unset the embedded dataset is used.
    pub dataset_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_title() -> String {
    "Weather AI".to_string()
}

fn default_subtitle() -> String {
    "Pick a country and a city to see its weather".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Path prefix of the location page (e.g. `/location`)
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_base_path() -> String {
    "/location".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.display().to_string()),
            _ => ConfigError::Io(format!("{}: {}", path.display(), e)),
        })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))
    }

    /// Validate a loaded configuration, logging warnings and failing on errors.
    pub fn into_validated(self) -> Result<(Self, ValidationResult)> {
        let validation = self.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((self, validation))
    }

    /// Load configuration from the default location and validate it
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        Self::load()?.into_validated()
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        let base = &self.navigation.base_path;
        if !base.starts_with('/') {
            result.add_error("navigation.base_path", "Base path must start with '/'");
        } else if base.len() > 1 && base.ends_with('/') {
            result.add_error("navigation.base_path", "Base path must not end with '/'");
        } else if base == "/" {
            result.add_error("navigation.base_path", "Base path cannot be the root path");
        }

        if self.ui.title.trim().is_empty() {
            result.add_warning("ui.title", "Title is empty");
        }

        if let Some(dir) = &self.catalog.dataset_dir {
            if !dir.is_dir() {
                result.add_error(
                    "catalog.dataset_dir",
                    format!("Path is not a directory: {}", dir.display()),
                );
            }
        }

        result
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_error = |e: std::io::Error| ConfigError::Io(format!("{}: {}", path.display(), e));

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(format!("serialize: {e}")))?;

        std::fs::write(path, contents).map_err(io_error)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound("platform config directory".to_string()))?
            .join("weatherai");

        Ok(config_dir.join("config.toml"))
    }
}
