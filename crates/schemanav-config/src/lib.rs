//! Configuration management for schemanav.
//!
//! Parses `schemanav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [schemas]
//! source_dir = "schemas"
//! targets = ["EntityType", "Form", "Role", "Screen", "Step", "ValueSet"]
//!
//! [routing]
//! base_path = "${SCHEMANAV_BASE_PATH:-/}"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `routing.base_path` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override schema source directory.
    pub source_dir: Option<PathBuf>,
    /// Override application base path.
    pub base_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "schemanav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema configuration (paths are relative strings from TOML).
    schemas: SchemasConfigRaw,
    /// Routing configuration.
    pub routing: RoutingConfig,

    /// Resolved schema configuration (set after loading).
    #[serde(skip)]
    pub schemas_resolved: SchemasConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw schema configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SchemasConfigRaw {
    source_dir: Option<String>,
    targets: Option<Vec<String>>,
}

/// Resolved schema configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SchemasConfig {
    /// Directory holding `<target>.json` documents.
    pub source_dir: PathBuf,
    /// Documents to load, in display order. Empty means every document in
    /// `source_dir`.
    pub targets: Vec<String>,
}

/// Routing configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// URL path the application is mounted under (e.g. `/app/v1`).
    pub base_path: String,
}

impl RoutingConfig {
    /// Base path split into URL segments.
    ///
    /// `"/app/v1"` becomes `["app", "v1"]`; an empty or `/` base has no
    /// segments.
    #[must_use]
    pub fn base_segments(&self) -> Vec<&str> {
        self.base_path.split('/').filter(|s| !s.is_empty()).collect()
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`routing.base_path`").
        field: String,
        /// Error message (e.g., "${`BASE_PATH`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `schemanav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.schemas_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base_path) = &settings.base_path {
            self.routing.base_path.clone_from(base_path);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            schemas: SchemasConfigRaw::default(),
            routing: RoutingConfig::default(),
            schemas_resolved: SchemasConfig {
                source_dir: base.join("schemas"),
                targets: Vec::new(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_targets()?;
        self.validate_routing()?;
        Ok(())
    }

    /// Validate schema target names.
    fn validate_targets(&self) -> Result<(), ConfigError> {
        for target in &self.schemas_resolved.targets {
            if target.is_empty() {
                return Err(ConfigError::Validation(
                    "schemas.targets cannot contain empty names".to_owned(),
                ));
            }
            if target.contains(['/', '\\']) || target.contains("..") {
                return Err(ConfigError::Validation(format!(
                    "schemas.targets entry '{target}' must be a plain document name"
                )));
            }
        }
        Ok(())
    }

    /// Validate routing configuration.
    fn validate_routing(&self) -> Result<(), ConfigError> {
        let base_path = &self.routing.base_path;
        if !base_path.is_empty() && !base_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "routing.base_path must start with '/', got '{base_path}'"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.routing.base_path = expand::expand_base_path(&self.routing.base_path)?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.schemas_resolved = SchemasConfig {
            source_dir: config_dir.join(self.schemas.source_dir.as_deref().unwrap_or("schemas")),
            targets: self.schemas.targets.clone().unwrap_or_default(),
        };
    }
}
