//! Configuration management for refdocs.
//!
//! Parses `refdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `content.namespace`
//! - `paths.base_url`

mod expand;

use std::path::{Path, PathBuf};

use refdocs_nav::{CORE_NAMESPACE, ContentKind, OrganizeOptions, UNCATEGORIZED_LABEL};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override content kind.
    pub kind: Option<ContentKind>,
    /// Override library namespace.
    pub namespace: Option<String>,
    /// Override base URL of generated paths.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "refdocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content configuration (source directory is a relative string from TOML).
    content: ContentConfigRaw,
    /// Path generation configuration.
    pub paths: PathsConfig,
    /// Navigation tree configuration.
    pub tree: TreeConfig,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
    kind: ContentKind,
    namespace: String,
}

impl Default for ContentConfigRaw {
    fn default() -> Self {
        Self {
            source_dir: None,
            kind: ContentKind::Reference,
            namespace: CORE_NAMESPACE.to_owned(),
        }
    }
}

/// Resolved content configuration with an absolute source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Directory holding the content records.
    pub source_dir: PathBuf,
    /// Which sidebar the content feeds.
    pub kind: ContentKind,
    /// Library the items belong to.
    pub namespace: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("content"),
            kind: ContentKind::Reference,
            namespace: CORE_NAMESPACE.to_owned(),
        }
    }
}

/// Path generation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Prefix for every generated navigation path. Empty for site-relative paths.
    pub base_url: String,
}

/// Navigation tree configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Label of the group collecting items without a category.
    pub uncategorized_label: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            uncategorized_label: UNCATEGORIZED_LABEL.to_owned(),
        }
    }
}

impl TreeConfig {
    /// Organizer options for this configuration.
    #[must_use]
    pub fn organize_options(&self) -> OrganizeOptions {
        OrganizeOptions {
            uncategorized_label: self.uncategorized_label.clone(),
        }
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
        /// Config field path (e.g., "`paths.base_url`").
        field: String,
        /// Error message (e.g., "${`REFDOCS_BASE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `refdocs.toml` in current directory and parents.
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
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(kind) = settings.kind {
            self.content_resolved.kind = kind;
        }
        if let Some(namespace) = &settings.namespace {
            self.content_resolved.namespace.clone_from(namespace);
        }
        if let Some(base_url) = &settings.base_url {
            self.paths.base_url.clone_from(base_url);
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
            content: ContentConfigRaw::default(),
            paths: PathsConfig::default(),
            tree: TreeConfig::default(),
            content_resolved: ContentConfig {
                source_dir: base.join("content"),
                ..ContentConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.content_resolved.namespace, "content.namespace")?;
        if self.content_resolved.namespace.contains('/') {
            return Err(ConfigError::Validation(
                "content.namespace cannot contain '/'".to_owned(),
            ));
        }

        let base_url = &self.paths.base_url;
        if !base_url.is_empty()
            && !base_url.starts_with('/')
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "paths.base_url must be empty, start with '/', http:// or https://".to_owned(),
            ));
        }

        require_non_empty(&self.tree.uncategorized_label, "tree.uncategorized_label")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.content.namespace = expand::expand_env(&self.content.namespace, "content.namespace")?;
        self.paths.base_url = expand::expand_env(&self.paths.base_url, "paths.base_url")?;
        Ok(())
    }

    /// Resolve the source directory relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.content_resolved = ContentConfig {
            source_dir: config_dir.join(self.content.source_dir.as_deref().unwrap_or("content")),
            kind: self.content.kind,
            namespace: self.content.namespace.clone(),
        };
    }
}
