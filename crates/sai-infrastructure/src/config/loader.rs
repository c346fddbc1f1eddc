//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sai_domain::MatchThreshold;
use sai_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `SAI_MATCHING__THRESHOLD`)
    ///
    /// An explicit path that does not exist is a configuration error.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_NESTING_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    ///
    /// The file may hold API keys, so on Unix it is restricted to the owner.
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let path = path.as_ref();
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path, toml_string)
            .io_context(format!("Failed to write config file {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
                .io_context(format!("Failed to restrict permissions on {}", path.display()))?;
        }

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Provider credentials are not checked here; the provider factories reject
/// missing keys when the engine is built.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_embedding_config(config)?;
    validate_vector_index_config(config)?;
    validate_matching_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    if config.embedding.provider.trim().is_empty() {
        return Err(Error::config("Embedding provider cannot be empty"));
    }
    if config.embedding.dimensions == 0 {
        return Err(Error::config("Embedding dimensions cannot be 0"));
    }
    Ok(())
}

fn validate_vector_index_config(config: &AppConfig) -> Result<()> {
    if config.vector_index.provider.trim().is_empty() {
        return Err(Error::config("Vector index provider cannot be empty"));
    }
    if config.vector_index.namespace.trim().is_empty() {
        return Err(Error::config("Vector index namespace cannot be empty"));
    }
    Ok(())
}

fn validate_matching_config(config: &AppConfig) -> Result<()> {
    let matching = &config.matching;
    MatchThreshold::new(matching.threshold).map_err(|e| Error::config(e.to_string()))?;
    if matching.default_top_k == 0 {
        return Err(Error::config("Default top-k cannot be 0"));
    }
    if matching.find_all_k == 0 {
        return Err(Error::config("Find-all k cannot be 0"));
    }
    if matching.reindex_concurrency == 0 {
        return Err(Error::config("Reindex concurrency cannot be 0"));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set embedding configuration
    pub fn with_embedding(mut self, embedding: crate::config::EmbeddingConfig) -> Self {
        self.config.embedding = embedding;
        self
    }

    /// Set vector index configuration
    pub fn with_vector_index(mut self, vector_index: crate::config::VectorIndexConfig) -> Self {
        self.config.vector_index = vector_index;
        self
    }

    /// Set matching configuration
    pub fn with_matching(mut self, matching: crate::config::MatchingConfig) -> Self {
        self.config.matching = matching;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
