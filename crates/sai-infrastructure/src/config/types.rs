//! Configuration types
//!
//! Every section deserializes with `#[serde(default)]` so a TOML file only
//! needs the keys it wants to change.

use std::path::PathBuf;

use sai_application::MatchSettings;
use sai_application::ports::registry::{EmbeddingProviderConfig, VectorIndexProviderConfig};
use sai_domain::MatchThreshold;
use sai_domain::constants::{
    DEFAULT_FIND_ALL_K, DEFAULT_MATCH_THRESHOLD, DEFAULT_NAMESPACE, DEFAULT_REINDEX_CONCURRENCY,
    DEFAULT_TOP_K,
};
use sai_domain::error::Result;
use sai_providers::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, EMBEDDING_DIMENSION_DEFAULT, OPENAI_DEFAULT_MODEL,
};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMBEDDING_PROVIDER, DEFAULT_LOG_LEVEL, DEFAULT_VECTOR_INDEX_PROVIDER};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Embedding provider section
    pub embedding: EmbeddingConfig,
    /// Vector index provider section
    pub vector_index: VectorIndexConfig,
    /// Match engine tuning
    pub matching: MatchingConfig,
    /// Logging section
    pub logging: LoggingConfig,
}

/// Embedding provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name ("openai", "null")
    pub provider: String,
    /// Model identifier
    pub model: String,
    /// API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Output dimensionality; must match the vector index
    pub dimensions: usize,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: OPENAI_DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: None,
            dimensions: EMBEDDING_DIMENSION_DEFAULT,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl EmbeddingConfig {
    /// Registry configuration for this section
    pub fn registry_config(&self) -> EmbeddingProviderConfig {
        let mut config = EmbeddingProviderConfig::new(&self.provider)
            .with_model(&self.model)
            .with_dimensions(self.dimensions)
            .with_timeout_secs(self.timeout_secs);
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        config
    }
}

/// Vector index provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorIndexConfig {
    /// Registered provider name ("pinecone", "memory")
    pub provider: String,
    /// Index host, e.g. `https://my-index.svc.region.pinecone.io`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Namespace holding the item vectors
    pub namespace: String,
    /// API version header override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VectorIndexConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_VECTOR_INDEX_PROVIDER.to_string(),
            host: None,
            api_key: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            api_version: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl VectorIndexConfig {
    /// Registry configuration for this section
    pub fn registry_config(&self) -> VectorIndexProviderConfig {
        let mut config = VectorIndexProviderConfig::new(&self.provider)
            .with_namespace(&self.namespace)
            .with_timeout_secs(self.timeout_secs);
        if let Some(host) = &self.host {
            config = config.with_host(host);
        }
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(api_version) = &self.api_version {
            config = config.with_api_version(api_version);
        }
        config
    }
}

/// Match engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Confidence threshold in `[0, 1]`
    pub threshold: f64,
    /// Candidates requested by `find_best_match` when the caller passes none
    pub default_top_k: usize,
    /// Candidates requested by `find_all_above_threshold` when the caller passes none
    pub find_all_k: usize,
    /// In-flight items during concurrent reindexing
    pub reindex_concurrency: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            default_top_k: DEFAULT_TOP_K,
            find_all_k: DEFAULT_FIND_ALL_K,
            reindex_concurrency: DEFAULT_REINDEX_CONCURRENCY,
        }
    }
}

impl MatchingConfig {
    /// Engine settings for this section
    pub fn match_settings(&self) -> Result<MatchSettings> {
        Ok(MatchSettings::default()
            .with_threshold(MatchThreshold::new(self.threshold)?)
            .with_default_top_k(self.default_top_k)
            .with_find_all_k(self.find_all_k)
            .with_reindex_concurrency(self.reindex_concurrency))
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
