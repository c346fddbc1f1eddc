//! Vector Index Provider Registry

use std::sync::Arc;

use crate::ports::providers::VectorIndexProvider;

/// Configuration for vector index provider creation
#[derive(Debug, Clone, Default)]
pub struct VectorIndexProviderConfig {
    /// Provider name (e.g., "pinecone", "memory")
    pub provider: String,
    /// Index host URL
    pub host: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Namespace every operation is bound to
    pub namespace: Option<String>,
    /// Provider API version header value
    pub api_version: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl VectorIndexProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the index host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Registry entry for vector index providers
pub struct VectorIndexProviderEntry {
    /// Unique provider name (e.g., "pinecone", "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&VectorIndexProviderConfig) -> Result<Arc<dyn VectorIndexProvider>, String>,
}

#[linkme::distributed_slice]
pub static VECTOR_INDEX_PROVIDERS: [VectorIndexProviderEntry] = [..];

/// Resolve vector index provider by name from registry
pub fn resolve_vector_index_provider(
    config: &VectorIndexProviderConfig,
) -> Result<Arc<dyn VectorIndexProvider>, String> {
    let provider_name = &config.provider;

    for entry in VECTOR_INDEX_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = VECTOR_INDEX_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown vector index provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered vector index providers as (name, description) tuples
pub fn list_vector_index_providers() -> Vec<(&'static str, &'static str)> {
    VECTOR_INDEX_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
