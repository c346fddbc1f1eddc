//! Common helpers for embedding providers

use std::time::Duration;

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// Common constructor patterns used by embedding providers
pub mod constructor {
    /// Template for validating and normalizing API keys
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Template for validating and normalizing URLs
    ///
    /// Blank URLs count as absent; trailing slashes are dropped.
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }
}

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS);

/// Truncate or zero-pad a vector to exactly `dimensions` values
pub fn fit_to_dimensions(mut vector: Vec<f32>, dimensions: usize) -> Vec<f32> {
    vector.resize(dimensions, 0.0);
    vector
}
