//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in sai-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Default embedding dimension, matched to the inventory index
pub const EMBEDDING_DIMENSION_DEFAULT: usize = 512;

/// OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI default embedding model
pub const OPENAI_DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Models that accept the `dimensions` request field
pub const OPENAI_MODELS_WITH_DIMENSIONS: &[&str] =
    &["text-embedding-3-small", "text-embedding-3-large"];

/// Model name reported by the null provider
pub const NULL_EMBEDDING_MODEL: &str = "null-test";

// ============================================================================
// VECTOR INDEX PROVIDER CONSTANTS
// ============================================================================

/// Pinecone data plane API version
pub const PINECONE_API_VERSION: &str = "2025-04";

/// Pinecone authentication header
pub const PINECONE_API_KEY_HEADER: &str = "Api-Key";

/// Pinecone API version header
pub const PINECONE_API_VERSION_HEADER: &str = "X-Pinecone-API-Version";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default timeout for provider HTTP requests, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";
