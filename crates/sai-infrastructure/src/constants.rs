//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Matching defaults are defined in `sai_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sai.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sai";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SAI";

/// Separator between nested keys in environment variable names
///
/// `SAI_MATCHING__THRESHOLD=0.8` sets `matching.threshold`.
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";

/// Vector index provider used when none is configured
pub const DEFAULT_VECTOR_INDEX_PROVIDER: &str = "pinecone";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "SAI_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used for the rolling log file when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "sai";
