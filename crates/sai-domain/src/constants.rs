//! Domain layer constants
//!
//! Defaults for the semantic match contract. Provider-specific constants
//! live in `sai_providers::constants`, configuration file names and
//! environment prefixes in `sai_infrastructure::constants`.

// ============================================================================
// MATCHING DOMAIN CONSTANTS
// ============================================================================

/// Default confidence threshold separating a confident match from a suggestion
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.75;

/// Default number of candidates requested by `find_best_match`
pub const DEFAULT_TOP_K: usize = 4;

/// Default number of candidates requested by `find_all_above_threshold`
pub const DEFAULT_FIND_ALL_K: usize = 10;

/// Default bounded concurrency for concurrent reindexing
pub const DEFAULT_REINDEX_CONCURRENCY: usize = 4;

// ============================================================================
// VECTOR INDEX DOMAIN CONSTANTS
// ============================================================================

/// Namespace holding inventory item vectors
pub const DEFAULT_NAMESPACE: &str = "inventory";

/// Metadata key: display name
pub const METADATA_NAME: &str = "name";

/// Metadata key: canonical embedding key
pub const METADATA_CANONICAL_NAME: &str = "canonical_name";

/// Metadata key: container id
pub const METADATA_BOX_ID: &str = "box_id";

/// Metadata key: container display name
pub const METADATA_BOX_NAME: &str = "box_name";
