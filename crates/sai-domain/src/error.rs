//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for StorageAI
///
/// Callers must be able to tell "the pipeline failed" apart from "no
/// confident match": the latter is a valid [`crate::MatchResult`], never an
/// error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The embedding provider answered with a non-success HTTP status
    #[error("Embedding service returned HTTP {status}: {body}")]
    EmbeddingService {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Embedding provider returned something we could not use
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding provider error
        message: String,
    },

    /// The vector index rejected an upsert or delete
    #[error("Vector index write failed with HTTP {status}: {body}")]
    IndexWrite {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The vector index rejected a query
    #[error("Vector index query failed with HTTP {status}: {body}")]
    IndexQuery {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Vector index returned something we could not use
    #[error("Vector index error: {message}")]
    VectorIndex {
        /// Description of the vector index error
        message: String,
    },

    /// Transport-level failure (no HTTP status available)
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Provider error creation methods
impl Error {
    /// Create an embedding service error from an HTTP status and body
    pub fn embedding_service<S: Into<String>>(status: u16, body: S) -> Self {
        Self::EmbeddingService {
            status,
            body: body.into(),
        }
    }

    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create an index write error from an HTTP status and body
    pub fn index_write<S: Into<String>>(status: u16, body: S) -> Self {
        Self::IndexWrite {
            status,
            body: body.into(),
        }
    }

    /// Create an index query error from an HTTP status and body
    pub fn index_query<S: Into<String>>(status: u16, body: S) -> Self {
        Self::IndexQuery {
            status,
            body: body.into(),
        }
    }

    /// Create a vector index error
    pub fn vector_index<S: Into<String>>(message: S) -> Self {
        Self::VectorIndex {
            message: message.into(),
        }
    }
}

// Network error creation methods
impl Error {
    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// HTTP status carried by provider errors, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::EmbeddingService { status, .. }
            | Self::IndexWrite { status, .. }
            | Self::IndexQuery { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller-side retry has a reasonable chance of succeeding
    ///
    /// Nothing in StorageAI retries on its own; this only classifies.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            _ => matches!(self.status(), Some(429 | 500..=599)),
        }
    }
}
