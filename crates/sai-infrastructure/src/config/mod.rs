//! Configuration management
//!
//! Layered configuration: compiled defaults, then a TOML file, then
//! `SAI_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::{AppConfig, EmbeddingConfig, LoggingConfig, MatchingConfig, VectorIndexConfig};
