//! # StorageAI
//!
//! Semantic inventory matching: resolve free-text item references such as
//! "the AA batteries" to stored inventory items, with a confidence
//! threshold separating a confident match from "did you mean" suggestions.
//!
//! ## Example
//!
//! ```ignore
//! use sai::infrastructure::{ConfigLoader, build_match_service};
//! use sai::application::SemanticMatchServiceInterface;
//!
//! let config = ConfigLoader::new().load()?;
//! let engine = build_match_service(&config)?;
//! let result = engine.find_best_match("aa batteries", None).await?;
//! if let Some(item) = result.best_match {
//!     println!("{} is in {}", item.name, item.box_name);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, canonicalization, provider ports
//! - `application` - The semantic match engine and provider registry
//! - `providers` - OpenAI, Pinecone and offline adapters
//! - `infrastructure` - Configuration, logging and bootstrap
//! - `cli` - The `sai` command line

/// Domain layer - core business logic and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use sai_domain::*;
}

/// Application layer - match engine and registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use sai_application::*;
}

/// Provider adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use sai_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use sai_infrastructure::*;
}

pub mod cli;

pub use sai_application::{SemanticMatchService, SemanticMatchServiceInterface};
pub use sai_domain::{Error, Item, MatchResult, Result, StorageBox};
