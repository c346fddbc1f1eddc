//! Application Layer - StorageAI
//!
//! Orchestrates the domain types and provider ports into the semantic match
//! engine the chat and intent handlers call.
//!
//! ## Use Cases
//!
//! - Indexing and removing inventory items in the vector index
//! - Confident match / "did you mean" resolution for free-text queries
//! - Full and concurrent reindexing of an inventory snapshot
//!
//! ## Ports (Interfaces)
//!
//! - `ports::providers::*`: Embedding and vector index provider contracts
//! - `ports::registry::*`: linkme registries the provider crate fills in
//! - `ports::services::*`: The match engine interface
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `sai-domain`: For domain entities, value objects, and core business rules
//! - Pure Rust libraries for async and logging

pub mod ports;
pub mod settings;
pub mod use_cases;

pub use ports::*;
pub use settings::MatchSettings;
pub use use_cases::*;
