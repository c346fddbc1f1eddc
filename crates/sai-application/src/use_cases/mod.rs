//! Application use case implementations

pub mod semantic_match_service;

pub use semantic_match_service::SemanticMatchService;
