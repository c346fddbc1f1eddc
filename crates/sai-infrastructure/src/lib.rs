//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for StorageAI.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `SAI_` environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension trait for foreign errors |
//! | [`bootstrap`] | Provider resolution and engine construction |
//! | [`constants`] | Configuration and logging constants |

// Links the provider crate so its registry entries are present.
extern crate sai_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::build_match_service;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
