//! StorageAI - Entry Point
//!
//! Lives in the `sai` facade crate next to the library so the binary and the
//! public API share one name.

// Force-link sai-providers to ensure linkme registrations are included
extern crate sai_providers;

use clap::Parser;
use sai::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
