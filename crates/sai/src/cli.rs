//! The `sai` command line
//!
//! Every command prints one JSON document on stdout; logs go to stderr.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use sai_application::ports::registry::{list_embedding_providers, list_vector_index_providers};
use sai_application::ports::services::{ReindexOutcome, SemanticMatchServiceInterface};
use sai_domain::canonicalize::{
    canonicalize, normalize_for_match, normalize_to_singular, normalize_to_singular_display,
};
use sai_domain::{Item, MatchThreshold, StorageBox};
use sai_infrastructure::bootstrap::build_match_service;
use sai_infrastructure::config::ConfigLoader;
use sai_infrastructure::logging::init_logging;

/// Command line interface for StorageAI
#[derive(Parser, Debug)]
#[command(name = "sai")]
#[command(about = "StorageAI - Semantic inventory matching")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured match threshold for this invocation
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Resolve a query to a confident match or suggestions
    Find {
        query: String,
        #[arg(long)]
        top_k: Option<usize>,
    },
    /// Only the confident match, with the top score
    FindTop { query: String },
    /// Every item scoring at least threshold + margin
    FindAll {
        query: String,
        #[arg(long)]
        k: Option<usize>,
        #[arg(long, default_value_t = 0.0)]
        margin: f64,
    },
    /// Raw ranked candidates without a threshold
    Candidates {
        query: String,
        #[arg(long, default_value_t = 5)]
        k: usize,
    },
    /// Index or re-index one item
    Index {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        box_id: String,
        #[arg(long, default_value = "")]
        box_name: String,
    },
    /// Remove one item from the index
    Delete { id: String },
    /// Re-index a whole inventory snapshot from a JSON file
    Reindex {
        inventory: PathBuf,
        /// Keep going past failures and report each one
        #[arg(long)]
        concurrent: bool,
    },
    /// Show the canonical forms of a name
    Canonicalize { text: String },
    /// List registered providers
    Providers,
}

impl Command {
    /// Whether the command talks to the providers
    pub fn needs_engine(&self) -> bool {
        !matches!(self, Self::Canonicalize { .. } | Self::Providers)
    }
}

/// Inventory snapshot read by `sai reindex`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub boxes: Vec<StorageBox>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Inventory {
    /// Read and parse an inventory JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse inventory file {}", path.display()))
    }
}

/// Run a parsed command line to completion
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output = if cli.command.needs_engine() {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &cli.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load()?;
        if let Some(threshold) = cli.threshold {
            config.matching.threshold = MatchThreshold::new(threshold)?.value();
        }
        init_logging(&config.logging)?;

        let engine = build_match_service(&config)?;
        execute(&engine, cli.command).await?
    } else {
        offline_output(&cli.command)
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Execute an engine command and return its JSON output
pub async fn execute(
    engine: &dyn SemanticMatchServiceInterface,
    command: Command,
) -> anyhow::Result<Value> {
    let output = match command {
        Command::Find { query, top_k } => {
            serde_json::to_value(engine.find_best_match(&query, top_k).await?)?
        }
        Command::FindTop { query } => {
            let (best_match, best_score) = engine.find_top_match(&query).await?;
            json!({ "best_match": best_match, "best_score": best_score })
        }
        Command::FindAll { query, k, margin } => {
            serde_json::to_value(engine.find_all_above_threshold(&query, k, margin).await?)?
        }
        Command::Candidates { query, k } => serde_json::to_value(engine.top_k(&query, k).await?)?,
        Command::Index {
            id,
            name,
            box_id,
            box_name,
        } => {
            let item = Item::new(id, name, box_id)?;
            engine.index_item(&item, &box_name).await?;
            json!({ "indexed": item.id, "canonical_name": item.resolved_canonical_name() })
        }
        Command::Delete { id } => {
            engine.delete_item(&id).await;
            json!({ "deleted": id })
        }
        Command::Reindex {
            inventory,
            concurrent,
        } => {
            let inventory = Inventory::from_file(&inventory)?;
            if concurrent {
                let outcomes = engine
                    .reindex_all_concurrent(&inventory.items, &inventory.boxes)
                    .await;
                reindex_report(&outcomes)
            } else {
                let indexed = engine
                    .reindex_all(&inventory.items, &inventory.boxes)
                    .await?;
                json!({ "indexed": indexed, "failed": [] })
            }
        }
        other @ (Command::Canonicalize { .. } | Command::Providers) => offline_output(&other),
    };
    Ok(output)
}

/// Output of the commands that never touch a provider
pub fn offline_output(command: &Command) -> Value {
    match command {
        Command::Canonicalize { text } => json!({
            "input": text,
            "canonical": canonicalize(text),
            "singular": normalize_to_singular(text),
            "display": normalize_to_singular_display(text),
            "match_key": normalize_for_match(text),
        }),
        Command::Providers => json!({
            "embedding": provider_list(list_embedding_providers()),
            "vector_index": provider_list(list_vector_index_providers()),
        }),
        _ => Value::Null,
    }
}

fn provider_list(entries: Vec<(&'static str, &'static str)>) -> Vec<Value> {
    entries
        .into_iter()
        .map(|(name, description)| json!({ "name": name, "description": description }))
        .collect()
}

fn reindex_report(outcomes: &[ReindexOutcome]) -> Value {
    let failed: Vec<Value> = outcomes
        .iter()
        .filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|e| json!({ "item_id": outcome.item_id, "error": e.to_string() }))
        })
        .collect();
    json!({
        "indexed": outcomes.len() - failed.len(),
        "failed": failed,
    })
}
