//! CLI parsing and command execution against offline providers

use std::sync::Arc;

use clap::Parser;
use sai::cli::{Cli, Command, execute, offline_output};
use sai::providers::embedding::NullEmbeddingProvider;
use sai::providers::vector_index::InMemoryVectorIndexProvider;
use sai::SemanticMatchService;
use serde_json::json;
use tempfile::TempDir;

fn offline_engine() -> SemanticMatchService {
    SemanticMatchService::with_default_settings(
        Arc::new(NullEmbeddingProvider::new(32)),
        Arc::new(InMemoryVectorIndexProvider::new("inventory")),
    )
}

#[test]
fn test_parse_find_with_global_config() {
    let cli = Cli::try_parse_from([
        "sai", "find", "aa batteries", "--top-k", "3", "--config", "/tmp/sai.toml",
    ])
    .unwrap();

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/sai.toml")));
    assert_eq!(
        cli.command,
        Command::Find {
            query: "aa batteries".to_string(),
            top_k: Some(3)
        }
    );
    assert!(cli.command.needs_engine());
}

#[test]
fn test_parse_find_all_defaults_margin() {
    let cli = Cli::try_parse_from(["sai", "find-all", "tape"]).unwrap();
    assert_eq!(
        cli.command,
        Command::FindAll {
            query: "tape".to_string(),
            k: None,
            margin: 0.0
        }
    );
}

#[test]
fn test_parse_rejects_missing_subcommand() {
    assert!(Cli::try_parse_from(["sai"]).is_err());
}

#[test]
fn test_offline_commands_skip_engine() {
    let command = Command::Canonicalize {
        text: "the AA Batteries".to_string(),
    };
    assert!(!command.needs_engine());
    assert!(!Command::Providers.needs_engine());

    let output = offline_output(&command);
    assert_eq!(output["canonical"], "the aa batteries");
    assert_eq!(output["singular"], "aa battery");
    assert_eq!(output["display"], "AA battery");
}

#[test]
fn test_providers_listing() {
    let output = offline_output(&Command::Providers);
    let names: Vec<&str> = output["embedding"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|entry| entry["name"].as_str())
        .collect();

    assert!(names.contains(&"openai"));
    assert!(names.contains(&"null"));
}

#[tokio::test]
async fn test_index_then_find() {
    let engine = offline_engine();

    let indexed = execute(
        &engine,
        Command::Index {
            id: "item-1".to_string(),
            name: "Duct Tapes".to_string(),
            box_id: "box-1".to_string(),
            box_name: "BOX A".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(indexed, json!({ "indexed": "item-1", "canonical_name": "duct tape" }));

    let found = execute(
        &engine,
        Command::Find {
            query: "duct tape".to_string(),
            top_k: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(found["best_match"]["id"], "item-1");
    assert_eq!(found["best_match"]["box_name"], "BOX A");
}

#[tokio::test]
async fn test_blank_find_is_empty_result() {
    let engine = offline_engine();

    let found = execute(
        &engine,
        Command::Find {
            query: "   ".to_string(),
            top_k: None,
        },
    )
    .await
    .unwrap();

    assert!(found["best_match"].is_null());
    assert_eq!(found["suggestions"], json!([]));
}

#[tokio::test]
async fn test_reindex_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(
        &path,
        json!({
            "boxes": [{ "id": "box-1", "name": "BOX A" }],
            "items": [
                { "id": "item-1", "name": "Scissors", "box_id": "box-1" },
                { "id": "item-2", "name": "Glue sticks", "box_id": "box-1", "quantity": 3 }
            ]
        })
        .to_string(),
    )
    .unwrap();
    let engine = offline_engine();

    for concurrent in [false, true] {
        let report = execute(
            &engine,
            Command::Reindex {
                inventory: path.clone(),
                concurrent,
            },
        )
        .await
        .unwrap();
        assert_eq!(report, json!({ "indexed": 2, "failed": [] }));
    }
}

#[tokio::test]
async fn test_reindex_missing_file_fails() {
    let engine = offline_engine();

    let result = execute(
        &engine,
        Command::Reindex {
            inventory: "/nonexistent/inventory.json".into(),
            concurrent: false,
        },
    )
    .await;

    assert!(result.is_err());
}
