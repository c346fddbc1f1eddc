//! Tests for sequential and concurrent reindexing

use std::sync::Arc;

use sai_application::ports::services::SemanticMatchServiceInterface;
use sai_application::{MatchSettings, SemanticMatchService};
use sai_domain::error::Error;
use sai_domain::{Item, StorageBox};

use crate::stubs::{StubEmbeddingProvider, StubVectorIndex};

fn inventory() -> (Vec<Item>, Vec<StorageBox>) {
    let boxes = vec![
        StorageBox::new("box-a", "BOX A").unwrap(),
        StorageBox::new("box-b", "Garage Shelf").unwrap(),
    ];
    let items = vec![
        Item::new("1", "AA Batteries", "box-a").unwrap(),
        Item::new("2", "9V Battery", "box-b").unwrap(),
        Item::new("3", "Scissors", "box-a").unwrap(),
        Item::new("4", "Duct Tape", "box-b").unwrap(),
        Item::new("5", "Zip Ties", "box-a").unwrap(),
    ];
    (items, boxes)
}

fn service(index: Arc<StubVectorIndex>) -> SemanticMatchService {
    SemanticMatchService::new(
        Arc::new(StubEmbeddingProvider::new(3)),
        index,
        MatchSettings::default().with_reindex_concurrency(2),
    )
}

#[tokio::test]
async fn test_reindex_all_upserts_every_item_with_its_box_name() {
    let index = Arc::new(StubVectorIndex::new());
    let (items, boxes) = inventory();

    let indexed = service(index.clone()).reindex_all(&items, &boxes).await.unwrap();

    assert_eq!(indexed, 5);
    assert_eq!(index.upsert_calls(), 5);
    let stored: Vec<_> = index
        .upserted()
        .into_iter()
        .map(|record| (record.id, record.metadata.box_name))
        .collect();
    assert_eq!(
        stored,
        vec![
            ("1".to_string(), "BOX A".to_string()),
            ("2".to_string(), "Garage Shelf".to_string()),
            ("3".to_string(), "BOX A".to_string()),
            ("4".to_string(), "Garage Shelf".to_string()),
            ("5".to_string(), "BOX A".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_reindex_all_unknown_box_gets_empty_name() {
    let index = Arc::new(StubVectorIndex::new());
    let items = vec![Item::new("1", "Tape", "box-gone").unwrap()];

    service(index.clone()).reindex_all(&items, &[]).await.unwrap();

    assert_eq!(index.upserted()[0].metadata.box_name, "");
    assert_eq!(index.upserted()[0].metadata.box_id, "box-gone");
}

#[tokio::test]
async fn test_reindex_all_fails_fast() {
    let index = Arc::new(StubVectorIndex::new().failing_upsert_for("3"));
    let (items, boxes) = inventory();

    let err = service(index.clone())
        .reindex_all(&items, &boxes)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::IndexWrite { status: 503, .. }));
    assert_eq!(index.upsert_calls(), 3);
    let ids: Vec<_> = index.upserted().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[tokio::test]
async fn test_reindex_all_is_idempotent() {
    let index = Arc::new(StubVectorIndex::new());
    let (items, boxes) = inventory();
    let service = service(index.clone());

    service.reindex_all(&items, &boxes).await.unwrap();
    service.reindex_all(&items, &boxes).await.unwrap();

    assert_eq!(index.upsert_calls(), 10);
    assert_eq!(index.upserted().len(), 5);
}

#[tokio::test]
async fn test_reindex_concurrent_collects_per_item_results_in_order() {
    let index = Arc::new(StubVectorIndex::new().failing_upsert_for("3"));
    let (items, boxes) = inventory();

    let outcomes = service(index.clone())
        .reindex_all_concurrent(&items, &boxes)
        .await;

    let ids: Vec<_> = outcomes.iter().map(|o| o.item_id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    let ok: Vec<_> = outcomes.iter().map(|o| o.is_ok()).collect();
    assert_eq!(ok, [true, true, false, true, true]);
    assert!(matches!(
        outcomes[2].result,
        Err(Error::IndexWrite { status: 503, .. })
    ));

    assert_eq!(index.upsert_calls(), 5);
    assert_eq!(index.upserted().len(), 4);
}

#[tokio::test]
async fn test_reindex_all_runs_one_upsert_at_a_time() {
    let index = Arc::new(StubVectorIndex::new());
    let (items, boxes) = inventory();

    service(index.clone()).reindex_all(&items, &boxes).await.unwrap();

    assert_eq!(index.peak_upserts_in_flight(), 1);
}

#[tokio::test]
async fn test_reindex_concurrent_respects_concurrency_bound() {
    let index = Arc::new(StubVectorIndex::new());
    let (items, boxes) = inventory();

    let outcomes = service(index.clone())
        .reindex_all_concurrent(&items, &boxes)
        .await;

    assert!(outcomes.iter().all(|o| o.is_ok()));
    assert_eq!(index.upsert_calls(), 5);
    assert_eq!(index.peak_upserts_in_flight(), 2);
}

#[tokio::test]
async fn test_reindex_concurrent_reads_concurrency_from_settings() {
    let index = Arc::new(StubVectorIndex::new());
    let (items, boxes) = inventory();
    let service = service(index.clone());
    service.replace_settings(MatchSettings::default().with_reindex_concurrency(4));

    service.reindex_all_concurrent(&items, &boxes).await;

    assert_eq!(index.peak_upserts_in_flight(), 4);
}

#[tokio::test]
async fn test_reindex_concurrent_resolves_box_names() {
    let index = Arc::new(StubVectorIndex::new());
    let (items, boxes) = inventory();

    let outcomes = service(index.clone())
        .reindex_all_concurrent(&items, &boxes)
        .await;

    assert!(outcomes.iter().all(|o| o.is_ok()));
    let mut stored: Vec<_> = index
        .upserted()
        .into_iter()
        .map(|record| (record.id, record.metadata.box_name))
        .collect();
    stored.sort();
    assert_eq!(stored[1], ("2".to_string(), "Garage Shelf".to_string()));
    assert_eq!(stored[4], ("5".to_string(), "BOX A".to_string()));
}

#[tokio::test]
async fn test_reindex_empty_inventory() {
    let index = Arc::new(StubVectorIndex::new());
    let service = service(index.clone());

    assert_eq!(service.reindex_all(&[], &[]).await.unwrap(), 0);
    assert!(service.reindex_all_concurrent(&[], &[]).await.is_empty());
    assert_eq!(index.upsert_calls(), 0);
}
