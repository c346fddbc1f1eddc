//! OpenAI embedding provider tests against a mock HTTP server

use std::time::Duration;

use mockito::Matcher;
use reqwest::Client;
use sai_domain::error::Error;
use sai_domain::ports::providers::EmbeddingProvider;
use sai_providers::embedding::OpenAIEmbeddingProvider;
use serde_json::json;

fn provider(base_url: String, model: &str, dimensions: usize) -> OpenAIEmbeddingProvider {
    OpenAIEmbeddingProvider::new(
        "sk-test".to_string(),
        Some(base_url),
        model.to_string(),
        dimensions,
        Duration::from_secs(5),
        Client::new(),
    )
}

fn texts(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[tokio::test]
async fn test_shuffled_response_is_reordered_by_index() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "object": "list",
                "data": [
                    {"object": "embedding", "index": 2, "embedding": [3.0, 3.0]},
                    {"object": "embedding", "index": 0, "embedding": [1.0, 1.0]},
                    {"object": "embedding", "index": 1, "embedding": [2.0, 2.0]}
                ],
                "model": "text-embedding-3-small"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let embeddings = provider(server.url(), "text-embedding-3-small", 2)
        .embed_batch(&texts(&["a", "b", "c"]))
        .await
        .unwrap();

    let vectors: Vec<_> = embeddings.iter().map(|e| e.vector.clone()).collect();
    assert_eq!(vectors, vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_shape_and_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::Json(json!({
            "model": "text-embedding-3-small",
            "input": ["aa battery", "scissor"],
            "dimensions": 4,
            "encoding_format": "float"
        })))
        .with_status(200)
        .with_body(
            json!({"data": [
                {"index": 0, "embedding": [0.1, 0.2, 0.3, 0.4]},
                {"index": 1, "embedding": [0.5, 0.6, 0.7, 0.8]}
            ]})
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let embeddings = provider(server.url(), "text-embedding-3-small", 4)
        .embed_batch(&texts(&["aa battery", "scissor"]))
        .await
        .unwrap();

    assert_eq!(embeddings.len(), 2);
    assert_eq!(embeddings[0].dimensions, 4);
    assert_eq!(embeddings[0].model, "text-embedding-3-small");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_legacy_model_omits_dimensions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .match_body(Matcher::Json(json!({
            "model": "text-embedding-ada-002",
            "input": ["tape"],
            "encoding_format": "float"
        })))
        .with_status(200)
        .with_body(json!({"data": [{"index": 0, "embedding": [1.0, 0.0, 0.0]}]}).to_string())
        .create_async()
        .await;

    let embedding = provider(server.url(), "text-embedding-ada-002", 3)
        .embed("tape")
        .await
        .unwrap();

    assert_eq!(embedding.vector, vec![1.0, 0.0, 0.0]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_vectors_are_fitted_to_configured_dimensions() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(json!({"data": [{"index": 0, "embedding": [1.0, 2.0, 3.0, 4.0]}]}).to_string())
        .expect(2)
        .create_async()
        .await;

    let truncated = provider(server.url(), "custom-model", 2)
        .embed("x")
        .await
        .unwrap();
    assert_eq!(truncated.vector, vec![1.0, 2.0]);

    let padded = provider(server.url(), "custom-model", 6)
        .embed("x")
        .await
        .unwrap();
    assert_eq!(padded.vector, vec![1.0, 2.0, 3.0, 4.0, 0.0, 0.0]);
}

#[tokio::test]
async fn test_error_status_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/embeddings")
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
        .create_async()
        .await;

    let err = provider(server.url(), "text-embedding-3-small", 4)
        .embed("x")
        .await
        .unwrap_err();

    match &err {
        Error::EmbeddingService { status, body } => {
            assert_eq!(*status, 429);
            assert_eq!(body, r#"{"error":{"message":"Rate limit reached"}}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_client_error_is_not_retryable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/embeddings")
        .with_status(401)
        .with_body("invalid api key")
        .create_async()
        .await;

    let err = provider(server.url(), "text-embedding-3-small", 4)
        .embed("x")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_count_mismatch_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(json!({"data": [{"index": 0, "embedding": [1.0]}]}).to_string())
        .create_async()
        .await;

    let err = provider(server.url(), "custom-model", 1)
        .embed_batch(&texts(&["a", "b"]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Embedding { .. }));
}

#[tokio::test]
async fn test_out_of_range_index_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(
            json!({"data": [
                {"index": 0, "embedding": [1.0]},
                {"index": 5, "embedding": [2.0]}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let err = provider(server.url(), "custom-model", 1)
        .embed_batch(&texts(&["a", "b"]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Embedding { .. }));
}

#[tokio::test]
async fn test_malformed_body_is_an_embedding_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = provider(server.url(), "custom-model", 1)
        .embed("a")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Embedding { .. }));
}

#[tokio::test]
async fn test_empty_batch_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .expect(0)
        .create_async()
        .await;

    let err = provider(server.url(), "text-embedding-3-small", 4)
        .embed_batch(&[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    let err = provider("http://127.0.0.1:1".to_string(), "text-embedding-3-small", 4)
        .embed("x")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network { .. }));
    assert!(err.is_retryable());
}
