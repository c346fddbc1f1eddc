//! In-crate port stubs
//!
//! Deterministic stand-ins for the embedding provider and vector index that
//! record every call so tests can assert on what the engine sent.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sai_application::ports::providers::{EmbeddingProvider, VectorIndexProvider};
use sai_domain::error::{Error, Result};
use sai_domain::{Embedding, ItemMetadata, SimilarityScore, VectorMatch, VectorRecord};

// ============================================================================
// Embedding stub
// ============================================================================

/// Maps known texts to hand-picked vectors; unknown texts embed to zeros
pub struct StubEmbeddingProvider {
    dimensions: usize,
    vectors: HashMap<String, Vec<f32>>,
    fail_status: Option<u16>,
    texts: Mutex<Vec<String>>,
}

impl StubEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            vectors: HashMap::new(),
            fail_status: None,
            texts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::new(3)
        }
    }

    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// Every text the engine asked to embed, in call order
    pub fn embedded_texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.texts.lock().unwrap().extend(texts.iter().cloned());
        if let Some(status) = self.fail_status {
            return Err(Error::embedding_service(status, "stub failure"));
        }
        Ok(texts
            .iter()
            .map(|text| Embedding {
                vector: self
                    .vectors
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| vec![0.0; self.dimensions]),
                model: "stub".to_string(),
                dimensions: self.dimensions,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

// ============================================================================
// Vector index stub
// ============================================================================

/// Records upserts/queries/deletes and answers queries with fixed scores
///
/// With `with_hits` the query answer is a fixed ranked list. With `scoring`
/// the answer is built from whatever was upserted, each id carrying the
/// configured score, so metadata round-trips through the stub.
#[derive(Default)]
pub struct StubVectorIndex {
    hits: Vec<VectorMatch>,
    scores_by_id: HashMap<String, f64>,
    fail_delete: bool,
    fail_upsert_for: Option<String>,
    upserts: Mutex<Vec<VectorRecord>>,
    upsert_calls: AtomicUsize,
    upserts_in_flight: AtomicUsize,
    peak_upserts_in_flight: AtomicUsize,
    query_top_ks: Mutex<Vec<usize>>,
    deletes: Mutex<Vec<String>>,
}

impl StubVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(mut self, hits: &[(&str, f64)]) -> Self {
        self.hits = hits
            .iter()
            .map(|(id, score)| VectorMatch {
                id: (*id).to_string(),
                score: SimilarityScore::new(*score),
                metadata: ItemMetadata {
                    name: format!("Item {id}"),
                    canonical_name: format!("item {id}"),
                    box_id: "box-a".to_string(),
                    box_name: "BOX A".to_string(),
                },
            })
            .collect();
        self
    }

    pub fn scoring(mut self, scores: &[(&str, f64)]) -> Self {
        self.scores_by_id = scores
            .iter()
            .map(|(id, score)| ((*id).to_string(), *score))
            .collect();
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn failing_upsert_for(mut self, id: &str) -> Self {
        self.fail_upsert_for = Some(id.to_string());
        self
    }

    /// Successfully stored records, in call order
    pub fn upserted(&self) -> Vec<VectorRecord> {
        self.upserts.lock().unwrap().clone()
    }

    /// Number of upsert calls, failed ones included
    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }

    /// Highest number of upserts that were running at the same time
    pub fn peak_upserts_in_flight(&self) -> usize {
        self.peak_upserts_in_flight.load(Ordering::SeqCst)
    }

    /// `top_k` of every query, in call order
    pub fn query_top_ks(&self) -> Vec<usize> {
        self.query_top_ks.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl VectorIndexProvider for StubVectorIndex {
    async fn upsert(&self, records: &[VectorRecord]) -> Result<()> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);

        // Hold the slot across a few scheduler turns so overlapping upserts are observable
        let running = self.upserts_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_upserts_in_flight
            .fetch_max(running, Ordering::SeqCst);
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.upserts_in_flight.fetch_sub(1, Ordering::SeqCst);

        if records
            .iter()
            .any(|record| Some(&record.id) == self.fail_upsert_for.as_ref())
        {
            return Err(Error::index_write(503, "stub upsert failure"));
        }

        let mut upserts = self.upserts.lock().unwrap();
        for record in records {
            upserts.retain(|existing| existing.id != record.id);
            upserts.push(record.clone());
        }
        Ok(())
    }

    async fn query(&self, _vector: &[f32], top_k: usize) -> Result<Vec<VectorMatch>> {
        self.query_top_ks.lock().unwrap().push(top_k);

        let mut hits = if self.scores_by_id.is_empty() {
            self.hits.clone()
        } else {
            let mut derived: Vec<VectorMatch> = self
                .upserts
                .lock()
                .unwrap()
                .iter()
                .filter_map(|record| {
                    self.scores_by_id.get(&record.id).map(|score| VectorMatch {
                        id: record.id.clone(),
                        score: SimilarityScore::new(*score),
                        metadata: record.metadata.clone(),
                    })
                })
                .collect();
            derived.sort_by(|a, b| b.score.value().total_cmp(&a.score.value()));
            derived
        };
        hits.truncate(top_k);
        Ok(hits)
    }

    async fn delete(&self, ids: &[String]) -> Result<()> {
        if self.fail_delete {
            return Err(Error::index_write(500, "stub delete failure"));
        }
        self.deletes.lock().unwrap().extend(ids.iter().cloned());
        Ok(())
    }

    fn namespace(&self) -> &str {
        "inventory"
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}
