//! Pinecone vector index provider
//!
//! Talks to a Pinecone index host over its REST data plane. Every request
//! carries the namespace this instance is bound to.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sai_application::ports::registry::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
};
use sai_domain::constants::DEFAULT_NAMESPACE;
use sai_domain::error::Result;
use sai_domain::ports::providers::VectorIndexProvider;
use sai_domain::value_objects::{ItemMetadata, SimilarityScore, VectorMatch, VectorRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_HTTP_TIMEOUT_SECS, PINECONE_API_KEY_HEADER, PINECONE_API_VERSION,
    PINECONE_API_VERSION_HEADER,
};
use crate::utils::{FailureKind, HttpResponseUtils};

#[derive(Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [VectorRecord],
    namespace: &'a str,
}

#[derive(Serialize)]
struct DeleteRequest<'a> {
    ids: &'a [String],
    namespace: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    namespace: &'a str,
    include_metadata: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<PineconeMatch>,
}

#[derive(Deserialize)]
struct PineconeMatch {
    id: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    metadata: Option<ItemMetadata>,
}

impl From<PineconeMatch> for VectorMatch {
    fn from(hit: PineconeMatch) -> Self {
        Self {
            id: hit.id,
            score: SimilarityScore::new(hit.score),
            metadata: hit.metadata.unwrap_or_default(),
        }
    }
}

/// Pinecone vector index provider
///
/// ## Example
///
/// ```rust,no_run
/// use sai_providers::vector_index::PineconeVectorIndexProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let index = PineconeVectorIndexProvider::new(
///     "inventory-abc123.svc.us-east-1.pinecone.io".to_string(),
///     "pc-your-api-key".to_string(),
///     "inventory".to_string(),
///     None,
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
pub struct PineconeVectorIndexProvider {
    host: String,
    api_key: String,
    namespace: String,
    api_version: String,
    timeout: Duration,
    http_client: Client,
}

impl PineconeVectorIndexProvider {
    /// Create a new Pinecone provider
    ///
    /// `host` may omit the scheme, in which case `https://` is assumed.
    pub fn new(
        host: String,
        api_key: String,
        namespace: String,
        api_version: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            host: normalize_host(&host),
            api_key: api_key.trim().to_string(),
            namespace,
            api_version: api_version.unwrap_or_else(|| PINECONE_API_VERSION.to_string()),
            timeout,
            http_client,
        }
    }

    /// Index host including scheme
    pub fn host(&self) -> &str {
        &self.host
    }

    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        kind: FailureKind,
    ) -> Result<reqwest::Response> {
        let response = self
            .http_client
            .post(format!("{}{path}", self.host))
            .header(PINECONE_API_KEY_HEADER, &self.api_key)
            .header(PINECONE_API_VERSION_HEADER, &self.api_version)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error("Pinecone", self.timeout, e))?;

        HttpResponseUtils::check_status(response, kind).await
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

#[async_trait]
impl VectorIndexProvider for PineconeVectorIndexProvider {
    async fn upsert(&self, records: &[VectorRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let body = UpsertRequest {
            vectors: records,
            namespace: &self.namespace,
        };
        self.post("/vectors/upsert", &body, FailureKind::IndexWrite)
            .await?;
        debug!(namespace = %self.namespace, count = records.len(), "Pinecone upsert");
        Ok(())
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<VectorMatch>> {
        let body = QueryRequest {
            vector,
            top_k,
            namespace: &self.namespace,
            include_metadata: true,
        };
        let response = self.post("/query", &body, FailureKind::IndexQuery).await?;
        let decoded: QueryResponse = HttpResponseUtils::check_and_parse(
            response,
            "Pinecone",
            FailureKind::IndexQuery,
        )
        .await?;

        let mut hits: Vec<VectorMatch> = decoded.matches.into_iter().map(Into::into).collect();
        // Stable: equal scores keep the order Pinecone returned
        hits.sort_by(|a, b| b.score.value().total_cmp(&a.score.value()));
        hits.truncate(top_k);

        debug!(namespace = %self.namespace, top_k, returned = hits.len(), "Pinecone query");
        Ok(hits)
    }

    async fn delete(&self, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let body = DeleteRequest {
            ids,
            namespace: &self.namespace,
        };
        self.post("/vectors/delete", &body, FailureKind::IndexWrite)
            .await?;
        Ok(())
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn provider_name(&self) -> &str {
        "pinecone"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn pinecone_vector_index_factory(
    config: &VectorIndexProviderConfig,
) -> std::result::Result<Arc<dyn VectorIndexProvider>, String> {
    let host = config
        .host
        .clone()
        .filter(|host| !host.trim().is_empty())
        .ok_or_else(|| "Pinecone requires host".to_string())?;
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "Pinecone requires api_key".to_string())?;
    let namespace = config
        .namespace
        .clone()
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS));
    let http_client = HttpResponseUtils::client(timeout)?;

    Ok(Arc::new(PineconeVectorIndexProvider::new(
        host,
        api_key,
        namespace,
        config.api_version.clone(),
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(VECTOR_INDEX_PROVIDERS)]
static PINECONE_PROVIDER: VectorIndexProviderEntry = VectorIndexProviderEntry {
    name: "pinecone",
    description: "Pinecone serverless index over the REST data plane",
    factory: pinecone_vector_index_factory,
};
