//! Count query implementations

use super::types::CountQuery;
use crate::config::{RemoteSource, SourceConfig};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// GraphQL document asking for the aggregate count of `collection`
pub fn pagination_query(collection: &str) -> String {
    format!("query PAGINATION_QUERY {{ {collection}Connection {{ aggregate {{ count }} }} }}")
}

/// Read a non-negative integer count at a JSON pointer
pub fn decode_count(value: &Value, pointer: &str) -> Result<u64> {
    let raw = value
        .pointer(pointer)
        .ok_or_else(|| Error::count_decode(pointer, "field missing"))?;

    if let Some(count) = raw.as_u64() {
        return Ok(count);
    }

    let message = match raw.as_i64() {
        Some(n) => format!("negative count {n}"),
        None => format!("expected an integer, got {raw}"),
    };
    Err(Error::count_decode(pointer, message))
}

fn client_for(remote: &RemoteSource) -> Result<HttpClient> {
    let config = HttpClientConfig::builder()
        .timeout(remote.timeout())
        .headers(&remote.headers)
        .build();
    HttpClient::with_config(config)
}

// ============================================================================
// GraphQL
// ============================================================================

/// Aggregate count through a GraphQL connection query
#[derive(Debug, Clone)]
pub struct GraphQlCountQuery {
    client: HttpClient,
    url: String,
    collection: String,
}

impl GraphQlCountQuery {
    /// Create a query against `url` for `collection`
    pub fn new(client: HttpClient, url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            collection: collection.into(),
        }
    }

    /// Create a query from remote source settings
    pub fn from_source(remote: &RemoteSource) -> Result<Self> {
        Ok(Self::new(
            client_for(remote)?,
            remote.url.clone(),
            remote.collection.clone(),
        ))
    }

    fn count_pointer(&self) -> String {
        format!("/data/{}Connection/aggregate/count", self.collection)
    }
}

#[async_trait]
impl CountQuery for GraphQlCountQuery {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn count(&self) -> Result<u64> {
        let body = json!({ "query": pagination_query(&self.collection) });
        let response: Value = self.client.post_json(&self.url, body).await?;

        if let Some(errors) = response.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages: Vec<&str> = errors
                    .iter()
                    .filter_map(|e| e.get("message").and_then(Value::as_str))
                    .collect();
                return Err(Error::graphql(if messages.is_empty() {
                    "unspecified error".to_string()
                } else {
                    messages.join("; ")
                }));
            }
        }

        let count = decode_count(&response, &self.count_pointer())?;
        debug!(collection = %self.collection, count, "GraphQL count resolved");
        Ok(count)
    }
}

// ============================================================================
// REST
// ============================================================================

/// Aggregate count from a JSON endpoint answering `{ "count": n }`
#[derive(Debug, Clone)]
pub struct RestCountQuery {
    client: HttpClient,
    url: String,
    collection: String,
}

impl RestCountQuery {
    /// Create a query against `url` for `collection`
    pub fn new(client: HttpClient, url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            collection: collection.into(),
        }
    }

    /// Create a query from remote source settings
    pub fn from_source(remote: &RemoteSource) -> Result<Self> {
        Ok(Self::new(
            client_for(remote)?,
            remote.url.clone(),
            remote.collection.clone(),
        ))
    }
}

#[async_trait]
impl CountQuery for RestCountQuery {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn count(&self) -> Result<u64> {
        let response: Value = self.client.get_json(&self.url).await?;
        let count = decode_count(&response, "/count")?;
        debug!(collection = %self.collection, count, "REST count resolved");
        Ok(count)
    }
}

// ============================================================================
// Static
// ============================================================================

/// Fixed count, no I/O
#[derive(Debug, Clone)]
pub struct StaticCountQuery {
    count: u64,
    collection: String,
}

impl StaticCountQuery {
    /// Create a static count for `collection`
    pub fn new(count: u64, collection: impl Into<String>) -> Self {
        Self {
            count,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl CountQuery for StaticCountQuery {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.count)
    }
}

/// Build the count query a source configuration describes
pub fn build_query(source: &SourceConfig) -> Result<Arc<dyn CountQuery>> {
    let query: Arc<dyn CountQuery> = match source {
        SourceConfig::Graphql(remote) => Arc::new(GraphQlCountQuery::from_source(remote)?),
        SourceConfig::Rest(remote) => Arc::new(RestCountQuery::from_source(remote)?),
        SourceConfig::Static { count, collection } => {
            Arc::new(StaticCountQuery::new(*count, collection.clone()))
        }
    };
    Ok(query)
}
