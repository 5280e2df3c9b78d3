//! HTTP client for the count service
//!
//! A thin wrapper over `reqwest` that sends the source's headers with every
//! request, applies one client-wide timeout and turns error statuses into
//! crate errors. Each call is a single attempt.

use crate::error::{Error, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Headers sent with every count request
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Add several default headers
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        self.config
            .default_headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Single-attempt JSON client
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("storefront-pagination/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// GET `url` and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.send_json(self.client.get(url)).await
    }

    /// POST a JSON body to `url` and parse the JSON response
    pub async fn post_json<T: DeserializeOwned>(&self, url: &str, body: Value) -> Result<T> {
        self.send_json(self.client.post(url).json(&body)).await
    }

    async fn send_json<T: DeserializeOwned>(&self, mut req: RequestBuilder) -> Result<T> {
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        let url = response.url().to_string();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: {} ({})", url, status.as_u16());
        response.json().await.map_err(Error::Http)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
