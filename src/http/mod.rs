//! HTTP client module
//!
//! One-shot JSON requests against the remote count service.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
