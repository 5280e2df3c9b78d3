//! Count fetcher types and traits

use crate::error::Result;
use async_trait::async_trait;

/// Message shown for every kind of fetch failure
pub const FETCH_FAILED_MESSAGE: &str = "Something's wrong";

/// Observable state of a count request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Request in flight
    Loading,
    /// Request failed
    Error(String),
    /// Request answered with the aggregate count
    Success(u64),
}

impl FetchResult {
    /// Collapse a query outcome into what the view observes.
    ///
    /// The error cause is not preserved.
    pub fn from_outcome(outcome: Result<u64>) -> Self {
        match outcome {
            Ok(count) => Self::Success(count),
            Err(_) => Self::Error(FETCH_FAILED_MESSAGE.to_string()),
        }
    }

    /// Check if the request is still in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the request has finished, either way
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// The count, if the request succeeded
    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Success(count) => Some(*count),
            _ => None,
        }
    }
}

/// Trait for aggregate count queries
#[async_trait]
pub trait CountQuery: Send + Sync {
    /// Name of the counted collection
    fn collection(&self) -> &str;

    /// Fetch the total number of records in the collection
    async fn count(&self) -> Result<u64>;
}
