//! Error types for the storefront pagination crate
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The rendered widget never shows these messages; see
//! [`crate::count::FETCH_FAILED_MESSAGE`] for what users see instead.

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Count Query Errors
    // ============================================================================
    #[error("GraphQL error: {message}")]
    GraphQl { message: String },

    #[error("Failed to decode count from '{path}': {message}")]
    CountDecode { path: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a GraphQL error
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::GraphQl {
            message: message.into(),
        }
    }

    /// Create a count decode error
    pub fn count_decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CountDecode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from talking to the count service
    ///
    /// Used for log levels only; every fetch failure renders the same way.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("per_page");
        assert_eq!(err.to_string(), "Missing required config field: per_page");

        let err = Error::http_status(502, "Bad gateway");
        assert_eq!(err.to_string(), "HTTP 502: Bad gateway");

        let err = Error::count_decode("data.itemsConnection.aggregate.count", "missing");
        assert_eq!(
            err.to_string(),
            "Failed to decode count from 'data.itemsConnection.aggregate.count': missing"
        );
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::http_status(500, "").is_transport());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_transport());

        assert!(!Error::graphql("boom").is_transport());
        assert!(!Error::config("test").is_transport());
        assert!(!Error::count_decode("count", "negative").is_transport());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
