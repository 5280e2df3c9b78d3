//! Widget configuration
//!
//! Settings are read from a YAML file, then patched from the environment,
//! then validated. The only value the widget itself reads at render time is
//! `per_page`; everything else describes where the count comes from and how
//! links and titles are built.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `per_page`
pub const ENV_PER_PAGE: &str = "STOREFRONT_PER_PAGE";

/// Environment variable overriding the remote source URL
pub const ENV_ENDPOINT: &str = "STOREFRONT_ENDPOINT";

/// Routes the server answers itself; a listing route may not shadow them
pub const RESERVED_ROUTES: &[&str] = &["health"];

// ============================================================================
// Top-Level Settings
// ============================================================================

/// Complete widget settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Items shown per listing page
    #[serde(default = "default_per_page")]
    pub per_page: NonZeroU32,

    /// Route the navigation links point at (e.g. "items")
    #[serde(default = "default_route")]
    pub route: String,

    /// Site name used in the document title
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Where the aggregate count comes from
    #[serde(default)]
    pub source: SourceConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            route: default_route(),
            site_name: default_site_name(),
            source: SourceConfig::default(),
        }
    }
}

fn default_per_page() -> NonZeroU32 {
    NonZeroU32::new(4).unwrap_or(NonZeroU32::MIN)
}

fn default_route() -> String {
    "items".to_string()
}

fn default_site_name() -> String {
    "Storefront".to_string()
}

fn default_collection() -> String {
    "items".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:4444/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

// ============================================================================
// Count Source
// ============================================================================

/// Count source selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    /// GraphQL aggregate query (`<collection>Connection.aggregate.count`)
    Graphql(RemoteSource),

    /// Plain JSON endpoint answering `{ "count": n }`
    Rest(RemoteSource),

    /// Fixed in-process count
    Static {
        /// The count to report
        count: u64,
        /// Collection name
        #[serde(default = "default_collection")]
        collection: String,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Graphql(RemoteSource::default())
    }
}

impl SourceConfig {
    /// Name of the counted collection
    pub fn collection(&self) -> &str {
        match self {
            Self::Graphql(remote) | Self::Rest(remote) => &remote.collection,
            Self::Static { collection, .. } => collection,
        }
    }

    /// Remote settings, if this source talks to a server
    pub fn remote(&self) -> Option<&RemoteSource> {
        match self {
            Self::Graphql(remote) | Self::Rest(remote) => Some(remote),
            Self::Static { .. } => None,
        }
    }

    fn remote_mut(&mut self) -> Option<&mut RemoteSource> {
        match self {
            Self::Graphql(remote) | Self::Rest(remote) => Some(remote),
            Self::Static { .. } => None,
        }
    }
}

/// Connection details for a remote count source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSource {
    /// Endpoint URL
    #[serde(default = "default_endpoint")]
    pub url: String,

    /// Collection to count
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra headers sent with the count request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self {
            url: default_endpoint(),
            collection: default_collection(),
            timeout_secs: default_timeout_secs(),
            headers: HashMap::new(),
        }
    }
}

impl RemoteSource {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load settings from a YAML file, apply environment overrides and validate
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let mut settings = parse_settings(&content)?;
    settings.apply_overrides(|key| std::env::var(key).ok())?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from a YAML string (no environment overrides)
pub fn load_settings_from_str(yaml: &str) -> Result<Settings> {
    let settings = parse_settings(yaml)?;
    settings.validate()?;
    Ok(settings)
}

fn parse_settings(yaml: &str) -> Result<Settings> {
    // An empty document means "all defaults"
    if yaml.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse settings YAML: {e}")))
}

impl Settings {
    /// Patch settings from environment-style lookups
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_PER_PAGE) {
            self.per_page = raw.trim().parse::<NonZeroU32>().map_err(|_| {
                Error::invalid_value(
                    "per_page",
                    format!("expected a positive integer, got '{raw}'"),
                )
            })?;
        }

        if let Some(url) = lookup(ENV_ENDPOINT) {
            match self.source.remote_mut() {
                Some(remote) => remote.url = url,
                None => {
                    tracing::warn!(
                        "{} is set but the count source is static; ignoring",
                        ENV_ENDPOINT
                    );
                }
            }
        }

        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        validate_route(&self.route)?;

        if self.source.collection().is_empty() {
            return Err(Error::invalid_value("source.collection", "cannot be empty"));
        }

        if let Some(remote) = self.source.remote() {
            if remote.url.is_empty() {
                return Err(Error::missing_field("source.url"));
            }
            url::Url::parse(&remote.url)?;
            if remote.timeout_secs == 0 {
                return Err(Error::invalid_value(
                    "source.timeout_secs",
                    "must be greater than 0",
                ));
            }
        }

        Ok(())
    }
}

/// A route is one or more `/`-separated segments of `[A-Za-z0-9_-]`
fn validate_route(route: &str) -> Result<()> {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        return Err(Error::invalid_value("route", "cannot be empty"));
    }

    let plain_segments = trimmed.split('/').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    });
    if !plain_segments {
        return Err(Error::invalid_value(
            "route",
            format!("'{route}' must be plain path segments of letters, digits, '_' or '-'"),
        ));
    }

    if RESERVED_ROUTES.contains(&trimmed) {
        return Err(Error::invalid_value(
            "route",
            format!("'/{trimmed}' is reserved by the server"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.per_page.get(), 4);
        assert_eq!(settings.route, "items");
        assert_eq!(settings.source.collection(), "items");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = load_settings_from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_graphql_source() {
        let yaml = r#"
per_page: 10
site_name: Handcrafty
source:
  type: graphql
  url: https://api.example.com/graphql
  timeout_secs: 5
  headers:
    Authorization: Bearer abc
"#;
        let settings = load_settings_from_str(yaml).unwrap();
        assert_eq!(settings.per_page.get(), 10);
        assert_eq!(settings.site_name, "Handcrafty");

        let SourceConfig::Graphql(remote) = &settings.source else {
            panic!("Expected graphql source");
        };
        assert_eq!(remote.url, "https://api.example.com/graphql");
        assert_eq!(remote.collection, "items");
        assert_eq!(remote.timeout(), Duration::from_secs(5));
        assert_eq!(
            remote.headers.get("Authorization"),
            Some(&"Bearer abc".to_string())
        );
    }

    #[test]
    fn test_load_static_source() {
        let yaml = r#"
source:
  type: static
  count: 19
"#;
        let settings = load_settings_from_str(yaml).unwrap();
        assert_eq!(
            settings.source,
            SourceConfig::Static {
                count: 19,
                collection: "items".to_string()
            }
        );
        assert!(settings.source.remote().is_none());
    }

    #[test]
    fn test_zero_per_page_rejected() {
        let err = load_settings_from_str("per_page: 0").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_empty_route_rejected() {
        let err = load_settings_from_str("route: \"/\"").unwrap_err();
        assert!(err.to_string().contains("route"));
    }

    #[test_case("items" ; "plain")]
    #[test_case("/products/" ; "surrounding slashes")]
    #[test_case("shop/summer-sale_2" ; "nested")]
    fn test_route_accepted(route: &str) {
        let settings = Settings {
            route: route.to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test_case("health" ; "reserved health")]
    #[test_case("/health/" ; "reserved with slashes")]
    #[test_case("items?x" ; "query marker")]
    #[test_case(":id" ; "path parameter")]
    #[test_case("*rest" ; "wildcard")]
    #[test_case("shop//items" ; "empty segment")]
    #[test_case("my items" ; "space")]
    fn test_route_rejected(route: &str) {
        let yaml = format!("route: \"{route}\"\nsource:\n  type: static\n  count: 3\n");
        let err = load_settings_from_str(&yaml).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "route"
        ));
    }

    #[test]
    fn test_bad_url_rejected() {
        let yaml = r#"
source:
  type: rest
  url: "not a url"
"#;
        let err = load_settings_from_str(yaml).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_overrides() {
        let mut settings = Settings::default();
        settings
            .apply_overrides(|key| match key {
                ENV_PER_PAGE => Some("12".to_string()),
                ENV_ENDPOINT => Some("http://count.internal/graphql".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(settings.per_page.get(), 12);
        assert_eq!(
            settings.source.remote().unwrap().url,
            "http://count.internal/graphql"
        );
    }

    #[test]
    fn test_zero_per_page_override_rejected() {
        let mut settings = Settings::default();
        let err = settings
            .apply_overrides(|key| (key == ENV_PER_PAGE).then(|| "0".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_load_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "per_page: 6\nroute: products").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.route, "products");
    }

    #[test]
    fn test_load_settings_missing_file() {
        let err = load_settings("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
