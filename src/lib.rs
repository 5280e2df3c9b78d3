//! # Storefront Pagination
//!
//! The paginated-listing widget of a storefront: it asks a remote service for
//! the total number of items, works out how many pages that makes, and
//! renders previous/next links around a "page X of Y" summary.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_pagination::{build_query, load_settings, Pagination, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let settings = load_settings("storefront.yaml")?;
//!     let query = build_query(&settings.source)?;
//!
//!     let mut widget = Pagination::new(query, settings).mount(1);
//!     let view = widget.settled().await;
//!     println!("{}", view.to_html());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Pagination::mount(page) → MountedPagination              │
//! │  state: watch<FetchResult>   render() → View              │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────────┬────────────┴──────────┬───────────────────┐
//! │    Count      │      Pagination       │       View        │
//! ├───────────────┼───────────────────────┼───────────────────┤
//! │ GraphQL       │ compute_pages         │ Loading / Error   │
//! │ REST          │ is_prev_disabled      │ prev · X of Y ·   │
//! │ Static        │ is_next_disabled      │ total · next      │
//! └───────────────┴───────────────────────┴───────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Settings loading and validation
pub mod config;

/// HTTP client for the count service
pub mod http;

/// Aggregate count queries
pub mod count;

/// Page arithmetic
pub mod pagination;

/// Markup rendering
pub mod view;

/// Mountable widget
pub mod component;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use component::{MountedPagination, Pagination};
pub use config::{load_settings, load_settings_from_str, Settings, SourceConfig};
pub use count::{build_query, CountQuery, FetchResult};
pub use error::{Error, Result};
pub use view::{render, View};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
