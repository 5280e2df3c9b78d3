//! Count fetcher module
//!
//! Asks a remote service how many items a collection holds.
//!
//! # Sources
//!
//! - **GraphQL**: `<collection>Connection { aggregate { count } }`
//! - **REST**: a JSON document of the form `{ "count": n }`
//! - **Static**: a fixed number, for local rendering
//!
//! Whatever the transport, a caller only ever observes a [`FetchResult`].

mod queries;
mod types;

pub use queries::{
    build_query, decode_count, pagination_query, GraphQlCountQuery, RestCountQuery,
    StaticCountQuery,
};
pub use types::{CountQuery, FetchResult, FETCH_FAILED_MESSAGE};
