//! HTTP server mode serving listing pages with the pagination widget

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::component::Pagination;
use crate::config::Settings;
use crate::count::build_query;
use crate::error::{Error, Result, ResultExt};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Widget settings
    pub settings: Settings,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    pagination: Pagination,
}

/// Query string of a listing page
#[derive(Debug, Deserialize)]
struct ListingQuery {
    #[serde(default)]
    page: Option<String>,
}

/// Page number from a raw `page` query value; anything unusable is page 1
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&page| page > 0)
        .unwrap_or(1)
}

/// Build the application router
///
/// Settings are validated first so a listing route can never collide with
/// `/health` or carry path parameters.
pub fn router(config: ServerConfig) -> Result<Router> {
    config.settings.validate()?;
    let query = build_query(&config.settings.source)?;
    let route = format!("/{}", config.settings.route.trim_matches('/'));
    let state = AppState {
        pagination: Pagination::new(query, config.settings),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/health", get(health))
        .route(&route, get(listing))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let route = config.settings.route.clone();
    let app = router(config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Serving /{} on http://{}", route.trim_matches('/'), addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to port {port}"))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Listing page: mounts the widget, waits for the count, returns the document
async fn listing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let page = parse_page(query.page.as_deref());
    let mut widget = state.pagination.mount(page);
    let view = widget.settled().await;
    Html(view.to_document())
}
