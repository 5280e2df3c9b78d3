//! Integration tests using mock HTTP server
//!
//! Tests the full flow: YAML settings → count request → rendered widget

use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use storefront_pagination::count::{pagination_query, FETCH_FAILED_MESSAGE};
use storefront_pagination::view::LOADING_TEXT;
use storefront_pagination::{build_query, load_settings_from_str, FetchResult, Pagination};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn graphql_settings(uri: &str) -> String {
    format!(
        r#"
per_page: 4
site_name: Handcrafty
source:
  type: graphql
  url: {uri}/graphql
  timeout_secs: 2
"#
    )
}

async fn mount_count(server: &MockServer, count: u64) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_json(json!({ "query": pagination_query("items") })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "itemsConnection": {
                    "__typename": "aggregate",
                    "aggregate": { "__typename": "count", "count": count }
                }
            }
        })))
        .mount(server)
        .await;
}

fn pagination_for(yaml: &str) -> Pagination {
    let settings = load_settings_from_str(yaml).unwrap();
    let query = build_query(&settings.source).unwrap();
    Pagination::new(query, settings)
}

// ============================================================================
// Widget Tests
// ============================================================================

#[tokio::test]
async fn test_displays_loading_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let widget = pagination_for(&graphql_settings(&mock_server.uri())).mount(1);
    assert!(widget.render().text().contains(LOADING_TEXT));
}

#[tokio::test]
async fn test_renders_pagination_for_19_items() {
    let mock_server = MockServer::start().await;
    mount_count(&mock_server, 19).await;

    let mut widget = pagination_for(&graphql_settings(&mock_server.uri())).mount(1);
    let view = widget.settled().await;

    let root = view.body.find_attr("data-test", "pagination").unwrap();
    assert_eq!(root.tag(), "div");
    assert_eq!(
        view.body.find_class("totalPages").unwrap().text_content(),
        "5"
    );
    assert_eq!(
        view.to_html(),
        concat!(
            "<div class=\"pagination\" data-test=\"pagination\">",
            "<a class=\"prev\" href=\"/items?page=0\" aria-disabled=\"true\">← Prev</a>",
            "<p>1 of <span class=\"totalPages\">5</span></p>",
            "<p>Items total: 19</p>",
            "<a class=\"next\" href=\"/items?page=2\" aria-disabled=\"false\">Next →</a>",
            "</div>"
        )
    );
    assert_eq!(view.title.as_deref(), Some("Handcrafty | Page 1 of 5"));
}

#[tokio::test]
async fn test_link_states_across_pages() {
    let mock_server = MockServer::start().await;
    mount_count(&mock_server, 19).await;
    let pagination = pagination_for(&graphql_settings(&mock_server.uri()));

    for (page, prev, next) in [(1, "true", "false"), (3, "false", "false"), (5, "false", "true")] {
        let mut widget = pagination.mount(page);
        let view = widget.settled().await;

        let prev_attr = view.body.find_class("prev").unwrap().attr_value("aria-disabled");
        let next_attr = view.body.find_class("next").unwrap().attr_value("aria-disabled");
        assert_eq!(prev_attr, Some(prev), "prev on page {page}");
        assert_eq!(next_attr, Some(next), "next on page {page}");
    }
}

#[tokio::test]
async fn test_fetch_failure_renders_message_only() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut widget = pagination_for(&graphql_settings(&mock_server.uri())).mount(1);
    let view = widget.settled().await;

    assert_eq!(
        widget.state(),
        FetchResult::Error(FETCH_FAILED_MESSAGE.to_string())
    );
    assert_eq!(view.text(), FETCH_FAILED_MESSAGE);
    assert!(!view.has_controls());
}

#[tokio::test]
async fn test_timeout_is_a_fetch_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let yaml = graphql_settings(&mock_server.uri()).replace("timeout_secs: 2", "timeout_secs: 1");
    let mut widget = pagination_for(&yaml).mount(1);
    let view = widget.settled().await;

    assert_eq!(view.text(), FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_rest_source() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
        .mount(&mock_server)
        .await;

    let yaml = format!(
        "source:\n  type: rest\n  url: {}/items/count\n",
        mock_server.uri()
    );
    let mut widget = pagination_for(&yaml).mount(1);
    let view = widget.settled().await;

    assert!(view.text().contains("1 of 1"));
    assert_eq!(
        view.body.find_class("next").unwrap().attr_value("aria-disabled"),
        Some("true")
    );
}

// ============================================================================
// Server Tests
// ============================================================================

#[tokio::test]
async fn test_server_router_against_graphql() {
    use axum::body::Body;
    use axum::http::Request;
    use storefront_pagination::cli::{router, ServerConfig};
    use tower::ServiceExt;

    let mock_server = MockServer::start().await;
    mount_count(&mock_server, 19).await;

    let settings = load_settings_from_str(&graphql_settings(&mock_server.uri())).unwrap();
    let app = router(ServerConfig { settings }).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/items?page=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(body.contains("<title>Handcrafty | Page 3 of 5</title>"));
    assert!(body.contains("href=\"/items?page=2\" aria-disabled=\"false\""));
    assert!(body.contains("href=\"/items?page=4\" aria-disabled=\"false\""));
}
