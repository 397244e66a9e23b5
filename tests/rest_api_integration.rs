//! Integration tests for the REST API router
//!
//! Requests go through the full router (CORS and trace layers included) with
//! `tower::ServiceExt::oneshot`, so no port is bound.
//!
//! ```bash
//! cargo test --test rest_api_integration
//! ```

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use compkit::rest::{build_router, ApiState};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn router() -> Router {
    build_router(ApiState::builtin().expect("builtin state"))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn card_ids(page: &Value) -> Vec<&str> {
    page["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect()
}

// ─── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn status_reports_catalog_counts() {
    let (status, body) = get("/api/v1/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category_count"], 6);
    assert_eq!(body["default_category"], "auth");
}

// ─── Categories ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn categories_in_display_order() {
    let (status, body) = get("/api/v1/categories").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["auth", "email", "chat", "payments", "file-storage", "crud-api"]
    );
}

#[tokio::test]
async fn category_components_lists_raw_records() {
    let (status, body) = get("/api/v1/categories/email/components").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[0]["id"], "basic-email");
}

#[tokio::test]
async fn unknown_category_components_is_empty() {
    let (status, body) = get("/api/v1/categories/bogus/components").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

// ─── Components page ──────────────────────────────────────────────────────────

#[tokio::test]
async fn page_defaults_to_first_category() {
    let (status, body) = get("/api/v1/components").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["component"], "auth");
    assert_eq!(body["param_corrected"], true);
    assert_eq!(body["location"], "/components?component=auth");
    assert_eq!(body["title"], "Authentication Components");
}

#[tokio::test]
async fn page_with_known_component() {
    let (_, body) = get("/api/v1/components?component=payments").await;
    assert_eq!(body["component"], "payments");
    assert_eq!(body["param_corrected"], false);
    assert_eq!(card_ids(&body).len(), 8);

    let active: Vec<&Value> = body["sidebar"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["is_active"] == true)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["id"], "payments");
}

#[tokio::test]
async fn page_search_is_case_insensitive() {
    let (_, lower) = get("/api/v1/components?component=auth&q=jwt").await;
    let (_, upper) = get("/api/v1/components?component=auth&q=JWT").await;

    assert!(card_ids(&lower).contains(&"basic-auth"));
    assert_eq!(card_ids(&lower), card_ids(&upper));
}

#[tokio::test]
async fn page_query_is_url_decoded() {
    let (_, body) = get("/api/v1/components?component=auth&q=qr%20code").await;
    assert_eq!(body["query"], "qr code");
    assert_eq!(card_ids(&body), vec!["two-factor-auth"]);
    assert_eq!(body["location"], "/components?component=auth&q=qr+code");
}

#[tokio::test]
async fn page_with_no_matches() {
    let (status, body) = get("/api/v1/components?component=auth&q=zzz-nomatch").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_empty"], true);
    assert!(card_ids(&body).is_empty());
    assert_eq!(body["total"], 9);
    assert_eq!(
        body["empty_message"],
        "No components found matching your search."
    );
}

// ─── Detail ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn detail_available() {
    let (status, body) = get("/api/v1/components/auth/basic-auth").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "available");
    assert_eq!(body["back_href"], "/components?component=auth");
    assert!(body["install"].as_str().unwrap().starts_with("npm install"));
    assert_eq!(body["reference"]["label"], "API Routes");
}

#[tokio::test]
async fn detail_coming_soon() {
    let (status, body) = get("/api/v1/components/email/newsletter").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "coming_soon");
    assert!(body.get("install").is_none());
}

#[tokio::test]
async fn detail_unknown_is_404() {
    let (status, body) = get("/api/v1/components/auth/register").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
