//! Integration tests for the health check endpoint, general HTTP behaviour
//! and the generic 500 path.

mod common;

use std::sync::Arc;

use assetdesk_core::types::DbId;
use assetdesk_db::models::asset::{Asset, AssetFilter, NewAsset};
use assetdesk_db::store::{AssetStore, StoreError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, build_test_app_with_store, get, post_json, send};
use serde_json::json;

/// A store whose database is gone: every call fails.
struct UnreachableStore;

#[async_trait]
impl AssetStore for UnreachableStore {
    async fn insert(&self, _asset: NewAsset) -> Result<Asset, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _asset: &Asset) -> Result<Option<Asset>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Asset>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_serial_number(&self, _serial: &str) -> Result<Option<Asset>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list(&self, _filter: AssetFilter) -> Result<Vec<Asset>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

/// A store with a bug: listing panics.
struct PanickingStore;

#[async_trait]
impl AssetStore for PanickingStore {
    async fn insert(&self, _asset: NewAsset) -> Result<Asset, StoreError> {
        unimplemented!()
    }

    async fn update(&self, _asset: &Asset) -> Result<Option<Asset>, StoreError> {
        unimplemented!()
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Asset>, StoreError> {
        Ok(None)
    }

    async fn find_by_serial_number(&self, _serial: &str) -> Result<Option<Asset>, StoreError> {
        Ok(None)
    }

    async fn list(&self, _filter: AssetFilter) -> Result<Vec<Asset>, StoreError> {
        panic!("index corrupted")
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app();
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_unreachable_store() {
    let app = build_test_app_with_store(Arc::new(UnreachableStore));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["store_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app();
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app();
    let response = get(&app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: store failures become the generic 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_failure_returns_generic_500() {
    let app = build_test_app_with_store(Arc::new(UnreachableStore));

    let response = get(&app, "/api/assets").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "message": "Unexpected error" }));

    let response = post_json(
        &app,
        "/api/assets",
        json!({
            "name": "Laptop",
            "type": "HARDWARE",
            "serialNumber": "SN-1",
            "status": "AVAILABLE"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn panic_in_handler_returns_generic_500() {
    let app = build_test_app_with_store(Arc::new(PanickingStore));
    let response = get(&app, "/api/assets").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Unexpected error");
    assert!(!json.to_string().contains("index corrupted"));
}

#[tokio::test]
async fn cors_preflight_allows_only_content_type() {
    let app = build_test_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/assets")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type, authorization")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:3000"
    );
    let allowed = headers["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(!allowed.contains("authorization"));
}
