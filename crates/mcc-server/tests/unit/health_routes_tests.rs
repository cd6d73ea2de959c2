//! Probe and fallback tests

use rocket::http::Status;
use serde_json::Value;

use crate::test_utils::harness;

#[rocket::async_test]
async fn test_health_reports_wiring() {
    let h = harness().await;

    let response = h.client.get("/health").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cache_store"], "memory");
    assert_eq!(body["default_trending_type"], "phim-bo");
}

#[rocket::async_test]
async fn test_live_needs_no_auth() {
    let h = harness().await;

    let response = h.client.get("/live").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["status"], "alive");
}

#[rocket::async_test]
async fn test_unknown_route_is_json_not_found() {
    let h = harness().await;

    let response = h.client.get("/api/nothing").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}
