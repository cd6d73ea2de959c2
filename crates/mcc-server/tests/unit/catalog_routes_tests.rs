//! `GET /api/catalog/<path..>` tests

use std::time::Duration;

use rocket::http::Status;
use serde_json::Value;

use crate::test_utils::harness;

#[rocket::async_test]
async fn test_miss_then_hit_within_ttl() {
    let h = harness().await;

    let first = h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;
    assert_eq!(first.status(), Status::Ok);
    assert_eq!(first.headers().get_one("X-Cache"), Some("MISS"));
    let first_body: Value = first.into_json().await.unwrap();
    assert_eq!(first_body["items"][0], "danh-sach/phim-moi");

    h.clock.advance(Duration::from_secs(10));
    let second = h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;
    assert_eq!(second.headers().get_one("X-Cache"), Some("HIT"));
    let second_body: Value = second.into_json().await.unwrap();

    assert_eq!(first_body, second_body);
    assert_eq!(h.upstream.calls(), 1);
}

#[rocket::async_test]
async fn test_refetch_after_ttl() {
    let h = harness().await;

    h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;
    h.clock.advance(Duration::from_secs(3601));
    let response = h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;

    assert_eq!(response.headers().get_one("X-Cache"), Some("MISS"));
    assert_eq!(h.upstream.calls(), 2);
}

#[rocket::async_test]
async fn test_query_string_is_part_of_key() {
    let h = harness().await;

    let page1 = h.client.get("/api/catalog/danh-sach/phim-moi?page=1").dispatch().await;
    let body: Value = page1.into_json().await.unwrap();
    assert_eq!(body["items"][0], "danh-sach/phim-moi?page=1");

    h.client.get("/api/catalog/danh-sach/phim-moi?page=2").dispatch().await;

    assert_eq!(h.upstream.calls(), 2);
    assert_eq!(h.cache.len(), 2);
}

#[rocket::async_test]
async fn test_upstream_failure_is_bad_gateway_and_not_cached() {
    let h = harness().await;
    h.upstream.fail_with(Some(503));

    let response = h.client.get("/api/catalog/phim/abc").dispatch().await;

    assert_eq!(response.status(), Status::BadGateway);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "fetch_failure");
    assert!(body["message"].as_str().unwrap().contains("phim/abc"));
    assert!(h.cache.is_empty());

    h.upstream.fail_with(None);
    let retry = h.client.get("/api/catalog/phim/abc").dispatch().await;
    assert_eq!(retry.status(), Status::Ok);
    assert_eq!(h.upstream.calls(), 2);
}

#[rocket::async_test]
async fn test_overlong_key_is_bad_request() {
    let h = harness().await;
    let uri = format!("/api/catalog/{}", "a".repeat(300));

    let response = h.client.get(uri).dispatch().await;

    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "invalid_argument");
    assert_eq!(h.upstream.calls(), 0);
}
