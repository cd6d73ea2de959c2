//! Admin route tests: authentication, revalidation, statistics

use std::time::Duration;

use rocket::http::{Header, Status};
use serde_json::Value;

use crate::test_utils::{HarnessBuilder, TEST_API_KEY, harness, t0};

fn admin_key() -> Header<'static> {
    Header::new("X-Admin-Key", TEST_API_KEY)
}

#[rocket::async_test]
async fn test_admin_disabled_by_default() {
    let h = harness().await;

    let response = h
        .client
        .post("/api/revalidate?tag=catalog")
        .header(admin_key())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Forbidden);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "admin_disabled");
}

#[rocket::async_test]
async fn test_missing_key_is_unauthorized() {
    let h = HarnessBuilder::new().with_admin_key().build().await;

    let response = h.client.post("/api/revalidate?tag=catalog").dispatch().await;

    assert_eq!(response.status(), Status::Unauthorized);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "missing_api_key");
    assert!(body["message"].as_str().unwrap().contains("X-Admin-Key"));
}

#[rocket::async_test]
async fn test_wrong_key_is_unauthorized() {
    let h = HarnessBuilder::new().with_admin_key().build().await;

    let response = h
        .client
        .get("/api/cache/stats")
        .header(Header::new("X-Admin-Key", "wrong"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Unauthorized);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "invalid_api_key");
}

#[rocket::async_test]
async fn test_revalidate_forces_refetch_within_ttl() {
    let h = HarnessBuilder::new().with_admin_key().build().await;
    h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;
    h.client.get("/api/catalog/phim/abc").dispatch().await;
    h.clock.advance(Duration::from_secs(5));

    let response = h
        .client
        .post("/api/revalidate?tag=catalog")
        .header(admin_key())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["revalidated"], true);
    assert_eq!(body["tag"], "catalog");
    assert_eq!(body["purged"], 2);
    assert_eq!(body["now"], (t0() + chrono::Duration::seconds(5)).timestamp_millis());

    let again = h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;
    assert_eq!(again.headers().get_one("X-Cache"), Some("MISS"));
    assert_eq!(h.upstream.calls(), 3);
}

#[rocket::async_test]
async fn test_revalidate_by_section_tag() {
    let h = HarnessBuilder::new().with_admin_key().build().await;
    h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;
    h.client.get("/api/catalog/phim/abc").dispatch().await;

    let response = h
        .client
        .post("/api/revalidate?tag=danh-sach")
        .header(admin_key())
        .dispatch()
        .await;
    let body: Value = response.into_json().await.unwrap();

    assert_eq!(body["purged"], 1);
    let kept = h.client.get("/api/catalog/phim/abc").dispatch().await;
    assert_eq!(kept.headers().get_one("X-Cache"), Some("HIT"));
}

#[rocket::async_test]
async fn test_revalidate_unknown_tag_is_noop() {
    let h = HarnessBuilder::new().with_admin_key().build().await;

    for _ in 0..2 {
        let response = h
            .client
            .post("/api/revalidate?tag=nothing-here")
            .header(admin_key())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["purged"], 0);
    }
}

#[rocket::async_test]
async fn test_revalidate_without_tag_is_bad_request() {
    let h = HarnessBuilder::new().with_admin_key().build().await;

    let response = h
        .client
        .post("/api/revalidate")
        .header(admin_key())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "invalid_argument");
}

#[rocket::async_test]
async fn test_stats_report_counters() {
    let h = HarnessBuilder::new().with_admin_key().build().await;
    h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;
    h.client.get("/api/catalog/danh-sach/phim-moi").dispatch().await;
    h.upstream.fail_with(Some(500));
    h.client.get("/api/catalog/phim/broken").dispatch().await;

    let response = h
        .client
        .get("/api/cache/stats")
        .header(admin_key())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let stats: Value = response.into_json().await.unwrap();
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 2);
    assert_eq!(stats["fetches"], 2);
    assert_eq!(stats["fetch_failures"], 1);
    assert_eq!(stats["entries"], 1);
}
