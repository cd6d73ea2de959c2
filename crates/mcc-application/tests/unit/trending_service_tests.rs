//! Tests for the trending read path

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mcc_application::use_cases::TrendingService;
use mcc_domain::error::{Error, Result};
use mcc_domain::ports::TrendingStore;
use mcc_domain::value_objects::{MovieSummary, TrendingCacheRecord, TrendingStatus};
use mcc_providers::trending::MemoryTrendingStore;
use serde_json::json;

#[derive(Debug)]
struct UnreachableStore;

#[async_trait]
impl TrendingStore for UnreachableStore {
    async fn find_by_type(&self, _category_type: &str) -> Result<Option<TrendingCacheRecord>> {
        Err(Error::storage("connection refused"))
    }

    fn provider_name(&self) -> &str {
        "unreachable"
    }
}

#[derive(Debug)]
struct HangingStore;

#[async_trait]
impl TrendingStore for HangingStore {
    async fn find_by_type(&self, _category_type: &str) -> Result<Option<TrendingCacheRecord>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        "hanging"
    }
}

fn movie(slug: &str) -> MovieSummary {
    MovieSummary::new(json!({ "name": slug.to_uppercase(), "slug": slug }))
}

#[tokio::test]
async fn test_not_yet_populated_is_empty_without_error() {
    let service = TrendingService::new(Arc::new(MemoryTrendingStore::new()), "phim-bo");

    let lookup = service.get_trending(Some("phim-bo")).await;

    assert_eq!(lookup.status, TrendingStatus::NotYetPopulated);
    assert!(lookup.response.movies.is_empty());
    assert!(lookup.response.updated_at.is_none());
    assert!(lookup.response.error.is_none());
    assert_eq!(
        serde_json::to_value(&lookup.response).unwrap(),
        json!({ "movies": [], "updatedAt": null })
    );
}

#[tokio::test]
async fn test_populated_record_returned_exactly() {
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
    let store = MemoryTrendingStore::new();
    store.upsert(TrendingCacheRecord::new(
        "phim-bo",
        vec![movie("a"), movie("b")],
        Some(t0),
    ));
    let service = TrendingService::new(Arc::new(store), "phim-bo");

    let lookup = service.get_trending(Some("phim-bo")).await;

    assert!(lookup.is_populated());
    assert_eq!(lookup.response.movies, vec![movie("a"), movie("b")]);
    assert_eq!(lookup.response.updated_at, Some(t0));
    assert!(lookup.response.error.is_none());
}

#[tokio::test]
async fn test_missing_type_uses_default() {
    let store = MemoryTrendingStore::new();
    store.upsert(TrendingCacheRecord::new("phim-bo", vec![movie("a")], None));
    store.upsert(TrendingCacheRecord::new("phim-le", vec![movie("z")], None));
    let service = TrendingService::new(Arc::new(store), "phim-bo");

    for requested in [None, Some(""), Some("   ")] {
        let lookup = service.get_trending(requested).await;
        assert_eq!(lookup.category_type, "phim-bo");
        assert_eq!(lookup.response.movies, vec![movie("a")]);
    }

    let lookup = service.get_trending(Some("phim-le")).await;
    assert_eq!(lookup.response.movies, vec![movie("z")]);
}

#[tokio::test]
async fn test_blank_default_falls_back_to_phim_bo() {
    let service = TrendingService::new(Arc::new(MemoryTrendingStore::new()), " ");

    assert_eq!(service.default_type(), "phim-bo");
    assert_eq!(service.resolve_type(Some("hoat-hinh")), "hoat-hinh");
}

#[tokio::test]
async fn test_storage_failure_absorbed_with_flag() {
    let service = TrendingService::new(Arc::new(UnreachableStore), "phim-bo");

    let lookup = service.get_trending(None).await;

    assert_eq!(lookup.status, TrendingStatus::StorageUnavailable);
    assert_eq!(
        serde_json::to_value(&lookup.response).unwrap(),
        json!({ "movies": [], "updatedAt": null, "error": "storage_unavailable" })
    );
}

#[tokio::test(start_paused = true)]
async fn test_slow_store_times_out_as_unavailable() {
    let service = TrendingService::new(Arc::new(HangingStore), "phim-bo")
        .with_timeout(Duration::from_secs(3));

    let lookup = service.get_trending(None).await;

    assert_eq!(lookup.status, TrendingStatus::StorageUnavailable);
    assert_eq!(
        lookup.response.error.as_deref(),
        Some("storage_unavailable")
    );
}

#[tokio::test]
async fn test_replaced_record_serves_latest() {
    let store = Arc::new(MemoryTrendingStore::new());
    store.upsert(TrendingCacheRecord::new("phim-bo", vec![movie("a")], None));
    let service = TrendingService::new(store.clone(), "phim-bo");
    assert_eq!(service.get_trending(None).await.response.movies.len(), 1);

    store.upsert(TrendingCacheRecord::new(
        "phim-bo",
        vec![movie("b"), movie("c")],
        None,
    ));

    let lookup = service.get_trending(None).await;
    assert_eq!(lookup.response.movies, vec![movie("b"), movie("c")]);
}
