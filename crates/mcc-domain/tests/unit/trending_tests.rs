//! Trending record schema tests

use chrono::{TimeZone, Utc};
use mcc_domain::value_objects::{MovieSummary, TrendingCacheRecord, TrendingResponse};
use serde_json::json;

#[test]
fn test_record_parses_camel_case_document() {
    let record = TrendingCacheRecord::from_json(
        r#"{
            "type": "phim-bo",
            "movies": [{"name": "A", "slug": "a"}, {"name": "B", "slug": "b"}],
            "updatedAt": "2026-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(record.category_type, "phim-bo");
    assert_eq!(record.movies.len(), 2);
    assert_eq!(record.movies[0].name(), Some("A"));
    assert_eq!(record.movies[1].slug(), Some("b"));
    assert_eq!(
        record.updated_at,
        Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_record_accepts_snake_case_timestamp() {
    let record = TrendingCacheRecord::from_json(
        r#"{"type": "phim-le", "movies": [], "updated_at": "2026-02-03T04:05:06Z"}"#,
    )
    .unwrap();
    assert!(record.updated_at.is_some());
}

#[test]
fn test_record_accepts_epoch_millis_timestamp() {
    let record =
        TrendingCacheRecord::from_json(r#"{"type": "phim-bo", "updatedAt": 1714550400000}"#)
            .unwrap();
    assert_eq!(
        record.updated_at,
        Some(Utc.timestamp_millis_opt(1_714_550_400_000).unwrap())
    );
}

#[test]
fn test_record_accepts_extended_json_dates() {
    let iso = TrendingCacheRecord::from_json(
        r#"{"type": "phim-bo", "updatedAt": {"$date": "2024-05-01T06:00:00Z"}}"#,
    )
    .unwrap();
    assert_eq!(
        iso.updated_at,
        Some(Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap())
    );

    let long = TrendingCacheRecord::from_json(
        r#"{"type": "phim-bo", "updatedAt": {"$date": {"$numberLong": "1714550400000"}}}"#,
    )
    .unwrap();
    assert_eq!(
        long.updated_at,
        Some(Utc.timestamp_millis_opt(1_714_550_400_000).unwrap())
    );
}

#[test]
fn test_record_unreadable_timestamp_becomes_none() {
    let record = TrendingCacheRecord::from_json(
        r#"{"type": "phim-bo", "movies": [{"name": "A"}], "updatedAt": "last tuesday"}"#,
    )
    .unwrap();
    assert!(record.updated_at.is_none());
    assert_eq!(record.movies.len(), 1);

    let flag = TrendingCacheRecord::from_json(r#"{"type": "phim-bo", "updatedAt": true}"#).unwrap();
    assert!(flag.updated_at.is_none());
}

#[test]
fn test_record_unknown_fields_round_trip() {
    let document = json!({
        "type": "phim-sap-chieu",
        "movies": [{"name": "A", "episode_current": "Trailer", "tmdb": {"vote": 7.5}}],
        "updatedAt": "2026-01-01T00:00:00Z",
        "source": "ophim",
        "version": 2
    });

    let record: TrendingCacheRecord = serde_json::from_value(document.clone()).unwrap();
    assert_eq!(record.extra.get("source"), Some(&json!("ophim")));

    let back = serde_json::to_value(&record).unwrap();
    assert_eq!(back, document);
}

#[test]
fn test_record_tolerates_missing_and_null_movies() {
    let missing = TrendingCacheRecord::from_json(r#"{"type": "phim-bo"}"#).unwrap();
    assert!(missing.movies.is_empty());
    assert!(missing.updated_at.is_none());

    let null = TrendingCacheRecord::from_json(r#"{"type": "phim-bo", "movies": null}"#).unwrap();
    assert!(null.movies.is_empty());
}

#[test]
fn test_movie_summary_keeps_non_object_values() {
    let movie: MovieSummary = serde_json::from_value(json!("legacy-slug")).unwrap();
    assert_eq!(movie.name(), None);
    assert_eq!(serde_json::to_value(&movie).unwrap(), json!("legacy-slug"));
}

#[test]
fn test_empty_response_serializes_null_timestamp_without_error() {
    let body = serde_json::to_value(TrendingResponse::empty()).unwrap();
    assert_eq!(body, json!({"movies": [], "updatedAt": null}));
}

#[test]
fn test_failed_response_carries_error_flag() {
    let body = serde_json::to_value(TrendingResponse::failed("storage_unavailable")).unwrap();
    assert_eq!(
        body,
        json!({"movies": [], "updatedAt": null, "error": "storage_unavailable"})
    );
}

#[test]
fn test_response_from_record_drops_extra_fields() {
    let mut record = TrendingCacheRecord::new(
        "phim-bo",
        vec![MovieSummary::new(json!({"name": "A"}))],
        Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
    );
    record.extra.insert("source".into(), json!("ophim"));

    let body = serde_json::to_value(TrendingResponse::from(record)).unwrap();
    assert_eq!(
        body,
        json!({"movies": [{"name": "A"}], "updatedAt": "2026-01-01T00:00:00Z"})
    );
}
