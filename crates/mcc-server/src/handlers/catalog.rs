//! Catalog proxy handler

use mcc_infrastructure::AppContext;
use rocket::http::uri::fmt::Path;
use rocket::http::uri::{Origin, Segments};
use rocket::{State, get};
use serde_json::Value;

use crate::constants::{X_CACHE_HEADER, X_CACHE_HIT, X_CACHE_MISS};
use crate::response::{ApiError, ApiResponse};

/// Read-through proxy for `GET {base_url}/<path..>`
///
/// The query string is part of the endpoint key, so `?page=2` is cached
/// separately from `?page=1`. Entries are tagged with the first path
/// segment (e.g. `danh-sach`) on top of the configured default tags.
#[get("/api/catalog/<path..>")]
pub async fn get_catalog(
    context: &State<AppContext>,
    path: Segments<'_, Path>,
    origin: &Origin<'_>,
) -> Result<ApiResponse<Value>, ApiError> {
    let segments: Vec<&str> = path.collect();
    let mut endpoint = segments.join("/");
    if let Some(query) = origin.query() {
        endpoint.push('?');
        endpoint.push_str(query.as_str());
    }

    let section: Vec<&str> = segments.first().copied().into_iter().collect();
    let response = context.catalog().lookup_tagged(&endpoint, &section).await?;

    let x_cache = if response.from_cache {
        X_CACHE_HIT
    } else {
        X_CACHE_MISS
    };
    Ok(ApiResponse::ok(response.value).with_header(X_CACHE_HEADER, x_cache))
}
