//! Administrative handlers
//!
//! Both routes take the [`AdminAuth`] guard.

use mcc_domain::value_objects::CacheStats;
use mcc_infrastructure::AppContext;
use rocket::serde::json::Json;
use rocket::{State, get, post};
use serde::Serialize;

use crate::auth::AdminAuth;
use crate::response::ApiError;

/// Body of `POST /api/revalidate`
#[derive(Debug, Clone, Serialize)]
pub struct RevalidateResponse {
    /// Always true; failures answer with an error body instead
    pub revalidated: bool,
    /// Tag that was invalidated
    pub tag: String,
    /// Number of entries removed
    pub purged: usize,
    /// Server time in milliseconds since the epoch
    pub now: i64,
}

/// Purge every cached entry carrying `?tag=`
///
/// Repeating the call is harmless; a tag with no entries purges nothing.
#[post("/api/revalidate?<tag>")]
pub async fn revalidate(
    _auth: AdminAuth,
    context: &State<AppContext>,
    tag: Option<String>,
) -> Result<Json<RevalidateResponse>, ApiError> {
    let tag = tag.unwrap_or_default();
    let purged = context.catalog().invalidate(&tag).await?;

    Ok(Json(RevalidateResponse {
        revalidated: true,
        tag: tag.trim().to_string(),
        purged,
        now: context.clock().now().timestamp_millis(),
    }))
}

/// Cache counters and store sizes
#[get("/api/cache/stats")]
pub async fn cache_stats(
    _auth: AdminAuth,
    context: &State<AppContext>,
) -> Result<Json<CacheStats>, ApiError> {
    Ok(Json(context.catalog().stats().await?))
}
