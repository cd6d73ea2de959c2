//! Trending list handler
//!
//! Serves the materialized trending record for a category. The route never
//! fails: a missing record and an unreachable store both answer 200 with an
//! empty list, the latter with an `error` flag in the body.

use mcc_domain::value_objects::TrendingResponse;
use mcc_infrastructure::AppContext;
use rocket::{FromForm, State, get};

use crate::constants::CACHE_CONTROL_NO_STORE;
use crate::response::ApiResponse;

/// Query string of `GET /api/trending`
#[derive(Debug, Default, FromForm)]
pub struct TrendingQuery {
    /// Category type, defaults to the configured type when absent or blank
    #[field(name = "type")]
    pub category_type: Option<String>,
}

/// Current trending list for `?type=`
///
/// Responses backed by a stored record are publicly cacheable; empty and
/// failed responses are marked `no-store` so a CDN never pins them.
#[get("/api/trending?<query..>")]
pub async fn get_trending(
    context: &State<AppContext>,
    query: TrendingQuery,
) -> ApiResponse<TrendingResponse> {
    let lookup = context
        .trending()
        .get_trending(query.category_type.as_deref())
        .await;

    let cache_control = if lookup.is_populated() {
        context.config.trending.cache_control()
    } else {
        CACHE_CONTROL_NO_STORE.to_string()
    };

    ApiResponse::ok(lookup.response).with_header("Cache-Control", cache_control)
}
