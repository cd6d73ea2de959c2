//! Rocket assembly
//!
//! Every route shares one managed [`AppContext`]. Error catchers give guard
//! refusals and unknown paths the same `{error, message}` body as handler
//! errors.

use mcc_infrastructure::AppContext;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, Route, catch, catchers, routes};

use crate::auth::{AdminAuthError, refusal};
use crate::constants::{ERROR_INTERNAL, ERROR_NOT_FOUND};
use crate::handlers::{cache_stats, get_catalog, get_trending, health, live, revalidate};
use crate::response::ErrorBody;

/// All API routes, mounted at `/`
pub fn api_routes() -> Vec<Route> {
    routes![
        get_trending,
        get_catalog,
        revalidate,
        cache_stats,
        health::health,
        live
    ]
}

/// Build the Rocket instance around an application context
pub fn build_rocket(context: AppContext) -> Rocket<Build> {
    rocket::build()
        .manage(context)
        .mount("/", api_routes())
        .register("/", catchers![unauthorized, forbidden, not_found, internal_error])
}

#[catch(401)]
fn unauthorized(request: &Request<'_>) -> Json<ErrorBody> {
    let reason = refusal(request).unwrap_or(AdminAuthError::InvalidKey);
    Json(reason.body())
}

#[catch(403)]
fn forbidden(request: &Request<'_>) -> Json<ErrorBody> {
    let reason = refusal(request).unwrap_or(AdminAuthError::Disabled);
    Json(reason.body())
}

#[catch(404)]
fn not_found(request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: ERROR_NOT_FOUND,
        message: format!("No route for {} {}", request.method(), request.uri().path()),
    })
}

#[catch(500)]
fn internal_error(status: Status, _request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: ERROR_INTERNAL,
        message: status.reason_lossy().to_string(),
    })
}
