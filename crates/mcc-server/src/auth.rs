//! Admin API Authentication
//!
//! Shared-key authentication for the administrative routes. The key travels
//! in the `X-Admin-Key` header by default (configurable via `admin.header`).
//!
//! # Configuration
//!
//! - Config file: `admin.enabled = true` and `admin.key = "your-key"`
//! - Environment variable: `MCC__ADMIN__KEY=your-key`
//!
//! Admin routes answer 403 while `admin.enabled` is false, and 401 when the
//! key is missing or wrong. Probes and public routes take no guard.

use mcc_infrastructure::AppContext;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use tracing::warn;

use crate::constants::{ERROR_ADMIN_DISABLED, ERROR_INVALID_API_KEY, ERROR_MISSING_API_KEY};
use crate::response::ErrorBody;

/// Request guard for admin routes
///
/// ```rust,ignore
/// #[post("/api/revalidate?<tag>")]
/// async fn revalidate(_auth: AdminAuth, tag: Option<String>) -> ... { ... }
/// ```
#[derive(Debug)]
pub struct AdminAuth;

/// Why an admin request was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAuthError {
    /// Admin endpoints are switched off
    Disabled,
    /// Header absent
    MissingKey(String),
    /// Header present with the wrong key
    InvalidKey,
}

impl AdminAuthError {
    /// Response body for the refusal
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Disabled => ErrorBody {
                error: ERROR_ADMIN_DISABLED,
                message: "Admin endpoints are disabled. Set admin.enabled and admin.key.".to_string(),
            },
            Self::MissingKey(header) => ErrorBody {
                error: ERROR_MISSING_API_KEY,
                message: format!("Admin API key required. Provide it in the '{header}' header."),
            },
            Self::InvalidKey => ErrorBody {
                error: ERROR_INVALID_API_KEY,
                message: "Invalid admin API key".to_string(),
            },
        }
    }
}

/// Refuse the request, leaving the reason for the error catcher
fn refuse(
    request: &Request<'_>,
    status: Status,
    reason: AdminAuthError,
) -> request::Outcome<AdminAuth, AdminAuthError> {
    request.local_cache(|| Some(reason.clone()));
    Outcome::Error((status, reason))
}

/// Reason recorded by the guard for this request, if it refused one
pub fn refusal(request: &Request<'_>) -> Option<AdminAuthError> {
    request.local_cache(|| None::<AdminAuthError>).clone()
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminAuth {
    type Error = AdminAuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(context) = request.rocket().state::<AppContext>() else {
            return refuse(request, Status::Forbidden, AdminAuthError::Disabled);
        };
        let admin = &context.config.admin;

        if !admin.enabled {
            return refuse(request, Status::Forbidden, AdminAuthError::Disabled);
        }

        match request.headers().get_one(&admin.header) {
            Some(key) if admin.accepts(key) => Outcome::Success(AdminAuth),
            Some(_) => {
                warn!(path = %request.uri().path(), "Rejected admin request with invalid key");
                refuse(request, Status::Unauthorized, AdminAuthError::InvalidKey)
            }
            None => refuse(
                request,
                Status::Unauthorized,
                AdminAuthError::MissingKey(admin.header.clone()),
            ),
        }
    }
}
