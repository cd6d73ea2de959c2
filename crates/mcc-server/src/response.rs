//! JSON responders
//!
//! [`ApiResponse`] is a JSON body plus status and extra headers;
//! [`ApiError`] maps domain errors onto `{error, message}` bodies.

use std::borrow::Cow;

use mcc_domain::error::Error;
use rocket::Request;
use rocket::http::{Header, Status};
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use serde::Serialize;
use tracing::error;

use crate::constants::{ERROR_FETCH_FAILURE, ERROR_INTERNAL, ERROR_INVALID_ARGUMENT};

/// JSON body with a status and additional headers
#[derive(Debug)]
pub struct ApiResponse<T> {
    body: T,
    status: Status,
    headers: Vec<Header<'static>>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with `body`
    pub fn ok(body: T) -> Self {
        Self {
            body,
            status: Status::Ok,
            headers: Vec::new(),
        }
    }

    /// Add a response header
    pub fn with_header(
        mut self,
        name: &'static str,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }
}

impl<'r, T: Serialize> Responder<'r, 'static> for ApiResponse<T> {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let mut builder = Response::build_from(Json(self.body).respond_to(request)?);
        builder.status(self.status);
        for header in self.headers {
            builder.header(header);
        }
        builder.ok()
    }
}

/// Error body returned by every route
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub error: &'static str,
    /// Human-readable message
    pub message: String,
}

/// An error response
#[derive(Debug)]
pub struct ApiError {
    status: Status,
    body: ErrorBody,
}

impl ApiError {
    /// Create an error response
    pub fn new(status: Status, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error,
                message: message.into(),
            },
        }
    }

    /// HTTP status of this error
    pub fn status(&self) -> Status {
        self.status
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        self.body.error
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::FetchFailure { .. } => {
                Self::new(Status::BadGateway, ERROR_FETCH_FAILURE, err.to_string())
            }
            Error::InvalidArgument { .. } => {
                Self::new(Status::BadRequest, ERROR_INVALID_ARGUMENT, err.to_string())
            }
            other => {
                error!(error = %other, "Request failed");
                Self::new(Status::InternalServerError, ERROR_INTERNAL, other.to_string())
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}
