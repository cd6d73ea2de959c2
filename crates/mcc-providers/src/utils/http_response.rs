//! HTTP Response Utilities
//!
//! Turns upstream HTTP responses into decoded JSON or a
//! [`Error::FetchFailure`] carrying the endpoint and status.

use mcc_domain::error::{Error, Result};
use reqwest::Response;

use crate::constants::ERROR_BODY_MAX_CHARS;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `endpoint` - Endpoint key, reported in the error
    ///
    /// # Returns
    /// Parsed JSON value on success, or a fetch failure
    pub async fn check_and_parse(response: Response, endpoint: &str) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let error_text = truncate(error_text.trim());
            let code = status.as_u16();

            let context = match code {
                404 => "not found".to_string(),
                429 => "rate limit exceeded".to_string(),
                500..=599 => format!("server error ({code})"),
                _ => format!("request failed ({code})"),
            };

            return Err(Error::fetch_status(
                endpoint,
                code,
                if error_text.is_empty() {
                    context
                } else {
                    format!("{context}: {error_text}")
                },
            ));
        }

        response
            .json()
            .await
            .map_err(|e| Error::fetch(endpoint, format!("response parse failed: {e}")))
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= ERROR_BODY_MAX_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(ERROR_BODY_MAX_CHARS).collect();
    cut.push('…');
    cut
}
