//! Structured API failure type shared by every REST call.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as an HTTP status plus an optional JSON body
//! with a human-readable `detail`. Pages use the status to pick copy
//! (permission vs. generic) and show `detail` verbatim when present.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;
use thiserror::Error;

pub const STATUS_UNAUTHORIZED: u16 = 401;
pub const STATUS_FORBIDDEN: u16 = 403;
pub const STATUS_NOT_FOUND: u16 = 404;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request failed ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// A success response whose body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// No browser transport (SSR or native builds).
    #[error("api not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|payload| extract_detail(&payload));
        ApiError::Status { status, detail }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(STATUS_FORBIDDEN)
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(STATUS_UNAUTHORIZED)
    }

    /// Backend detail when present, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().map_or_else(|| fallback.to_owned(), str::to_owned)
    }
}

/// Pull a human-readable message out of a FastAPI-style error body.
pub(crate) fn extract_detail(payload: &Value) -> Option<String> {
    if let Some(detail) = payload.get("detail") {
        if let Some(text) = detail.as_str() {
            return Some(text.to_owned());
        }
        if let Some(items) = detail.as_array() {
            let joined = items
                .iter()
                .filter_map(|item| {
                    item.get("msg")
                        .and_then(Value::as_str)
                        .or_else(|| item.get("message").and_then(Value::as_str))
                })
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
    }

    payload
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| payload.get("error").and_then(Value::as_str))
        .map(str::to_owned)
}
