//! Uniform JSON response wrapper.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Response body for every API route.
///
/// Serializes as `{"status":"SUCCESS","data":...}` or
/// `{"status":"FAILED","message":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Envelope<T> {
    Success { data: T },
    Failed { message: String },
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope::Success { data }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Envelope::Failed {
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
