//! Error types for the signup HTTP adapter.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Registry errors map as follows:
//!
//! | Registry error | Status |
//! |----------------|--------|
//! | `ActivityNotFound` | 404 |
//! | `AlreadyRegistered` | 400 |
//! | `NotRegistered` | 404 |
//!
//! An unknown activity and an unregister of a non-participant share 404
//! and differ only in the `detail` text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use signup_core::RegistryError;

/// Errors that can occur in the signup HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request conflicts with the current roster state.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A query parameter was missing or invalid.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTML index page failed to render.
    #[error("template error: {0}")]
    Template(String),
}

impl ApiError {
    /// The HTTP status code this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Serialization(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ActivityNotFound { .. } => {
                Self::NotFound(String::from("Activity not found"))
            }
            RegistryError::AlreadyRegistered { .. } => {
                Self::BadRequest(String::from("Student is already signed up"))
            }
            RegistryError::NotRegistered { .. } => Self::NotFound(String::from(
                "Student is not signed up for this activity",
            )),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::InvalidQuery(msg)
            | Self::Template(msg) => msg.clone(),
            Self::Serialization(e) => format!("JSON error: {e}"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "detail": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
