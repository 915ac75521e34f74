use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use crate::rides::validation::ValidationFailure;

/// Everything a ride operation can fail with. Each variant maps to one
/// `error_code` in the response payload.
#[derive(Debug, thiserror::Error)]
pub enum RideError {
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    #[error("Invalid page / per_page, both must start at 1")]
    Query,

    #[error("Could not find any rides")]
    NotFound,

    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl RideError {
    fn error_code(&self) -> &'static str {
        match self {
            RideError::Validation(_) => "VALIDATION_ERROR",
            RideError::Query => "QUERY_ERROR",
            RideError::NotFound => "RIDES_NOT_FOUND_ERROR",
            RideError::Database(_) => "SERVER_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error_code: &'static str,
    message: String,
}

impl IntoResponse for RideError {
    /// Failures keep the transport-level 200 of the original API; clients
    /// switch on `error_code`. Store faults are logged in full server-side
    /// and redacted to "Unknown error" on the wire.
    fn into_response(self) -> Response {
        let message = match &self {
            RideError::Database(err) => {
                error!("[SERVER_ERROR] {err}");
                "Unknown error".to_string()
            }
            other => {
                warn!("[{}] {other}", other.error_code());
                other.to_string()
            }
        };

        let body = ErrorBody {
            error_code: self.error_code(),
            message,
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}
