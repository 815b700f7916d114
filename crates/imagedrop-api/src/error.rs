//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`; domain errors
//! convert into `HttpAppError` via `?` and render consistently: status code
//! from the error taxonomy, a `{message}` JSON body, and level-aware
//! server-side logging. Infrastructure faults keep their internal detail in
//! the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use imagedrop_core::{AppError, LogLevel};
use serde::Serialize;

/// The one body shape every non-2xx response carries.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Wrapper type for AppError to implement IntoResponse.
/// Necessary because of Rust's orphan rules: IntoResponse (external trait)
/// cannot be implemented for AppError (external type from imagedrop-core).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorBody {
            message: app_error.client_message(),
        });

        (status, body).into_response()
    }
}
