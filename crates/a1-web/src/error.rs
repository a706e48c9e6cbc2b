use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use a1_core::error::AppError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            e if e.is_not_found() => StatusCode::NOT_FOUND,
            AppError::InvalidLead(_) => StatusCode::BAD_REQUEST,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Status { .. }
            | AppError::NetworkError(_)
            | AppError::HttpError(_)
            | AppError::SerializationError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match &self.0 {
            e if e.is_not_found() => "not_found",
            AppError::InvalidLead(_) => "validation_error",
            AppError::Timeout(_) => "timeout",
            AppError::Status { .. } => "upstream_error",
            AppError::NetworkError(_) | AppError::HttpError(_) => "upstream_unreachable",
            AppError::SerializationError(_) => "upstream_payload",
            AppError::ConfigError(_) => "config_error",
            _ => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = ErrorResponse {
            error: self.error_type().to_string(),
            message: self.0.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
