//! HTTP error mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use formcraft_core::FormError;
use thiserror::Error;

use crate::models::ApiResponse;

/// Errors surfaced by JSON handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("render failed: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),
}

impl ApiError {
    /// Response status
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Form(FormError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Form(FormError::InvalidArgument(_)) | ApiError::Body(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Form(FormError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Form(FormError::Gateway(_)) | ApiError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Form(FormError::Validation(_)) => "validation_error",
            ApiError::Form(FormError::InvalidArgument(_)) => "invalid_argument",
            ApiError::Body(_) => "invalid_body",
            ApiError::Form(FormError::NotFound(_)) => "not_found",
            ApiError::Form(FormError::Gateway(_)) | ApiError::Render(_) => "internal_error",
        }
    }

    /// Message safe to show a client; internal details stay in the log
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Form(FormError::Gateway(_)) | ApiError::Render(_) => {
                "internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ApiResponse::<()>::error(self.code(), &self.public_message());
        (status, Json(body)).into_response()
    }
}
