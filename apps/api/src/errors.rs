use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Detail returned when the prompt is blank after trimming.
pub const EMPTY_PROMPT_DETAIL: &str = "Prompt can't be empty.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Bodies use the shape `{"detail": "..."}` the UI already reads.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    MalformedRequest(String),

    #[error("Gemini error: {0}")]
    Generation(#[from] LlmError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Generation(e) => tracing::error!("Generation failed: {e}"),
            AppError::MalformedRequest(msg) => tracing::warn!("Rejected request body: {msg}"),
            AppError::InvalidInput(_) => {}
        }

        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
