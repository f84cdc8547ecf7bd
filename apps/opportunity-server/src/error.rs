use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use grip_ai::AiError;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// API-surface error. Validation problems become 400 responses carrying
/// the message; everything else is a generic 500 with the detail tucked
/// under a separate key.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!("Unexpected error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Unexpected error", "detail": detail })),
                )
                    .into_response()
            }
        }
    }
}

impl From<grip_core::Error> for ApiError {
    fn from(err: grip_core::Error) -> Self {
        match err {
            grip_core::Error::Validation(validation) => ApiError::BadRequest(validation.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::Core(core) => core.into(),
            err if err.is_validation() => ApiError::BadRequest(err.to_string()),
            err => ApiError::Internal(err.to_string()),
        }
    }
}
