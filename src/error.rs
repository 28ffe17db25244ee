use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::views::ViewError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Unavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg).into_response(),
        }
    }
}

impl From<ViewError> for ApiError {
    fn from(value: ViewError) -> Self {
        match value {
            ViewError::NotFound(_) => ApiError::NotFound(value.to_string()),
            ViewError::Full => {
                warn!("view registry is full");
                ApiError::Unavailable(value.to_string())
            }
        }
    }
}
