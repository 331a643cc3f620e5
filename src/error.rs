use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", &self);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
