pub mod upload;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler errors, answered as plain-text bodies.
pub enum AppError {
    BadRequest(String),
    /// A rejection that already knows its status, such as an oversized body.
    Status(StatusCode, String),
    Internal(anyhow::Error),
}

impl AppError {
    /// Keep the status multipart parsing picked (413 for a body over the limit).
    pub fn multipart(err: MultipartError) -> Self {
        Self::Status(err.status(), err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::Status(status, message) => (status, message).into_response(),
            AppError::Internal(err) => {
                let message = err.to_string();
                let message = if message.is_empty() {
                    "Upload failed".to_string()
                } else {
                    message
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
