//! Error handling

use axum::response::IntoResponse;
use tracing::info;

use crate::generator::GenerationError;

/// definitions for the picstory application.
#[derive(Debug)]
pub enum PicstoryError {
    /// When the upload was missing or malformed
    BadRequest,
    /// When DB operations fail
    DatabaseError(sea_orm::DbErr),
    /// When the model service call fails
    GenerationFailed(GenerationError),
    /// When an internal server error occurs
    InternalServerError(String),
}

impl From<sea_orm::DbErr> for PicstoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        PicstoryError::DatabaseError(err)
    }
}

impl From<std::io::Error> for PicstoryError {
    fn from(err: std::io::Error) -> Self {
        PicstoryError::InternalServerError(err.to_string())
    }
}

impl From<GenerationError> for PicstoryError {
    fn from(err: GenerationError) -> Self {
        PicstoryError::GenerationFailed(err)
    }
}

impl IntoResponse for PicstoryError {
    fn into_response(self) -> axum::response::Response {
        match self {
            PicstoryError::BadRequest => {
                info!("Bad request received");
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Bad Request"));
                *response.status_mut() = axum::http::StatusCode::BAD_REQUEST;
                response
            }
            PicstoryError::DatabaseError(err) => {
                tracing::error!("Database error: {}", err);
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Database error"));
                *response.status_mut() = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
            PicstoryError::GenerationFailed(err) => {
                tracing::error!("Story generation failed: {}", err);
                let mut response = axum::response::Response::new(axum::body::Body::from(
                    "Story generation failed",
                ));
                *response.status_mut() = axum::http::StatusCode::BAD_GATEWAY;
                response
            }
            PicstoryError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Internal server error"));
                *response.status_mut() = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
        }
    }
}
