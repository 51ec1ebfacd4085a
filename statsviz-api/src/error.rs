use crate::render::RenderError;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid statistics payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error(transparent)]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Form(#[from] FormRejection),
    #[error(transparent)]
    Multipart(#[from] MultipartRejection),
    #[error(transparent)]
    MultipartField(#[from] MultipartError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Query(e) => e.status(),
            ApiError::Form(e) => e.status(),
            ApiError::Multipart(e) => e.status(),
            ApiError::MultipartField(e) => e.status(),
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{self}");
        } else {
            warn!("{self}");
        }

        (status, self.to_string()).into_response()
    }
}
