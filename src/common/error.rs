use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::modules::video::model::JobStatus;

/// Body shape for every non-success response, including the 202
/// "still processing" signal.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Video not found.")]
    VideoNotFound,

    /// Not a failure: the id is valid but the job has not reached a terminal
    /// state yet. Maps to 202 so clients know to retry later.
    #[error("Video is still {0}.")]
    StillProcessing(JobStatus),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::VideoNotFound => StatusCode::NOT_FOUND,
            ApiError::StillProcessing(_) => StatusCode::ACCEPTED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = ?err, "Internal server error");
        }
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
