use super::dto::{SubmitVideoRequest, SubmitVideoResponse, VideoStatusResponse};
use super::service::VideoService;
use crate::common::error::ErrorDetail;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Submit a video for processing
#[utoipa::path(
    post,
    path = "/v1/videos",
    request_body = SubmitVideoRequest,
    responses(
        (status = 202, description = "Video accepted and queued", body = SubmitVideoResponse),
        (status = 422, description = "Missing or invalid filename", body = ErrorDetail)
    ),
    tag = "Videos"
)]
pub async fn submit_video(
    State(state): State<AppState>,
    Json(payload): Json<SubmitVideoRequest>,
) -> impl IntoResponse {
    match VideoService::submit(state, payload).await {
        Ok(res) => (StatusCode::ACCEPTED, Json(res)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get video processing status
#[utoipa::path(
    get,
    path = "/v1/videos/{video_id}",
    params(
        ("video_id" = String, Path, description = "Video ID returned at submission")
    ),
    responses(
        (status = 200, description = "Processing finished", body = VideoStatusResponse),
        (status = 202, description = "Still queued or processing", body = ErrorDetail),
        (status = 404, description = "Unknown video id", body = ErrorDetail)
    ),
    tag = "Videos"
)]
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    match VideoService::status(state, &video_id).await {
        Ok(res) => (StatusCode::OK, Json(res)).into_response(),
        Err(e) => e.into_response(),
    }
}
