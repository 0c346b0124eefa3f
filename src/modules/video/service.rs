use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::dto::{SubmitVideoRequest, SubmitVideoResponse, VideoStatusResponse};
use crate::common::error::ApiError;
use crate::state::AppState;

pub struct VideoService;

impl VideoService {
    /// Register a new job and hand its id to the worker pool. Returns as
    /// soon as the job is queued; processing happens in the background.
    pub async fn submit(
        state: AppState,
        req: SubmitVideoRequest,
    ) -> Result<SubmitVideoResponse, ApiError> {
        req.validate()?;

        let job = state.jobs.create(&req.filename).await;
        info!(video_id = %job.id, filename = %job.filename, state = %job.status, "Video queued");

        state.queue.dispatch(job.id).await?;

        Ok(SubmitVideoResponse {
            video_id: job.id,
            status: job.status,
        })
    }

    /// Look up a job by the id handed out at submission.
    ///
    /// Ids are opaque tokens: anything that does not name a known job is
    /// reported as not found rather than as a malformed request.
    pub async fn status(state: AppState, video_id: &str) -> Result<VideoStatusResponse, ApiError> {
        let id = match Uuid::parse_str(video_id) {
            Ok(id) => id,
            Err(_) => {
                info!(video_id, "Video not found");
                return Err(ApiError::VideoNotFound);
            }
        };

        let job = match state.jobs.get(&id).await {
            Some(job) => job,
            None => {
                info!(video_id, "Video not found");
                return Err(ApiError::VideoNotFound);
            }
        };

        if !job.status.is_terminal() {
            info!(video_id, state = %job.status, "Video still in progress");
            return Err(ApiError::StillProcessing(job.status));
        }

        info!(video_id, state = %job.status, "Returning final status");
        Ok(VideoStatusResponse::from(job))
    }
}
