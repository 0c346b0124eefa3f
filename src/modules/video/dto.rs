use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::video::model::{JobStatus, VideoJob, VideoResult};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitVideoRequest {
    #[validate(length(min = 1, message = "Filename must not be empty"))]
    pub filename: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitVideoResponse {
    pub video_id: Uuid,
    pub status: JobStatus,
}

/// Report for a job that reached a terminal state. `results` is present on
/// completed jobs, `error` on failed ones.
#[derive(Debug, Serialize, ToSchema)]
pub struct VideoStatusResponse {
    pub video_id: Uuid,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<VideoResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<VideoJob> for VideoStatusResponse {
    fn from(job: VideoJob) -> Self {
        Self {
            video_id: job.id,
            status: job.status,
            results: job.results,
            error: job.error,
        }
    }
}
