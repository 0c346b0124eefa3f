use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle of a submitted video.
///
/// Jobs only move forward: `Queued -> Processing -> Completed`, with
/// `Failed` reachable from any non-terminal state. `Completed` and
/// `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Queued => write!(f, "queued"),
            JobStatus::Processing => write!(f, "processing"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of a successfully processed video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VideoResult {
    /// Duration in seconds.
    pub duration: i32,
    pub resolution: String,
}

#[derive(Debug, Clone)]
pub struct VideoJob {
    pub id: Uuid,
    pub filename: String,
    pub status: JobStatus,
    pub results: Option<VideoResult>,
    pub error: Option<String>,
    pub created_at: OffsetDateTime,
    pub completed_at: Option<OffsetDateTime>,
}

impl VideoJob {
    pub fn new(filename: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            status: JobStatus::Queued,
            results: None,
            error: None,
            created_at: OffsetDateTime::now_utc(),
            completed_at: None,
        }
    }
}
