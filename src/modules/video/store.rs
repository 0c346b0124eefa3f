use std::collections::HashMap;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{JobStatus, VideoJob, VideoResult};

/// In-memory registry of every job the service has ever accepted.
///
/// Jobs are retained for the lifetime of the process so that results stay
/// queryable after completion. The store is the single owner of job state;
/// handlers and workers share it through `AppState`.
#[derive(Clone, Default)]
pub struct JobStore {
    jobs: Arc<RwLock<HashMap<Uuid, VideoJob>>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly submitted job in `Queued` state and return it.
    pub async fn create(&self, filename: &str) -> VideoJob {
        let job = VideoJob::new(filename);
        self.jobs.write().await.insert(job.id, job.clone());
        job
    }

    pub async fn get(&self, id: &Uuid) -> Option<VideoJob> {
        self.jobs.read().await.get(id).cloned()
    }

    /// `Queued -> Processing`. Returns the updated job, or `None` when the
    /// id is unknown or the job already left the queue.
    pub async fn mark_processing(&self, id: &Uuid) -> Option<VideoJob> {
        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(id) {
            Some(job) if job.status == JobStatus::Queued => {
                job.status = JobStatus::Processing;
                Some(job.clone())
            }
            _ => None,
        }
    }

    /// `Processing -> Completed`, attaching the result. Returns false when
    /// the job is not in `Processing`, leaving any previous outcome intact.
    pub async fn mark_completed(&self, id: &Uuid, results: VideoResult) -> bool {
        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(id) {
            Some(job) if job.status == JobStatus::Processing => {
                job.status = JobStatus::Completed;
                job.results = Some(results);
                job.completed_at = Some(OffsetDateTime::now_utc());
                true
            }
            _ => false,
        }
    }

    /// Move a job from any non-terminal state to `Failed`, recording the
    /// reason. Terminal jobs are never overwritten.
    pub async fn mark_failed(&self, id: &Uuid, reason: String) -> bool {
        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(id) {
            Some(job) if !job.status.is_terminal() => {
                job.status = JobStatus::Failed;
                job.error = Some(reason);
                job.completed_at = Some(OffsetDateTime::now_utc());
                true
            }
            _ => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}
