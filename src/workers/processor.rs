use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::modules::video::model::{VideoJob, VideoResult};

/// Processing backend used by the worker pool.
///
/// The pool only cares about the outcome: `Ok` carries the result to store
/// on the job, `Err` marks it failed with the error text as the reason.
#[async_trait]
pub trait VideoProcessor: Send + Sync {
    async fn process(&self, job: &VideoJob) -> Result<VideoResult>;
}

/// Stand-in for a real transcoding pipeline: sleeps for a fixed delay and
/// reports a canned result.
#[derive(Debug, Clone)]
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl VideoProcessor for SimulatedProcessor {
    async fn process(&self, job: &VideoJob) -> Result<VideoResult> {
        debug!(video_id = %job.id, filename = %job.filename, "Simulating processing for {:?}", self.delay);

        // TODO: swap the sleep for a real ffmpeg invocation
        tokio::time::sleep(self.delay).await;

        Ok(VideoResult {
            duration: 120,
            resolution: "1080p".to_string(),
        })
    }
}
