use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::state::AppState;

pub mod processor;

use processor::VideoProcessor;

/// Spawn the pool of worker tasks consuming the shared job queue.
///
/// Each worker runs until the queue is closed and drained; the returned
/// handles let the caller wait for that during shutdown.
pub fn spawn_workers(
    state: AppState,
    processor: Arc<dyn VideoProcessor>,
    count: usize,
) -> Vec<JoinHandle<()>> {
    info!("🎬 Starting {} processing workers", count);

    (0..count)
        .map(|worker_id| {
            let state = state.clone();
            let processor = processor.clone();
            tokio::spawn(async move {
                run_worker(worker_id, state, processor).await;
            })
        })
        .collect()
}

async fn run_worker(worker_id: usize, state: AppState, processor: Arc<dyn VideoProcessor>) {
    let queue = state.queue.subscribe();

    // One job at a time per worker; parallelism comes from the pool size.
    // recv only errs once the queue is closed and drained.
    while let Ok(video_id) = queue.recv().await {
        process_one(&state, processor.as_ref(), video_id).await;
    }

    info!(worker_id, "Worker stopped, queue closed and drained");
}

/// Run a single job through the processor, advancing its state in the store.
async fn process_one(state: &AppState, processor: &dyn VideoProcessor, video_id: Uuid) {
    // Claiming flips Queued -> Processing; a job that is not claimable was
    // already handled (or never stored) and must not run twice.
    let job = match state.jobs.mark_processing(&video_id).await {
        Some(job) => job,
        None => {
            warn!(video_id = %video_id, "Skipping job that is not in queued state");
            return;
        }
    };

    info!(video_id = %video_id, filename = %job.filename, "📦 Processing video");

    match processor.process(&job).await {
        Ok(results) => {
            if state.jobs.mark_completed(&video_id, results).await {
                info!(video_id = %video_id, "✅ Processing completed");
            } else {
                warn!(video_id = %video_id, "Completed job was no longer in processing state");
            }
        }
        Err(e) => {
            error!(video_id = %video_id, error = %e, "❌ Processing failed");
            state.jobs.mark_failed(&video_id, format!("{e:#}")).await;
        }
    }
}
