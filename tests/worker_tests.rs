use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use video_api::config::settings::AppConfig;
use video_api::infrastructure::queue::channel::JobQueue;
use video_api::modules::video::model::{JobStatus, VideoJob, VideoResult};
use video_api::modules::video::store::JobStore;
use video_api::state::AppState;
use video_api::workers::processor::{SimulatedProcessor, VideoProcessor};
use video_api::workers::spawn_workers;

/// Helper to create test state
fn create_test_state() -> AppState {
    AppState::new(AppConfig::default(), JobStore::new(), JobQueue::new())
}

/// Poll the store until the job reaches the expected status.
async fn wait_for_status(state: &AppState, id: &uuid::Uuid, expected: JobStatus) -> VideoJob {
    for _ in 0..200 {
        if let Some(job) = state.jobs.get(id).await {
            if job.status == expected {
                return job;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("job {} never reached {:?}", id, expected);
}

#[tokio::test]
async fn test_worker_pool_completes_dispatched_jobs() {
    let state = create_test_state();
    let processor = Arc::new(SimulatedProcessor::new(Duration::ZERO));
    spawn_workers(state.clone(), processor, 2);

    let mut ids = Vec::new();
    for i in 0..4 {
        let job = state.jobs.create(&format!("clip-{i}.mp4")).await;
        state.queue.dispatch(job.id).await.unwrap();
        ids.push(job.id);
    }

    for id in &ids {
        let job = wait_for_status(&state, id, JobStatus::Completed).await;
        assert_eq!(
            job.results,
            Some(VideoResult {
                duration: 120,
                resolution: "1080p".to_string(),
            })
        );
        assert!(job.completed_at.is_some());
    }
}

#[tokio::test]
async fn test_workers_drain_backlog_after_close() {
    let state = create_test_state();

    // Dispatch before any worker exists, then close the queue.
    let mut ids = Vec::new();
    for i in 0..3 {
        let job = state.jobs.create(&format!("backlog-{i}.mp4")).await;
        state.queue.dispatch(job.id).await.unwrap();
        ids.push(job.id);
    }
    state.queue.close();

    let processor = Arc::new(SimulatedProcessor::new(Duration::ZERO));
    let handles = spawn_workers(state.clone(), processor, 2);

    // The backlog is still processed to completion...
    for id in &ids {
        wait_for_status(&state, id, JobStatus::Completed).await;
    }

    // ...and once drained, every worker exits on its own.
    for handle in handles {
        timeout(Duration::from_secs(5), handle)
            .await
            .expect("worker did not stop after the queue drained")
            .unwrap();
    }
}

struct FailingProcessor;

#[async_trait::async_trait]
impl VideoProcessor for FailingProcessor {
    async fn process(&self, _job: &VideoJob) -> anyhow::Result<VideoResult> {
        Err(anyhow::anyhow!("out of disk space"))
    }
}

#[tokio::test]
async fn test_failed_jobs_record_the_reason() {
    let state = create_test_state();
    spawn_workers(state.clone(), Arc::new(FailingProcessor), 1);

    let job = state.jobs.create("broken.mp4").await;
    state.queue.dispatch(job.id).await.unwrap();

    let failed = wait_for_status(&state, &job.id, JobStatus::Failed).await;
    assert_eq!(failed.error.as_deref(), Some("out of disk space"));
    assert!(failed.results.is_none());
    assert!(failed.completed_at.is_some());
}

#[tokio::test]
async fn test_each_job_is_processed_exactly_once() {
    // Count how many times the processor runs; with several workers racing
    // on the same queue every id must still be handled once.
    struct CountingProcessor(std::sync::atomic::AtomicUsize);

    #[async_trait::async_trait]
    impl VideoProcessor for CountingProcessor {
        async fn process(&self, _job: &VideoJob) -> anyhow::Result<VideoResult> {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(VideoResult {
                duration: 120,
                resolution: "1080p".to_string(),
            })
        }
    }

    let state = create_test_state();
    let processor = Arc::new(CountingProcessor(std::sync::atomic::AtomicUsize::new(0)));
    spawn_workers(state.clone(), processor.clone(), 4);

    let mut ids = Vec::new();
    for i in 0..10 {
        let job = state.jobs.create(&format!("once-{i}.mp4")).await;
        state.queue.dispatch(job.id).await.unwrap();
        ids.push(job.id);
    }

    for id in &ids {
        wait_for_status(&state, id, JobStatus::Completed).await;
    }
    assert_eq!(processor.0.load(std::sync::atomic::Ordering::SeqCst), 10);
}
