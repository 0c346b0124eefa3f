use anyhow::{Result, anyhow};
use async_channel::{Receiver, Sender};
use tracing::debug;
use uuid::Uuid;

/// In-process queue of job ids feeding the worker pool.
///
/// Backed by an unbounded MPMC channel: handlers push ids on one side,
/// every worker holds its own receiver on the other. An id is delivered to
/// exactly one worker.
#[derive(Clone)]
pub struct JobQueue {
    tx: Sender<Uuid>,
    rx: Receiver<Uuid>,
}

impl JobQueue {
    pub fn new() -> Self {
        let (tx, rx) = async_channel::unbounded();
        Self { tx, rx }
    }

    /// Hand a job id to the worker pool.
    pub async fn dispatch(&self, video_id: Uuid) -> Result<()> {
        self.tx
            .send(video_id)
            .await
            .map_err(|e| anyhow!("Job queue is closed: {}", e))?;
        debug!(video_id = %video_id, "Dispatched job to worker pool");
        Ok(())
    }

    /// Receiver for one worker. Each clone competes for messages.
    pub fn subscribe(&self) -> Receiver<Uuid> {
        self.rx.clone()
    }

    /// Close the queue. Ids already dispatched stay receivable until the
    /// workers drain them; further `dispatch` calls fail.
    pub fn close(&self) -> bool {
        self.tx.close()
    }

    /// Number of ids dispatched but not yet picked up by a worker.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl Default for JobQueue {
    fn default() -> Self {
        Self::new()
    }
}
