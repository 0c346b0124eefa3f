use crate::config::settings::AppConfig;
use crate::infrastructure::queue::channel::JobQueue;
use crate::modules::video::store::JobStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub jobs: JobStore,
    pub queue: JobQueue,
}

impl AppState {
    pub fn new(config: AppConfig, jobs: JobStore, queue: JobQueue) -> Self {
        Self {
            config,
            jobs,
            queue,
        }
    }
}
