use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use video_api::config::settings::AppConfig;
use video_api::infrastructure::queue::channel::JobQueue;
use video_api::modules::video::store::JobStore;
use video_api::state::AppState;
use video_api::workers::processor::SimulatedProcessor;
use video_api::{app, shutdown, workers};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new();
    let state = AppState::new(config.clone(), JobStore::new(), JobQueue::new());

    let processor = Arc::new(SimulatedProcessor::new(config.processing_delay()));
    let worker_handles = workers::spawn_workers(state.clone(), processor, config.worker_count);

    let shutdown_token = shutdown::install_shutdown_handler();

    let app = app::create_app(state.clone()).await;

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_token.cancelled_owned())
        .await
        .unwrap();

    // Stop accepting work, then let the pool finish what is already queued.
    info!(pending = state.queue.pending(), "Draining job queue");
    state.queue.close();
    for handle in worker_handles {
        let _ = handle.await;
    }

    info!(jobs = state.jobs.len().await, "Shutdown complete");
}
