use tokio::signal::unix::{SignalKind, signal};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Install the process signal handler.
///
/// The returned token is cancelled on Ctrl-C or SIGTERM; the server stops
/// accepting requests and the worker pool drains the queue before exit.
pub fn install_shutdown_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => info!("Received Ctrl-C, shutting down"),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down"),
        }

        handler_token.cancel();
    });

    token
}
