//! OS signal handling.

use crate::lifecycle::shutdown::ShutdownSignal;

/// Resolve on Ctrl-C, SIGTERM (unix), or an internal shutdown trigger.
///
/// Dropping the owning `Shutdown` counts as a trigger.
pub async fn shutdown_signal(internal: ShutdownSignal) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received"),
        _ = terminate => tracing::info!("SIGTERM received"),
        _ = internal.triggered() => tracing::info!("Shutdown triggered"),
    }
    tracing::info!("Shutdown signal received");
}
