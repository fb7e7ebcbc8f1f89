use anyhow::{Context, Result};
use guestbook_core::{AppConfig, BackendConfig};
use guestbook_http::{create_router, AppState};
use guestbook_service::GuestbookService;
use guestbook_storage::StorageBackend;
use std::sync::Arc;

pub(crate) async fn run(host: String) -> Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;

    match &config.backend {
        BackendConfig::Remote { primary, replica } => {
            tracing::info!(%primary, %replica, "using remote store");
        },
        BackendConfig::Memory => {
            tracing::info!("no remote store configured, using in-memory datastore");
        },
    }
    let storage = Arc::new(
        StorageBackend::from_config(&config.backend)
            .context("failed to set up storage backend")?,
    );
    let guestbook_service = Arc::new(GuestbookService::new(storage));
    tracing::info!(backend = guestbook_service.backend_kind(), "storage backend ready");

    let state = Arc::new(AppState::new(Arc::clone(&guestbook_service), config.hostname));
    let router = create_router(state);
    let addr = format!("{host}:{}", config.listen_port);
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    guestbook_service.shutdown().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
