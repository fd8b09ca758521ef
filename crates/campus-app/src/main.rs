use std::sync::Arc;

use campus_app::app::api::build_router;
use campus_core::config::{LoggingConfig, load_config};
use campus_service::auth::AuthService;
use salvo::Listener;
use salvo::conn::TcpListener;
use salvo::server::ServerHandle;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the fmt subscriber at `debug` until the configured level is known.
fn init_tracing() -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    filter_handle
}

fn apply_log_level(handle: &FilterHandle, logging: &LoggingConfig) {
    match EnvFilter::try_new(&logging.level) {
        Ok(filter) => {
            if let Err(e) = handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        }
        Err(e) => {
            tracing::warn!(level = %logging.level, error = %e, "Invalid log level, keeping debug");
        }
    }
}

async fn stop_on_ctrl_c(handle: ServerHandle) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown requested");
    handle.stop_graceful(None);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter_handle = init_tracing();

    let config = load_config()?;
    apply_log_level(&filter_handle, &config.logging);
    tracing::info!(config = ?config, "Configuration loaded");

    let auth = Arc::new(AuthService::from_settings(&config)?);
    let router = build_router(&config, auth).await?;

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;
    tracing::info!(%bind_addr, "Campus portal listening");

    let server = salvo::Server::new(acceptor);
    tokio::spawn(stop_on_ctrl_c(server.handle()));
    server.serve(router).await;

    Ok(())
}
