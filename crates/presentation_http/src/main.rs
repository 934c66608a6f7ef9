//! Taleforge speech service
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::NarrationService;
use audio_cache::AudioCacheStore;
use presentation_http::{AppConfig, routes, state::AppState, tasks};
use speech::select_provider;
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taleforge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Taleforge speech service v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        audio_dir = %config.cache.audio_dir.display(),
        "Configuration loaded"
    );

    // Wire the speech provider and cache
    let synthesizer = select_provider(&config.speech)
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech provider: {e}"))?;

    let cache = Arc::new(AudioCacheStore::new(&config.cache.audio_dir));
    let narration = Arc::new(NarrationService::new(synthesizer, Arc::clone(&cache)));

    // Periodic retention sweep
    let sweep_handle = tasks::spawn_cache_sweep_task(
        cache,
        config.cache.retention_days,
        Some(Duration::from_secs(config.cache.sweep_interval_secs)),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        narration,
        config: Arc::new(config),
    };

    // Build router with middleware
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweep_handle.abort();
    info!("Server stopped");

    Ok(())
}

/// Wait for ctrl-c
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
