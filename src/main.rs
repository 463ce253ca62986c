//! Greed Trial backend binary entrypoint wiring the HTTP surface, the JSON
//! store, and the background cache supervisors.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dao;
mod dto;
mod error;
mod routes;
mod services;
mod state;

use config::{AppConfig, MIN_POOL_SIZE};
use dao::json_store::{JsonFileStore, JsonStoreConfig};
use dao::store::GreedStore;
use dao::trivia_source::{TriviaSourceClient, TriviaSourceConfig};
use services::{leaderboard_supervisor, refill_supervisor};
use state::{AppState, SharedState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env();

    let store = JsonFileStore::connect(JsonStoreConfig::from_env())
        .await
        .context("opening JSON store")?;
    let store: Arc<dyn GreedStore> = Arc::new(store);
    let app_state = AppState::new(store);

    restore_trivia_pools(&app_state).await;

    let client = TriviaSourceClient::new(TriviaSourceConfig::from_env())
        .context("building question source client")?;

    // Background tasks run for the process lifetime and stop when the
    // shutdown flag flips after the server drains.
    let (shutdown_tx, _) = watch::channel(false);
    let refill = tokio::spawn(refill_supervisor::run(
        app_state.clone(),
        client,
        config.clone(),
        shutdown_tx.subscribe(),
    ));
    let leaderboard = tokio::spawn(leaderboard_supervisor::run(
        app_state.clone(),
        config.leaderboard_refresh_interval,
        shutdown_tx.subscribe(),
    ));

    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    // Let the current supervisor cycles finish or be abandoned; they hold no
    // external handles across cycles.
    let _ = shutdown_tx.send(true);
    let _ = tokio::join!(refill, leaderboard);

    Ok(())
}

/// Restore the trivia pools from the persisted snapshot, then make sure
/// every tier has at least its fallback contents before the first request.
async fn restore_trivia_pools(state: &SharedState) {
    match state.store().load_trivia_snapshot().await {
        Ok(Some(snapshot)) => {
            state.trivia().restore(snapshot).await;
            let sizes = state.trivia().sizes().await;
            info!(
                easy = sizes.easy,
                medium = sizes.medium,
                hard = sizes.hard,
                "restored trivia cache from snapshot"
            );
        }
        Ok(None) => info!("no trivia snapshot found; starting from fallback banks"),
        Err(err) => warn!(error = %err, "failed to load trivia snapshot; starting from fallback banks"),
    }

    state.trivia().seed_fallbacks(MIN_POOL_SIZE).await;
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
