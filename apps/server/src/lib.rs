//! HTTP surface and process wiring for the uptime monitor.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use uptime::{MonitorStore, NewWebsite, PollLoop, ProbeExecutor};

pub mod cli;
pub mod config;
pub mod error;
mod routes;
pub mod state;

use config::{Config, WebsiteEntry};
use error::{ApiError, AppError};
use state::AppState;

/// Register extractor error handlers and every route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    );

    routes::routes(cfg);
}

/// Register the configured websites, skipping invalid entries
pub async fn register_websites(store: &MonitorStore, entries: &[WebsiteEntry]) -> usize {
    let mut registered = 0;
    for entry in entries {
        match store.add_website(NewWebsite::new(&entry.name, &entry.url)).await {
            Ok(_) => registered += 1,
            Err(e) => warn!(name = %entry.name, url = %entry.url, "Skipping configured website: {e}"),
        }
    }
    registered
}

/// Run the poll loop and the HTTP server until the server shuts down
pub async fn run(config: Config) -> Result<(), AppError> {
    let monitoring = &config.monitoring;

    let store = Arc::new(MonitorStore::new(monitoring.interval_ms));
    let registered = register_websites(&store, &config.websites).await;
    info!(registered, "Initial websites loaded");

    let executor = Arc::new(
        ProbeExecutor::new(monitoring.timeout_ms, monitoring.threshold_ms)
            .map_err(AppError::Client)?,
    );

    let state = web::Data::new(AppState::new(store.clone(), monitoring.feed_limit));
    let addr = config.bind_addr();
    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(&addr)?
        .run();
    info!(%addr, "HTTP server listening");

    let poll = PollLoop::new(store, executor, Duration::from_millis(monitoring.interval_ms))
        .with_max_concurrency(monitoring.max_concurrent_probes)
        .spawn();

    let result = server.await;

    info!("HTTP server stopped, stopping poll loop");
    poll.shutdown().await;

    result?;
    Ok(())
}
