//! Application entry point for the `argo-oceanview` service.
//!
//! This binary orchestrates the startup sequence for the ocean data API:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Building the HTTP float source and the single shared `OceanDataStore`
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `ARGO_API_URL` (optional) – upstream float data URL
//! - `ARGO_FETCH_TIMEOUT_SECS` (optional) – upstream timeout (default: 10)
//! - `ARGO_CACHE_TTL_SECS` (optional) – dataset cache lifetime (default: 300)
//! - `ARGO_BIND_ADDR` (optional) – listen address (default: `0.0.0.0:8080`)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
//!
//! The store is constructed here, once, and handed to the router; nothing
//! else reaches it through global state.
use std::{env, io::IsTerminal, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use argo_oceanview::{config, routes, HttpFloatSource, OceanDataStore};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let source = HttpFloatSource::new(cfg.api_url.clone(), cfg.fetch_timeout)
        .context("Failed to build upstream HTTP client")?;
    let store = Arc::new(OceanDataStore::with_ttl(source, cfg.cache_ttl));

    // Warm the cache so the first page load does not wait on the upstream.
    let warm = store.ocean_data().await;
    tracing::info!(
        "Initial dataset: {} floats ({})",
        warm.floats.len(),
        warm.origin.label()
    );

    // Build app from routes gateway (EMBP)
    let app: Router = routes::router(store);

    tracing::info!("Listening on {}", cfg.bind_addr);

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `AXUM_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by the `AXUM_LOG_LEVEL` env var
///
/// Call once at startup before any logging macros are invoked.
fn init_tracing() {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to AXUM_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("AXUM_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "debug",
        };
        EnvFilter::new(format!("{level},hyper=info,reqwest=info"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
