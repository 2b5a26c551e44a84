//! Axum host that serves the feed and routes comment events to it.

mod routes;
pub mod templates;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::sync::Mutex;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::feed::Feed;
use crate::post::TimestampFormatter;

/// Shared application state.
///
/// The whole feed sits behind one lock, so events are applied one at a time
/// in the order requests acquire it.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<Mutex<Feed>>,
    pub config: Arc<Config>,
    pub formatter: TimestampFormatter,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, feed: Feed) -> Self {
        Self {
            formatter: config.timestamp_formatter(),
            feed: Arc::new(Mutex::new(feed)),
            config: Arc::new(config),
        }
    }
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(config: Config, feed: Feed) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(AppState::new(config, feed));

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir(state.config.static_dir.as_ref());
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. `STATIC_DIR` if configured
/// 2. ./static (development)
/// 3. /usr/share/feed-post/static (installed)
/// 4. Falls back to ./static
fn find_static_dir(configured: Option<&PathBuf>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.clone();
    }

    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/feed-post/static"),
    ];

    for path in &candidates {
        if path.exists() && path.is_dir() {
            return path.clone();
        }
    }

    // Default fallback
    PathBuf::from("./static")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down...");
}
