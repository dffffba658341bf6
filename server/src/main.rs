mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use config::ServerConfig;
use content::ContentError;
use rate_limit::RateLimitConfig;
use services::contact::{ContactRelay, ResendRelay};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("content failed validation: {0}")]
    Content(#[from] ContentError),
    #[error("{0}")]
    Router(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Content problems surface here instead of at first render.
    let catalog = content::builtin()?;
    let warnings = catalog.validate()?;
    for warning in &warnings {
        tracing::warn!(%warning, "content warning");
    }
    if config.content_strict {
        catalog.validate_strict()?;
    }
    tracing::info!(
        projects = catalog.projects.len(),
        categories = catalog.categories.len(),
        delivery = ?catalog.contact.delivery,
        "content loaded"
    );

    // Non-fatal: the contact endpoint answers 503 without a relay.
    let relay: Option<Arc<dyn ContactRelay>> = match config.relay {
        Some(relay_config) => {
            tracing::info!(to = %relay_config.to, "contact relay configured");
            Some(Arc::new(ResendRelay::new(relay_config)))
        }
        None => {
            tracing::warn!("contact relay not configured; /api/contact disabled");
            None
        }
    };

    let state = state::AppState::new(relay, RateLimitConfig::from_env());
    let limits = state.rate_limiter.config();
    tracing::info!(
        per_client = limits.per_client_limit,
        per_client_window_secs = limits.per_client_window.as_secs(),
        global = limits.global_limit,
        global_window_secs = limits.global_window.as_secs(),
        "contact rate limits"
    );

    let app = routes::leptos_app(state).map_err(StartupError::Router)?;
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
