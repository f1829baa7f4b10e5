//! Axum server setup
//!
//! Server skeleton with:
//! - CORS for the known frontend origins (credentials allowed)
//! - Tracing middleware
//! - Background database check at startup
//! - Graceful shutdown on SIGTERM/Ctrl+C, then release of the database handle

use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use pennywise_core::{DatabaseLifecycle, Settings};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::state::AppState;

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host name or IP to bind (default: 127.0.0.1)
    pub host: String,

    /// Port to bind (default: 8000)
    pub port: u16,

    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Bind target from `HOST`/`PORT`, plus `FRONTEND_URL` as an extra origin
    pub fn from_settings(settings: &Settings) -> Self {
        let mut allowed_origins: Vec<String> =
            DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect();
        if let Some(frontend) = &settings.frontend_url {
            if !allowed_origins.contains(frontend) {
                allowed_origins.push(frontend.clone());
            }
        }

        Self {
            host: settings.host.clone(),
            port: settings.port,
            allowed_origins,
        }
    }

    /// Replace the bind target with an explicit socket address
    pub fn with_bind(mut self, addr: SocketAddr) -> Self {
        self.host = addr.ip().to_string();
        self.port = addr.port();
        self
    }

    /// Resolve `host`/`port` to a socket address.
    ///
    /// IP literals (including bare or bracketed IPv6) are used directly;
    /// anything else goes through DNS and the first result wins.
    pub async fn resolve_bind_addr(&self) -> Result<SocketAddr, ServerError> {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        let mut addrs = tokio::net::lookup_host((host, self.port))
            .await
            .map_err(|source| ServerError::Resolve {
                host: self.host.clone(),
                source,
            })?;
        addrs.next().ok_or_else(|| ServerError::NoAddress {
            host: self.host.clone(),
        })
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    // Wildcards are not allowed together with credentials, so mirror instead.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Build the application router with all routes
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::root::router())
        .merge(routes::health::router())
        .merge(routes::settings::router())
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Acquire the database once and ping it. Logs the outcome, never fails.
pub async fn check_database(database: Arc<dyn DatabaseLifecycle>) {
    match database.ping().await {
        Ok(name) => tracing::info!(database = %name, "Connected to MongoDB"),
        Err(e) => tracing::warn!("Failed to connect to MongoDB: {}", e),
    }
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let settings = Settings::from_env();
/// let database = Arc::new(MongoManager::from_env());
/// let config = ServerConfig::from_settings(&settings);
/// run_server(AppState::new(settings, database), config).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    run_server_with_shutdown(state, config, shutdown_signal()).await
}

/// Run the HTTP server until `shutdown` completes, then release the database.
pub async fn run_server_with_shutdown<F>(
    state: AppState,
    config: ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(app = %state.settings().app_name, "Backend initializing");
    tokio::spawn(check_database(Arc::clone(state.database())));
    if !state.nessie().has_api_key() {
        tracing::warn!("NESSIE is not set; /settings will return 500");
    }

    let database = Arc::clone(state.database());
    let app = build_router(state, &config);

    // Bind listener
    let bind_addr = config.resolve_bind_addr().await?;
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    database.release().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to resolve bind host '{host}': {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Bind host '{host}' resolved to no addresses")]
    NoAddress { host: String },
}
