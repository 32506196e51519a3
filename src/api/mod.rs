mod routes;
mod state;
pub mod v1;


pub use routes::{ApiDoc, create_router};
pub use state::AppState;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::mcp::create_mcp_service;

/// Default port, matching what existing clients of the list API expect.
pub const DEFAULT_PORT: u16 = 3002;

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "TODOLIST_HOST";
/// Environment variable overriding the port.
pub const PORT_ENV: &str = "TODOLIST_PORT";

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(todolist::api::bind),
        help("Is another process listening on this port? Pass --port or set TODOLIST_PORT.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(todolist::api::serve))]
    Serve(#[source] std::io::Error),

    #[error("MCP transport error: {message}")]
    #[diagnostic(code(todolist::api::mcp))]
    Mcp { message: String },
}

/// API server configuration
///
/// Precedence: builder overrides (CLI flags) > environment > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Default configuration with `TODOLIST_HOST` / `TODOLIST_PORT` applied.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Some(host) = env_value::<IpAddr>(HOST_ENV) {
            config.host = host;
        }
        if let Some(port) = env_value::<u16>(PORT_ENV) {
            config.port = port;
        }
        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_value<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr; stdout may be carrying MCP stdio frames.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the full application: REST routes plus the MCP service at `/mcp`.
pub fn create_app<D: Database + 'static>(
    db: Arc<D>,
    cancellation_token: CancellationToken,
) -> axum::Router {
    let state = AppState::new(db);
    let mcp_service = create_mcp_service(state.db_arc(), cancellation_token);

    create_router(state)
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http())
}

/// Cancel `token` once `signal` fires.
///
/// A signal that cannot be installed is logged and the token is left alone,
/// so the server keeps running.
pub async fn cancel_on_signal<F>(signal: F, token: CancellationToken)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("Shutdown signal received");
            token.cancel();
        }
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}

/// Run the API server until `shutdown` is cancelled.
pub async fn run<D: Database + 'static>(
    config: Config,
    db: Arc<D>,
    shutdown: CancellationToken,
) -> Result<(), ApiError> {
    let app = create_app(db, shutdown.child_token());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);
    info!("MCP endpoint available at http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(ApiError::Serve)?;

    info!("API server stopped");
    Ok(())
}
