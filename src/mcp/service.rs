//! MCP transports
//!
//! Streamable HTTP for nesting into the Axum router, and stdio for clients
//! that spawn the server as a subprocess. Both share the caller's store.

use std::sync::Arc;

use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::api::ApiError;
use crate::db::Database;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use todolist::db::MemoryDatabase;
/// # use todolist::mcp::create_mcp_service;
///
/// let db = Arc::new(MemoryDatabase::new());
/// let mcp_service = create_mcp_service(db, CancellationToken::new());
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// ```
pub fn create_mcp_service<D: Database + 'static>(
    db: Arc<D>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<D>, LocalSessionManager> {
    // Service factory: creates new McpServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory =
        move || -> Result<McpServer<D>, std::io::Error> { Ok(McpServer::new(Arc::clone(&db))) };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Serve MCP over stdin/stdout until the client disconnects or
/// `cancellation_token` fires.
pub async fn serve_stdio<D: Database + 'static>(
    db: Arc<D>,
    cancellation_token: CancellationToken,
) -> Result<(), ApiError> {
    info!("MCP server listening on stdio");

    let service = McpServer::new(db)
        .serve_with_ct(rmcp::transport::stdio(), cancellation_token)
        .await
        .map_err(|e| ApiError::Mcp {
            message: e.to_string(),
        })?;

    let reason = service.waiting().await.map_err(|e| ApiError::Mcp {
        message: e.to_string(),
    })?;
    info!(?reason, "MCP stdio session ended");
    Ok(())
}
