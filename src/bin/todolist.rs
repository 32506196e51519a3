//! Todo list server binary.
//!
//! Serves the HTTP API and the MCP endpoint over one in-memory store, and
//! optionally MCP over stdio as well.

use std::net::IpAddr;
use std::sync::Arc;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todolist::api::{self, ApiError, Config};
use todolist::db::MemoryDatabase;
use todolist::mcp::serve_stdio;
use tokio_util::sync::CancellationToken;
use tracing::error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(todolist::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todolist")]
#[command(author, version, about = "In-memory todo list server with HTTP and MCP access", long_about = None)]
struct Cli {
    /// Host address to bind to [env: TODOLIST_HOST, default: 0.0.0.0]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: TODOLIST_PORT, default: 3002]
    #[arg(short, long)]
    port: Option<u16>,

    /// Also serve MCP over stdin/stdout
    #[arg(long)]
    stdio: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let db = Arc::new(MemoryDatabase::new());
    let shutdown = CancellationToken::new();

    tokio::spawn(api::cancel_on_signal(
        tokio::signal::ctrl_c(),
        shutdown.clone(),
    ));

    if cli.stdio {
        let db = Arc::clone(&db);
        let token = shutdown.child_token();
        tokio::spawn(async move {
            if let Err(e) = serve_stdio(db, token).await {
                error!(error = %e, "MCP stdio transport failed");
            }
        });
    }

    api::run(config, db, shutdown).await?;

    Ok(())
}
