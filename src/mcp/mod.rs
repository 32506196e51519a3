//! Model Context Protocol (MCP) server implementation
//!
//! This module exposes the list store as MCP tools over Streamable HTTP or
//! stdio.
//!
//! # Architecture
//!
//! - **server**: `McpServer`, the `ServerHandler` carrying the tool router
//! - **tools**: Name-based tool logic per entity
//!   - ListTools: list operations and the example list
//!   - ItemTools: item operations within a named list
//! - **service**: Transport setup
//!
//! Tool failures are never protocol errors; they come back as text that
//! starts with `Error: `.

pub mod server;
mod service;
pub mod tools;


pub use server::McpServer;
pub use service::{create_mcp_service, serve_stdio};
