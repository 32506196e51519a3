pub mod api;
pub mod db;
pub mod mcp;
pub mod serde_utils;
