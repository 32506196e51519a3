//! The list store.
//!
//! This module provides trait-based abstractions for the store's operation
//! set together with the in-memory backend both front ends share.
//!
//! # Architecture
//!
//! - `error`: The three store error kinds
//! - `input`: Normalization of id and text input before validation
//! - `models`: Domain entities (TodoList, TodoItem, ItemPatch)
//! - `repository`: Trait definitions for data access
//! - `memory`: Mutex-guarded in-memory implementation

mod error;
mod input;
mod memory;
mod models;
mod repository;


pub use error::{DbError, DbResult};
pub use input::{IdInput, IdKind, parse_required_id, parse_required_text};
pub use memory::{MemoryDatabase, MemoryItemRepository, MemoryListRepository};
pub use models::*;
pub use repository::*;
