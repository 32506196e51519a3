//! In-memory implementation of the store traits.
//!
//! Both collections live behind a single mutex so that every operation,
//! cascade delete included, is one critical section.

mod database;
mod item;
mod list;


pub use database::MemoryDatabase;
pub use item::MemoryItemRepository;
pub use list::MemoryListRepository;
