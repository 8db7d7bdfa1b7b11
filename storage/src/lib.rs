//! Storage crate: user profiles and chat sessions keyed by chat id.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`session_store`] – SessionStore trait
//! - [`sqlite_store`] – SqliteSessionStore (SQLite via sqlx)
//! - [`inmemory_store`] – InMemorySessionStore
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod inmemory_store;
mod session_store;
mod sqlite_pool;
mod sqlite_store;

pub use error::StorageError;
pub use inmemory_store::InMemorySessionStore;
pub use session_store::SessionStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteSessionStore;
