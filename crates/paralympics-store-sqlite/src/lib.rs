//! SQLite backend for the Paralympics store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Each store operation is one SQLite
//! transaction.

mod encode;
mod schema;
mod store;
mod tables;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
