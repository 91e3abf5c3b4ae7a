//! # tend-storage
//!
//! Persistence layer for the Tend habit-observation app.
//! All durable state is small JSON records behind the `StateStore` port:
//! an in-memory backend for tests and a single-table SQLite backend in
//! WAL mode, plus a typed repository over both.

#![allow(dead_code, unused)]

pub mod memory;
pub mod repository;
pub mod sqlite;

pub use memory::MemoryStore;
pub use repository::StateRepository;
pub use sqlite::SqliteStore;
