//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Configuration
//! - SQLite connection pool and migrations
//! - SQLite repositories

pub mod config;
pub mod database;
pub mod sqlite;

pub use config::AppConfig;
pub use sqlite::{SqliteAuthorRepository, SqliteBookRepository};
