//! SQLite Repositories
//!
//! SQLx-backed implementations of the domain repository traits.

mod author_repository;
mod book_repository;

pub use author_repository::SqliteAuthorRepository;
pub use book_repository::SqliteBookRepository;
