//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod author_repository;
pub mod book_repository;

pub use author_repository::AuthorRepository;
pub use book_repository::BookRepository;
