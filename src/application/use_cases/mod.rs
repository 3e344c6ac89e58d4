//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod authors;
pub mod books;

pub use authors::{AddAuthorUseCase, GetAuthorsUseCase};
pub use books::{AddBookUseCase, DeleteBookUseCase, GetBooksUseCase};
