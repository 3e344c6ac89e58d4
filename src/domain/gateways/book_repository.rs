//! Book Repository Gateway
//!
//! Abstract trait defining the contract for book persistence operations.

use async_trait::async_trait;

use crate::domain::models::book::{Book, BookDeletion, BookId, BookQuery, BookWithAuthor, NewBook};
use crate::shared::errors::RepositoryError;

/// Repository trait for Book persistence operations
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List books joined with their author, filtered and ordered by the query
    async fn search(&self, query: &BookQuery) -> Result<Vec<BookWithAuthor>, RepositoryError>;

    /// Create a new book
    async fn create(&self, book: &NewBook) -> Result<Book, RepositoryError>;

    /// Delete a book, returning it if it existed. An author left without
    /// books is deleted in the same transaction.
    async fn delete(&self, id: BookId) -> Result<Option<BookDeletion>, RepositoryError>;
}
