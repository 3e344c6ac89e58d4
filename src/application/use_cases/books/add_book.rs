//! Add Book Use Case
//!
//! Adds a book to the catalog under an existing author.

use std::sync::Arc;

use crate::domain::gateways::{AuthorRepository, BookRepository};
use crate::domain::models::book::{Book, CoverImageSource, CreateBookData, NewBook};
use crate::shared::errors::UseCaseError;

/// Use case for adding a new book
pub struct AddBookUseCase {
    book_repository: Arc<dyn BookRepository>,
    author_repository: Arc<dyn AuthorRepository>,
    covers: CoverImageSource,
}

impl AddBookUseCase {
    /// Create a new AddBookUseCase
    #[must_use]
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        author_repository: Arc<dyn AuthorRepository>,
        covers: CoverImageSource,
    ) -> Self {
        Self {
            book_repository,
            author_repository,
            covers,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the referenced author doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateBookData) -> Result<Book, UseCaseError> {
        tracing::info!(isbn = %data.isbn, title = %data.title, author_id = %data.author_id, "Adding new book");

        if self.author_repository.find_by_id(data.author_id).await?.is_none() {
            tracing::warn!(author_id = %data.author_id, "Author not found for new book");
            return Err(UseCaseError::NotFound {
                resource: "Author".to_string(),
                id: data.author_id.to_string(),
            });
        }

        let book = self
            .book_repository
            .create(&NewBook::new(data, &self.covers))
            .await?;

        tracing::info!(book_id = %book.id(), "Book added successfully");
        Ok(book)
    }
}
