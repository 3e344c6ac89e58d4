//! Get Authors Use Case
//!
//! Retrieves all authors, sorted by name.

use std::sync::Arc;

use crate::domain::gateways::AuthorRepository;
use crate::domain::models::author::Author;
use crate::shared::errors::UseCaseError;

/// Use case for listing every author
pub struct GetAuthorsUseCase {
    author_repository: Arc<dyn AuthorRepository>,
}

impl GetAuthorsUseCase {
    /// Create a new GetAuthorsUseCase
    #[must_use]
    pub fn new(author_repository: Arc<dyn AuthorRepository>) -> Self {
        Self { author_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Author>, UseCaseError> {
        tracing::debug!("Getting all authors");

        let authors = self.author_repository.find_all().await?;

        tracing::debug!(count = authors.len(), "Found authors");
        Ok(authors)
    }
}
