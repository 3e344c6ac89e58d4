//! Add Author Use Case
//!
//! Registers a new author in the catalog.

use std::sync::Arc;

use crate::domain::gateways::AuthorRepository;
use crate::domain::models::author::{Author, CreateAuthorData};
use crate::shared::errors::UseCaseError;

/// Use case for adding a new author
pub struct AddAuthorUseCase {
    author_repository: Arc<dyn AuthorRepository>,
}

impl AddAuthorUseCase {
    /// Create a new AddAuthorUseCase
    #[must_use]
    pub fn new(author_repository: Arc<dyn AuthorRepository>) -> Self {
        Self { author_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the date of death precedes the birth date.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateAuthorData) -> Result<Author, UseCaseError> {
        tracing::info!(name = %data.name, birth_date = %data.birth_date, "Adding new author");

        if let Err(err) = data.validate() {
            tracing::warn!(name = %data.name, error = %err, "Rejected author with invalid dates");
            return Err(err.into());
        }

        let author = self.author_repository.create(&data).await?;

        tracing::info!(author_id = %author.id(), "Author added successfully");
        Ok(author)
    }
}
