//! Author Repository Gateway
//!
//! Abstract trait defining the contract for author persistence operations.

use async_trait::async_trait;

use crate::domain::models::author::{Author, AuthorId, CreateAuthorData};
use crate::shared::errors::RepositoryError;

/// Repository trait for Author persistence operations
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find an author by its ID
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepositoryError>;

    /// Find all authors, sorted by name ascending
    async fn find_all(&self) -> Result<Vec<Author>, RepositoryError>;

    /// Create a new author
    async fn create(&self, data: &CreateAuthorData) -> Result<Author, RepositoryError>;
}
