//! Get Books Use Case
//!
//! Lists books with their authors, optionally filtered by a search term and sorted.

use std::sync::Arc;

use crate::domain::gateways::BookRepository;
use crate::domain::models::book::{BookQuery, BookWithAuthor};
use crate::shared::errors::UseCaseError;

/// Use case for listing, searching and sorting books
pub struct GetBooksUseCase {
    book_repository: Arc<dyn BookRepository>,
}

impl GetBooksUseCase {
    /// Create a new GetBooksUseCase
    #[must_use]
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, query: BookQuery) -> Result<Vec<BookWithAuthor>, UseCaseError> {
        tracing::debug!(
            search = ?query.search(),
            sort = ?query.sort().map(|s| s.as_str()),
            "Getting books"
        );

        let books = self.book_repository.search(&query).await?;

        tracing::debug!(count = books.len(), "Found books");
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::author::AuthorId;
    use crate::domain::models::book::{Book, BookDeletion, BookId, BookSort, NewBook};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockBookRepository {
        last_query: Mutex<Option<BookQuery>>,
        search_result: Vec<BookWithAuthor>,
    }

    #[async_trait]
    impl BookRepository for MockBookRepository {
        async fn search(&self, query: &BookQuery) -> Result<Vec<BookWithAuthor>, RepositoryError> {
            *self.last_query.lock().unwrap() = Some(query.clone());
            Ok(self.search_result.clone())
        }

        async fn create(&self, _book: &NewBook) -> Result<Book, RepositoryError> {
            Err(RepositoryError::Mapping("not used".to_string()))
        }

        async fn delete(&self, _id: BookId) -> Result<Option<BookDeletion>, RepositoryError> {
            Ok(None)
        }
    }

    fn listing(id: i64, title: &str, author_name: &str) -> BookWithAuthor {
        BookWithAuthor {
            book: Book::restore(
                BookId::from(id),
                "0000000000".to_string(),
                title.to_string(),
                2000,
                None,
                AuthorId::from(1),
            ),
            author_name: author_name.to_string(),
        }
    }

    #[tokio::test]
    async fn should_pass_query_to_repository() {
        let repo = Arc::new(MockBookRepository {
            last_query: Mutex::new(None),
            search_result: vec![listing(1, "Dune", "Frank Herbert")],
        });
        let use_case = GetBooksUseCase::new(repo.clone());
        let query = BookQuery::new(Some("dune".to_string()), Some(BookSort::Author));

        let books = use_case.execute(query.clone()).await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(repo.last_query.lock().unwrap().as_ref(), Some(&query));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_catalog_is_empty() {
        let repo = Arc::new(MockBookRepository {
            last_query: Mutex::new(None),
            search_result: vec![],
        });

        let books = GetBooksUseCase::new(repo).execute(BookQuery::default()).await.unwrap();

        assert!(books.is_empty());
    }
}
