//! Delete Book Use Case
//!
//! Removes a book from the catalog. An author left without any books is
//! removed as well.

use std::sync::Arc;

use crate::domain::gateways::BookRepository;
use crate::domain::models::book::{BookDeletion, BookId};
use crate::shared::errors::UseCaseError;

/// Use case for deleting a book and cleaning up its author
pub struct DeleteBookUseCase {
    book_repository: Arc<dyn BookRepository>,
}

impl DeleteBookUseCase {
    /// Create a new DeleteBookUseCase
    #[must_use]
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the book doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: BookId) -> Result<BookDeletion, UseCaseError> {
        tracing::info!(book_id = %id, "Deleting book");

        let Some(deletion) = self.book_repository.delete(id).await? else {
            tracing::warn!(book_id = %id, "Book not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Book".to_string(),
                id: id.to_string(),
            });
        };

        if deletion.author_removed {
            tracing::info!(
                author_id = %deletion.book.author_id(),
                "Removed author with no remaining books"
            );
        }

        tracing::info!(book_id = %id, "Book deleted successfully");
        Ok(deletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::author::AuthorId;
    use crate::domain::models::book::{Book, BookQuery, BookWithAuthor, NewBook};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory catalog of books and the authors they belong to
    struct MockBookRepository {
        books: Mutex<Vec<Book>>,
        authors: Mutex<Vec<AuthorId>>,
        fail_delete: bool,
    }

    impl MockBookRepository {
        fn new(authors: &[i64], books: &[(i64, i64)]) -> Self {
            Self {
                authors: Mutex::new(authors.iter().copied().map(AuthorId::from).collect()),
                books: Mutex::new(
                    books
                        .iter()
                        .map(|&(id, author_id)| {
                            Book::restore(
                                BookId::from(id),
                                "0000000000".to_string(),
                                format!("Book {id}"),
                                2000,
                                None,
                                AuthorId::from(author_id),
                            )
                        })
                        .collect(),
                ),
                fail_delete: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_delete: true,
                ..Self::new(&[], &[])
            }
        }

        fn author_ids(&self) -> Vec<i64> {
            self.authors.lock().unwrap().iter().map(|a| a.value()).collect()
        }
    }

    #[async_trait]
    impl BookRepository for MockBookRepository {
        async fn search(&self, _query: &BookQuery) -> Result<Vec<BookWithAuthor>, RepositoryError> {
            Ok(vec![])
        }

        async fn create(&self, _book: &NewBook) -> Result<Book, RepositoryError> {
            Err(RepositoryError::Mapping("not used".to_string()))
        }

        async fn delete(&self, id: BookId) -> Result<Option<BookDeletion>, RepositoryError> {
            if self.fail_delete {
                return Err(RepositoryError::Mapping("connection lost".to_string()));
            }

            let mut books = self.books.lock().unwrap();
            let Some(position) = books.iter().position(|b| b.id() == id) else {
                return Ok(None);
            };
            let book = books.remove(position);

            let author_removed = !books.iter().any(|b| b.author_id() == book.author_id());
            if author_removed {
                self.authors.lock().unwrap().retain(|a| *a != book.author_id());
            }

            Ok(Some(BookDeletion {
                book,
                author_removed,
            }))
        }
    }

    #[tokio::test]
    async fn should_remove_author_when_last_book_is_deleted() {
        let repo = Arc::new(MockBookRepository::new(&[1, 2], &[(10, 1), (20, 2)]));
        let use_case = DeleteBookUseCase::new(repo.clone());

        let deletion = use_case.execute(BookId::from(10)).await.unwrap();

        assert_eq!(deletion.book.id(), BookId::from(10));
        assert!(deletion.author_removed);
        assert_eq!(repo.author_ids(), vec![2]);
    }

    #[tokio::test]
    async fn should_keep_author_with_remaining_books() {
        let repo = Arc::new(MockBookRepository::new(&[1], &[(10, 1), (11, 1)]));
        let use_case = DeleteBookUseCase::new(repo.clone());

        let deletion = use_case.execute(BookId::from(10)).await.unwrap();

        assert!(!deletion.author_removed);
        assert_eq!(repo.author_ids(), vec![1]);
        assert!(repo.books.lock().unwrap().iter().all(|b| b.id() != BookId::from(10)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_book_does_not_exist() {
        let repo = Arc::new(MockBookRepository::new(&[1], &[(10, 1)]));
        let use_case = DeleteBookUseCase::new(repo.clone());

        let result = use_case.execute(BookId::from(99)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
        assert_eq!(repo.author_ids(), vec![1]);
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let use_case = DeleteBookUseCase::new(Arc::new(MockBookRepository::failing()));

        let result = use_case.execute(BookId::from(10)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
