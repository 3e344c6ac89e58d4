//! Web Module
//!
//! Server-rendered HTML pages: handlers, form DTOs, flash messages, views
//! and middleware.

pub mod flash;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod views;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    AddAuthorUseCase, AddBookUseCase, DeleteBookUseCase, GetAuthorsUseCase, GetBooksUseCase,
};
use crate::domain::gateways::{AuthorRepository, BookRepository};
use crate::domain::models::book::CoverImageSource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub add_author_use_case: Arc<AddAuthorUseCase>,
    pub get_authors_use_case: Arc<GetAuthorsUseCase>,
    pub add_book_use_case: Arc<AddBookUseCase>,
    pub get_books_use_case: Arc<GetBooksUseCase>,
    pub delete_book_use_case: Arc<DeleteBookUseCase>,
}

impl AppState {
    /// Wire every use case to the given repositories
    #[must_use]
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        author_repository: Arc<dyn AuthorRepository>,
        covers: CoverImageSource,
    ) -> Self {
        Self {
            add_author_use_case: Arc::new(AddAuthorUseCase::new(author_repository.clone())),
            get_authors_use_case: Arc::new(GetAuthorsUseCase::new(author_repository.clone())),
            add_book_use_case: Arc::new(AddBookUseCase::new(
                book_repository.clone(),
                author_repository,
                covers,
            )),
            get_books_use_case: Arc::new(GetBooksUseCase::new(book_repository.clone())),
            delete_book_use_case: Arc::new(DeleteBookUseCase::new(book_repository)),
        }
    }
}

/// Build the application router with request tracing
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::books::router())
        .merge(handlers::authors::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
