//! Book Handlers
//!
//! The homepage listing plus pages for adding and deleting books.

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;

use super::form_rejection;
use crate::domain::models::book::{BookId, BookQuery};
use crate::infrastructure::driving_adapters::web::flash::{self, Flash, Notice};
use crate::infrastructure::driving_adapters::web::forms::{AddBookForm, BookListForm};
use crate::infrastructure::driving_adapters::web::views::{
    render, AddBookPage, AuthorOption, BookView, HomePage,
};
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for book pages
#[must_use]
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(search_books))
        .route("/add_book", get(add_book_page).post(add_book))
        .route("/book/:id", get(delete_book).post(delete_book))
}

/// GET / - List books, optionally filtered and sorted via the query string
async fn list_books(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(form): Query<BookListForm>,
) -> Result<(CookieJar, Html<String>), ApiError> {
    homepage(&state, jar, form.into()).await
}

/// POST / - List books filtered and sorted by the homepage form
async fn search_books(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<BookListForm>,
) -> Result<(CookieJar, Html<String>), ApiError> {
    homepage(&state, jar, form.into()).await
}

async fn homepage(
    state: &AppState,
    jar: CookieJar,
    query: BookQuery,
) -> Result<(CookieJar, Html<String>), ApiError> {
    let (jar, notice) = flash::take_notice(jar);
    let books = state.get_books_use_case.execute(query.clone()).await?;

    let mut flashes: Vec<Flash> = notice.into_iter().collect();
    if query.search().is_some() && books.is_empty() {
        flashes.push(Flash::warning("No matching books"));
    }

    let page = HomePage {
        flashes,
        books: books.into_iter().map(BookView::from).collect(),
        filter: query.search().unwrap_or_default().to_string(),
        sort: query.sort().map(|s| s.as_str()).unwrap_or_default().to_string(),
    };

    Ok((jar, render(&page)?))
}

async fn author_options(state: &AppState) -> Result<Vec<AuthorOption>, ApiError> {
    let authors = state.get_authors_use_case.execute().await?;
    Ok(authors.into_iter().map(AuthorOption::from).collect())
}

/// GET /add_book - Show the add-book form
async fn add_book_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&AddBookPage {
        flashes: vec![],
        authors: author_options(&state).await?,
    })
}

/// POST /add_book - Add a new book under an existing author
///
/// # Responses
///
/// * 200 OK - Book added, form re-rendered with a success message
/// * 422 Unprocessable Entity - Invalid fields or unknown author
async fn add_book(
    State(state): State<AppState>,
    Form(form): Form<AddBookForm>,
) -> Result<Response, ApiError> {
    let result = match form.into_book_data() {
        Ok(data) => state.add_book_use_case.execute(data).await,
        Err(err) => Err(err),
    };

    let (status, flashes) = match result {
        Ok(_) => (StatusCode::OK, vec![Flash::success("Book Added Successfully")]),
        Err(err) => form_rejection(err)?,
    };

    let page = AddBookPage {
        flashes,
        authors: author_options(&state).await?,
    };

    Ok((status, render(&page)?).into_response())
}

/// GET|POST /book/:id - Delete a book, then return to the homepage
///
/// # Responses
///
/// * 303 See Other - Book deleted, redirect to `/` with a pending notice
/// * 404 Not Found - Book does not exist, or the id is not an integer
async fn delete_book(
    State(state): State<AppState>,
    jar: CookieJar,
    uri: Uri,
    id: Result<Path<i64>, PathRejection>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Book id is not an integer");
        UseCaseError::NotFound {
            resource: "Book".to_string(),
            id: uri.path().rsplit('/').next().unwrap_or_default().to_string(),
        }
    })?;
    state.delete_book_use_case.execute(BookId::from(id)).await?;

    Ok((flash::push_notice(jar, Notice::BookDeleted), Redirect::to("/")))
}
