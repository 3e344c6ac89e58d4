//! HTML Views
//!
//! Askama templates for each page and the view models they display.

use askama::Template;
use axum::response::Html;

use super::flash::Flash;
use crate::domain::models::author::Author;
use crate::domain::models::book::BookWithAuthor;
use crate::shared::errors::ApiError;

/// Render a template into an HTML response body
///
/// # Errors
///
/// Returns `ApiError::Template` if rendering fails.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}

/// Book row on the homepage
#[derive(Debug, Clone)]
pub struct BookView {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub publication_year: i32,
    pub cover_image_url: String,
    pub author_name: String,
}

impl From<BookWithAuthor> for BookView {
    fn from(listing: BookWithAuthor) -> Self {
        let book = listing.book;
        Self {
            id: book.id().value(),
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            publication_year: book.publication_year(),
            cover_image_url: book.cover_image_url().unwrap_or_default().to_string(),
            author_name: listing.author_name,
        }
    }
}

/// Entry in the add-book author selector
#[derive(Debug, Clone)]
pub struct AuthorOption {
    pub id: i64,
    pub label: String,
}

impl From<Author> for AuthorOption {
    fn from(author: Author) -> Self {
        let label = match author.date_of_death() {
            Some(died) => format!(
                "{} ({}–{})",
                author.name(),
                author.birth_date().format("%Y"),
                died.format("%Y")
            ),
            None => format!("{} (b. {})", author.name(), author.birth_date().format("%Y")),
        };
        Self {
            id: author.id().value(),
            label,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub flashes: Vec<Flash>,
    pub books: Vec<BookView>,
    pub filter: String,
    pub sort: String,
}

#[derive(Template)]
#[template(path = "add_author.html")]
pub struct AddAuthorPage {
    pub flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "add_book.html")]
pub struct AddBookPage {
    pub flashes: Vec<Flash>,
    pub authors: Vec<AuthorOption>,
}
