//! Book Domain Model
//!
//! Represents a book in the catalog, always owned by a single author.

use super::author::AuthorId;

/// Newtype wrapper for Book ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(i64);

impl BookId {
    /// Get the underlying database id
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Cover image sizes offered by the cover service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CoverSize {
    /// Parse a size letter (S, M or L), case-insensitively
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "S" => Some(Self::Small),
            "M" => Some(Self::Medium),
            "L" => Some(Self::Large),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

/// Where cover images are served from, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImageSource {
    base_url: String,
    size: CoverSize,
}

impl CoverImageSource {
    pub const OPEN_LIBRARY: &'static str = "https://covers.openlibrary.org/b/isbn";

    #[must_use]
    pub fn new(base_url: impl Into<String>, size: CoverSize) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            size,
        }
    }

    /// Cover image URL for the given ISBN
    #[must_use]
    pub fn url_for(&self, isbn: &str) -> String {
        format!("{}/{}-{}.jpg", self.base_url, isbn, self.size.as_str())
    }
}

impl Default for CoverImageSource {
    fn default() -> Self {
        Self::new(Self::OPEN_LIBRARY, CoverSize::Medium)
    }
}

/// Data required to create a new Book
#[derive(Debug, Clone)]
pub struct CreateBookData {
    pub isbn: String,
    pub title: String,
    pub publication_year: i32,
    pub author_id: AuthorId,
}

/// A book ready to be persisted, with its derived cover image URL
#[derive(Debug, Clone)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub publication_year: i32,
    pub cover_image_url: String,
    pub author_id: AuthorId,
}

impl NewBook {
    #[must_use]
    pub fn new(data: CreateBookData, covers: &CoverImageSource) -> Self {
        let cover_image_url = covers.url_for(&data.isbn);
        Self {
            isbn: data.isbn,
            title: data.title,
            publication_year: data.publication_year,
            cover_image_url,
            author_id: data.author_id,
        }
    }
}

/// Book domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    isbn: String,
    title: String,
    publication_year: i32,
    cover_image_url: Option<String>,
    author_id: AuthorId,
}

impl Book {
    /// Restore a Book from persisted data
    #[must_use]
    pub fn restore(
        id: BookId,
        isbn: String,
        title: String,
        publication_year: i32,
        cover_image_url: Option<String>,
        author_id: AuthorId,
    ) -> Self {
        Self {
            id,
            isbn,
            title,
            publication_year,
            cover_image_url,
            author_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    #[must_use]
    pub fn cover_image_url(&self) -> Option<&str> {
        self.cover_image_url.as_deref()
    }

    #[must_use]
    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }
}

/// A book joined with the name of its author, as shown in listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookWithAuthor {
    pub book: Book,
    pub author_name: String,
}

/// Outcome of removing a book from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDeletion {
    pub book: Book,
    /// Whether the author was removed because this was their last book
    pub author_removed: bool,
}

/// Orderings offered by the book listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSort {
    Title,
    Author,
}

impl BookSort {
    /// Parse a sort option, ignoring values that are not recognised
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

/// Filter and ordering options for listing books
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    search: Option<String>,
    sort: Option<BookSort>,
}

impl BookQuery {
    /// Build a query; blank search terms are treated as absent
    #[must_use]
    pub fn new(search: Option<String>, sort: Option<BookSort>) -> Self {
        let search = search
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());
        Self { search, sort }
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub fn sort(&self) -> Option<BookSort> {
        self.sort
    }
}
