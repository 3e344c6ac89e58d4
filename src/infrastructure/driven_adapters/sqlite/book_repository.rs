//! SQLite Book Repository Implementation
//!
//! Implements the BookRepository trait using SQLx for SQLite.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::gateways::BookRepository;
use crate::domain::models::author::AuthorId;
use crate::domain::models::book::{
    Book, BookDeletion, BookId, BookQuery, BookSort, BookWithAuthor, NewBook,
};
use crate::shared::errors::RepositoryError;

/// Database row representation for the books table
#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: i64,
    isbn: String,
    title: String,
    publication_year: i32,
    cover_image_url: Option<String>,
    author_id: i64,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::restore(
            BookId::from(row.id),
            row.isbn,
            row.title,
            row.publication_year,
            row.cover_image_url,
            AuthorId::from(row.author_id),
        )
    }
}

/// Book row joined with its author's name
#[derive(Debug, sqlx::FromRow)]
struct BookListingRow {
    #[sqlx(flatten)]
    book: BookRow,
    author_name: String,
}

impl From<BookListingRow> for BookWithAuthor {
    fn from(row: BookListingRow) -> Self {
        BookWithAuthor {
            book: Book::from(row.book),
            author_name: row.author_name,
        }
    }
}

/// Escape LIKE wildcards so the term is matched literally
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// SQLite implementation of BookRepository
pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    /// Create a new SqliteBookRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn search(&self, query: &BookQuery) -> Result<Vec<BookWithAuthor>, RepositoryError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
            SELECT b.id, b.isbn, b.title, b.publication_year, b.cover_image_url, b.author_id,
                   a.name AS author_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            "#,
        );

        // SQLite's LIKE is case-insensitive for ASCII
        if let Some(term) = query.search() {
            let pattern = like_pattern(term);
            builder
                .push(" WHERE b.title LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR a.name LIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\'");
        }

        builder.push(match query.sort() {
            Some(BookSort::Title) => " ORDER BY b.title COLLATE NOCASE ASC, b.id ASC",
            Some(BookSort::Author) => " ORDER BY a.name COLLATE NOCASE ASC, b.id ASC",
            None => " ORDER BY b.id ASC",
        });

        let rows = builder
            .build_query_as::<BookListingRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BookWithAuthor::from).collect())
    }

    async fn create(&self, book: &NewBook) -> Result<Book, RepositoryError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (isbn, title, publication_year, cover_image_url, author_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, isbn, title, publication_year, cover_image_url, author_id
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(book.publication_year)
        .bind(&book.cover_image_url)
        .bind(book.author_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(Book::from(row))
    }

    async fn delete(&self, id: BookId) -> Result<Option<BookDeletion>, RepositoryError> {
        // Dropping the transaction without commit rolls it back
        let mut tx = self.pool.begin().await?;

        let Some(row) = sqlx::query_as::<_, BookRow>(
            r#"
            DELETE FROM books
            WHERE id = ?
            RETURNING id, isbn, title, publication_year, cover_image_url, author_id
            "#,
        )
        .bind(id.value())
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let orphan = sqlx::query(
            r#"
            DELETE FROM authors
            WHERE id = ?1
              AND NOT EXISTS (SELECT 1 FROM books WHERE author_id = ?1)
            "#,
        )
        .bind(row.author_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(BookDeletion {
            book: Book::from(row),
            author_removed: orphan.rows_affected() > 0,
        }))
    }
}
