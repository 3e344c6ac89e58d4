//! SQLite Author Repository Implementation
//!
//! Implements the AuthorRepository trait using SQLx for SQLite.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::domain::gateways::AuthorRepository;
use crate::domain::models::author::{Author, AuthorId, CreateAuthorData};
use crate::shared::errors::RepositoryError;

/// Database row representation for the authors table
#[derive(Debug, sqlx::FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    birth_date: NaiveDate,
    date_of_death: Option<NaiveDate>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author::restore(
            AuthorId::from(row.id),
            row.name,
            row.birth_date,
            row.date_of_death,
        )
    }
}

/// SQLite implementation of AuthorRepository
pub struct SqliteAuthorRepository {
    pool: SqlitePool,
}

impl SqliteAuthorRepository {
    /// Create a new SqliteAuthorRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepositoryError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, birth_date, date_of_death
            FROM authors
            WHERE id = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Author::from))
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepositoryError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, birth_date, date_of_death
            FROM authors
            ORDER BY name COLLATE NOCASE ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn create(&self, data: &CreateAuthorData) -> Result<Author, RepositoryError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (name, birth_date, date_of_death)
            VALUES (?, ?, ?)
            RETURNING id, name, birth_date, date_of_death
            "#,
        )
        .bind(&data.name)
        .bind(data.birth_date)
        .bind(data.date_of_death)
        .fetch_one(&self.pool)
        .await?;

        Ok(Author::from(row))
    }
}
