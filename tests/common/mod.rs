//! Common test utilities for e2e tests
//!
//! Provides a test application backed by a fresh in-memory SQLite database.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use sqlx::SqlitePool;
use tower::util::ServiceExt;

use book_catalog::domain::models::book::CoverImageSource;
use book_catalog::infrastructure::driven_adapters::config::DatabaseConfig;
use book_catalog::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use book_catalog::infrastructure::driven_adapters::sqlite::{
    SqliteAuthorRepository, SqliteBookRepository,
};
use book_catalog::infrastructure::driving_adapters::web::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Status, headers and decoded body of a test response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl TestResponse {
    async fn from_response(response: Response<Body>) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        Self {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8"),
        }
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// Create a new test application with a fresh database
    pub async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        })
        .await
        .expect("Failed to create test database");

        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let book_repository = Arc::new(SqliteBookRepository::new(pool.clone()));
        let author_repository = Arc::new(SqliteAuthorRepository::new(pool.clone()));
        let app_state = AppState::new(book_repository, author_repository, CoverImageSource::default());

        Self {
            router: web::router(app_state),
            pool,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond");
        TestResponse::from_response(response).await
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
    }

    /// Send a GET request carrying a Cookie header
    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
    }

    /// Send a POST request with a URL-encoded form body
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    serde_urlencoded::to_string(fields).expect("Failed to encode form"),
                ))
                .expect("Failed to build request"),
        )
        .await
    }

    /// Add an author through the web form and return its id
    pub async fn add_author(&self, name: &str, birthdate: &str, date_of_death: &str) -> i64 {
        let response = self
            .post_form(
                "/add_author",
                &[("name", name), ("birthdate", birthdate), ("date_of_death", date_of_death)],
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);

        sqlx::query_scalar("SELECT id FROM authors WHERE name = ? ORDER BY id DESC LIMIT 1")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("Author was not stored")
    }

    /// Add a book through the web form and return its id
    pub async fn add_book(&self, isbn: &str, title: &str, year: &str, author_id: i64) -> i64 {
        let author = author_id.to_string();
        let response = self
            .post_form(
                "/add_book",
                &[
                    ("isbn", isbn),
                    ("title", title),
                    ("publication_year", year),
                    ("author", &author),
                ],
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);

        sqlx::query_scalar("SELECT id FROM books WHERE title = ? ORDER BY id DESC LIMIT 1")
            .bind(title)
            .fetch_one(&self.pool)
            .await
            .expect("Book was not stored")
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
