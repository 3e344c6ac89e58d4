//! Error Types
//!
//! Layered error types with HTTP status code mapping. Errors that reach the
//! web layer are rendered as an HTML error page.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Date of death {date_of_death} precedes birth date {birth_date}")]
    InvalidLifespan {
        birth_date: NaiveDate,
        date_of_death: NaiveDate,
    },
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Domain(DomainError::InvalidLifespan { .. }) => "INVALID_DATES",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }

    /// Messages suitable for showing to the person who submitted a form
    #[must_use]
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            Self::Domain(DomainError::InvalidLifespan { .. }) => vec!["Invalid Dates".to_string()],
            Self::NotFound { resource, .. } => vec![format!("{resource} not found")],
            Self::Repository(_) => vec![self.to_string()],
        }
    }
}

/// HTML page rendered for errors that escape a handler
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
}

/// Errors surfaced by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::UseCase(uc_error) => match uc_error {
                // Storage details stay in the logs
                UseCaseError::Repository(_) => (
                    uc_error.status_code(),
                    uc_error.error_code(),
                    "An unexpected error occurred".to_string(),
                ),
                _ => (uc_error.status_code(), uc_error.error_code(), uc_error.to_string()),
            },
            ApiError::Template(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An unexpected error occurred".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        } else {
            tracing::debug!(error = %self, code, "Request rejected");
        }

        let page = ErrorPage {
            status: status.as_u16(),
            code,
            message,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render error page");
                (status, format!("{status}: {code}")).into_response()
            }
        }
    }
}

impl From<validator::ValidationErrors> for UseCaseError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        // field_errors() is a HashMap; keep output stable
        messages.sort();
        UseCaseError::Validation(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lifespan_maps_to_unprocessable_entity() {
        let err = UseCaseError::Domain(DomainError::InvalidLifespan {
            birth_date: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
            date_of_death: NaiveDate::from_ymd_opt(1940, 1, 1).unwrap(),
        });

        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), "INVALID_DATES");
        assert_eq!(err.user_messages(), vec!["Invalid Dates".to_string()]);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = UseCaseError::NotFound {
            resource: "Book".to_string(),
            id: "7".to_string(),
        };

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Book with id '7' not found");
    }

    #[test]
    fn repository_errors_render_as_internal_error_page() {
        let err = ApiError::from(UseCaseError::Repository(RepositoryError::Mapping(
            "bad row".to_string(),
        )));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
