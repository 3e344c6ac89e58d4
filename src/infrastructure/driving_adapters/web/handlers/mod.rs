//! Page Handlers
//!
//! HTTP handlers for the catalog pages.

pub mod authors;
pub mod books;

use axum::http::StatusCode;

use super::flash::Flash;
use crate::shared::errors::{ApiError, UseCaseError};

/// Turn a rejected form submission into danger flashes for the re-rendered
/// form. Anything that isn't the submitter's fault is propagated.
fn form_rejection(err: UseCaseError) -> Result<(StatusCode, Vec<Flash>), ApiError> {
    match err {
        UseCaseError::Validation(_) | UseCaseError::Domain(_) | UseCaseError::NotFound { .. } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            err.user_messages().into_iter().map(Flash::danger).collect(),
        )),
        UseCaseError::Repository(_) => Err(err.into()),
    }
}
