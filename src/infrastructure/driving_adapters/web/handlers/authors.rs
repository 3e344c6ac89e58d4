//! Author Handlers
//!
//! Pages for adding authors to the catalog.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};

use super::form_rejection;
use crate::infrastructure::driving_adapters::web::flash::Flash;
use crate::infrastructure::driving_adapters::web::forms::AddAuthorForm;
use crate::infrastructure::driving_adapters::web::views::{render, AddAuthorPage};
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::ApiError;

/// Create the router for author pages
#[must_use]
pub fn router() -> Router<AppState> {
    Router::new().route("/add_author", get(add_author_page).post(add_author))
}

/// GET /add_author - Show the add-author form
async fn add_author_page() -> Result<Html<String>, ApiError> {
    render(&AddAuthorPage { flashes: vec![] })
}

/// POST /add_author - Add a new author
///
/// # Responses
///
/// * 200 OK - Author added, form re-rendered with a success message
/// * 422 Unprocessable Entity - Invalid fields or death date before birth date
async fn add_author(
    State(state): State<AppState>,
    Form(form): Form<AddAuthorForm>,
) -> Result<Response, ApiError> {
    let result = match form.into_author_data() {
        Ok(data) => state.add_author_use_case.execute(data).await,
        Err(err) => Err(err),
    };

    let (status, flashes) = match result {
        Ok(_) => (StatusCode::OK, vec![Flash::success("Author Added Successfully")]),
        Err(err) => form_rejection(err)?,
    };

    Ok((status, render(&AddAuthorPage { flashes })?).into_response())
}
