//! Form DTOs
//!
//! URL-encoded form bodies submitted from the HTML pages, with validation
//! and conversion into domain data.

pub mod author;
pub mod book;

use lazy_static::lazy_static;
use regex::Regex;

pub use author::AddAuthorForm;
pub use book::{AddBookForm, BookListForm};

/// Date format used by HTML date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    /// Four-digit year, no sign
    static ref DATE_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex");
}

fn normalize(value: &str) -> String {
    value.trim().to_string()
}

/// Parse a `YYYY-MM-DD` date. chrono's `%Y` also takes signed and
/// five-digit years, so the shape is checked first.
fn parse_date(value: &str) -> Option<chrono::NaiveDate> {
    let value = value.trim();
    if !DATE_REGEX.is_match(value) {
        return None;
    }
    chrono::NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Validates a `YYYY-MM-DD` date
fn validate_date(value: &str) -> Result<(), validator::ValidationError> {
    if parse_date(value).is_some() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("date");
        error.message = Some("date must use the YYYY-MM-DD format".into());
        Err(error)
    }
}

/// Validates a `YYYY-MM-DD` date, accepting an empty value
fn validate_optional_date(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        validate_date(value)
    }
}
