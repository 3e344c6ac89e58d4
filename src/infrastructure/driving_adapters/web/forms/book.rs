//! Book Forms

use serde::Deserialize;
use validator::Validate;

use super::normalize;
use crate::domain::models::author::AuthorId;
use crate::domain::models::book::{BookQuery, BookSort, CreateBookData};
use crate::shared::errors::UseCaseError;

/// Strip separators and upper-case the check digit
fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validates an ISBN-10 or ISBN-13 including its check digit, ignoring
/// hyphens and spaces
fn validate_isbn(isbn: &str) -> Result<(), validator::ValidationError> {
    match normalize_isbn(isbn).parse::<isbn2::Isbn>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut error = validator::ValidationError::new("isbn");
            error.message = Some("isbn must be a valid ISBN-10 or ISBN-13".into());
            Err(error)
        }
    }
}

fn parse_year(year: &str) -> Option<i32> {
    year.trim().parse::<i32>().ok().filter(|y| (1..=9999).contains(y))
}

/// Validates a publication year between 1 and 9999
fn validate_year(year: &str) -> Result<(), validator::ValidationError> {
    if parse_year(year).is_some() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("year");
        error.message = Some("publication_year must be a year between 1 and 9999".into());
        Err(error)
    }
}

/// Validates the id of the selected author
fn validate_author_id(author: &str) -> Result<(), validator::ValidationError> {
    if author.trim().parse::<i64>().is_ok() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("author");
        error.message = Some("an author must be selected".into());
        Err(error)
    }
}

/// Form submitted from the add-book page
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddBookForm {
    #[serde(default)]
    #[validate(custom(function = "validate_isbn"))]
    pub isbn: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "validate_year"))]
    pub publication_year: String,

    /// Id of the selected author
    #[serde(default)]
    #[validate(custom(function = "validate_author_id"))]
    pub author: String,
}

impl AddBookForm {
    /// Validate the form and convert it into domain creation data
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` listing every invalid field.
    pub fn into_book_data(self) -> Result<CreateBookData, UseCaseError> {
        let form = Self {
            isbn: normalize_isbn(&self.isbn),
            title: normalize(&self.title),
            publication_year: normalize(&self.publication_year),
            author: normalize(&self.author),
        };
        form.validate()?;

        let invalid = |field: &str| UseCaseError::Validation(vec![format!("{field}: invalid")]);
        let publication_year = parse_year(&form.publication_year).ok_or_else(|| invalid("publication_year"))?;
        let author_id = form.author.parse::<i64>().map_err(|_| invalid("author"))?;

        Ok(CreateBookData {
            isbn: form.isbn,
            title: form.title,
            publication_year,
            author_id: AuthorId::from(author_id),
        })
    }
}

/// Filter and sort options from the homepage form or query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookListForm {
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl From<BookListForm> for BookQuery {
    fn from(form: BookListForm) -> Self {
        BookQuery::new(form.filter, form.sort.as_deref().and_then(BookSort::parse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(isbn: &str, title: &str, year: &str, author: &str) -> AddBookForm {
        AddBookForm {
            isbn: isbn.to_string(),
            title: title.to_string(),
            publication_year: year.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn test_isbn_validation() {
        assert!(validate_isbn("9780261103573").is_ok());
        assert!(validate_isbn("978-0-261-10357-3").is_ok());
        assert!(validate_isbn("0-8044-2957-x").is_ok());
        assert!(validate_isbn("12345").is_err());
        assert!(validate_isbn("97802611035X3").is_err());
    }

    #[test]
    fn test_isbn_with_wrong_check_digit_is_rejected() {
        assert!(validate_isbn("1234567890").is_err());
        assert!(validate_isbn("9781111111111").is_err());
        assert!(validate_isbn("978-0-261-10357-4").is_err());
    }

    #[test]
    fn test_valid_form_normalizes_isbn() {
        let data = form("978-0-261-10357-3", " The Hobbit ", "1937", "4")
            .into_book_data()
            .unwrap();

        assert_eq!(data.isbn, "9780261103573");
        assert_eq!(data.title, "The Hobbit");
        assert_eq!(data.publication_year, 1937);
        assert_eq!(data.author_id, AuthorId::from(4));
    }

    #[test]
    fn test_invalid_form_reports_each_field() {
        let err = form("nope", "", "year one", "").into_book_data().unwrap_err();

        let UseCaseError::Validation(messages) = err else {
            panic!("expected validation error");
        };
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(form("9780261103573", "The Hobbit", "0", "1").into_book_data().is_err());
        assert!(form("9780261103573", "The Hobbit", "10000", "1").into_book_data().is_err());
    }

    #[test]
    fn test_list_form_into_query() {
        let query = BookQuery::from(BookListForm {
            filter: Some("hobbit".to_string()),
            sort: Some("author".to_string()),
        });
        assert_eq!(query.search(), Some("hobbit"));
        assert_eq!(query.sort(), Some(BookSort::Author));

        let query = BookQuery::from(BookListForm {
            filter: Some(String::new()),
            sort: Some("rating".to_string()),
        });
        assert_eq!(query, BookQuery::default());
    }
}
