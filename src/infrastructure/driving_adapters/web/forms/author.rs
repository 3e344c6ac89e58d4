//! Author Forms

use serde::Deserialize;
use validator::Validate;

use super::{normalize, parse_date, validate_date, validate_optional_date};
use crate::domain::models::author::CreateAuthorData;
use crate::shared::errors::UseCaseError;

/// Form submitted from the add-author page
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddAuthorForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_date"))]
    pub birthdate: String,

    /// Left empty for living authors
    #[serde(default)]
    #[validate(custom(function = "validate_optional_date"))]
    pub date_of_death: String,
}

impl AddAuthorForm {
    /// Validate the form and convert it into domain creation data
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` listing every invalid field.
    pub fn into_author_data(self) -> Result<CreateAuthorData, UseCaseError> {
        let form = Self {
            name: normalize(&self.name),
            birthdate: normalize(&self.birthdate),
            date_of_death: normalize(&self.date_of_death),
        };
        form.validate()?;

        let birth_date = parse_field("birthdate", &form.birthdate)?;
        let date_of_death = if form.date_of_death.is_empty() {
            None
        } else {
            Some(parse_field("date_of_death", &form.date_of_death)?)
        };

        Ok(CreateAuthorData {
            name: form.name,
            birth_date,
            date_of_death,
        })
    }
}

fn parse_field(field: &str, value: &str) -> Result<chrono::NaiveDate, UseCaseError> {
    parse_date(value)
        .ok_or_else(|| UseCaseError::Validation(vec![format!("{field}: invalid date")]))
}
