//! Author Domain Model
//!
//! Represents a person who wrote one or more books in the catalog.

use chrono::NaiveDate;

use crate::shared::errors::DomainError;

/// Newtype wrapper for Author ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(i64);

impl AuthorId {
    /// Get the underlying database id
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AuthorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Data required to create a new Author
#[derive(Debug, Clone)]
pub struct CreateAuthorData {
    pub name: String,
    pub birth_date: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

impl CreateAuthorData {
    /// Check that the author's lifespan is well ordered
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLifespan` if the date of death precedes
    /// the birth date.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.date_of_death {
            Some(date_of_death) if date_of_death < self.birth_date => {
                Err(DomainError::InvalidLifespan {
                    birth_date: self.birth_date,
                    date_of_death,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Author domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: String,
    birth_date: NaiveDate,
    date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Restore an Author from persisted data
    #[must_use]
    pub fn restore(
        id: AuthorId,
        name: String,
        birth_date: NaiveDate,
        date_of_death: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            name,
            birth_date,
            date_of_death,
        }
    }

    #[must_use]
    pub fn id(&self) -> AuthorId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[must_use]
    pub fn date_of_death(&self) -> Option<NaiveDate> {
        self.date_of_death
    }

    #[must_use]
    pub fn is_living(&self) -> bool {
        self.date_of_death.is_none()
    }
}
