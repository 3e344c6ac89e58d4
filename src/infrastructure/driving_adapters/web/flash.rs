//! Flash Messages
//!
//! One-off status messages shown at the top of a page. Messages produced
//! while rendering a page are passed straight to the template; messages that
//! must survive a redirect travel in a short-lived cookie as a [`Notice`]
//! code and are consumed by the next page that displays flashes.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Cookie carrying a pending notice across a redirect
pub const FLASH_COOKIE: &str = "flash";

/// Severity of a flash message, matching the stylesheet classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Warning,
    Danger,
}

impl FlashLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A message rendered at the top of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }
}

/// Messages that can be carried across a redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    BookDeleted,
}

impl Notice {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::BookDeleted => "book_deleted",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "book_deleted" => Some(Self::BookDeleted),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_flash(self) -> Flash {
        match self {
            Self::BookDeleted => Flash::success("Book Deleted Successfully"),
        }
    }
}

/// Queue a notice for the next rendered page
#[must_use]
pub fn push_notice(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, notice.code()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Consume the pending notice, if any, clearing its cookie
#[must_use]
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let Some(code) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, Notice::from_code(&code).map(Notice::to_flash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_survives_cookie_round_trip() {
        let jar = push_notice(CookieJar::new(), Notice::BookDeleted);
        assert_eq!(jar.get(FLASH_COOKIE).map(|c| c.value().to_string()), Some("book_deleted".into()));

        let (jar, flash) = take_notice(jar);

        assert_eq!(flash, Some(Flash::success("Book Deleted Successfully")));
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn test_unknown_code_is_dropped() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "something_else"));

        let (jar, flash) = take_notice(jar);

        assert_eq!(flash, None);
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn test_no_cookie_means_no_flash() {
        let (_, flash) = take_notice(CookieJar::new());
        assert_eq!(flash, None);
    }
}
