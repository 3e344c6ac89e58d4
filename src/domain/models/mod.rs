//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod author;
pub mod book;

pub use author::{Author, AuthorId, CreateAuthorData};
pub use book::{
    Book, BookDeletion, BookId, BookQuery, BookSort, BookWithAuthor, CoverImageSource, CoverSize,
    CreateBookData, NewBook,
};
