//! Author Use Cases

mod add_author;
mod get_authors;

pub use add_author::AddAuthorUseCase;
pub use get_authors::GetAuthorsUseCase;
