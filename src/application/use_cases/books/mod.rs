//! Book Use Cases
//!
//! Adding, listing and removing books in the catalog.

mod add_book;
mod delete_book;
mod get_books;

pub use add_book::AddBookUseCase;
pub use delete_book::DeleteBookUseCase;
pub use get_books::GetBooksUseCase;
