pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookResource};
use crate::core::library::LibraryResult;

// CatalogService owns the book records. An absent isbn or author is passed as None and is
// rejected here, every returned book is a snapshot detached from the store.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookResource) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: Option<&str>) -> LibraryResult<()>;
    async fn find_book_by_isbn(&self, isbn: Option<&str>) -> LibraryResult<BookDto>;
    async fn find_books_by_author(&self, author: Option<&str>) -> LibraryResult<Vec<BookDto>>;
    async fn increment_available_copies(&self, isbn: Option<&str>) -> LibraryResult<BookDto>;
    async fn decrement_available_copies(&self, isbn: Option<&str>) -> LibraryResult<BookDto>;
}
