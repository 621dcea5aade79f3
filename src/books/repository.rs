pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, CopiesChange};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>>;

    // appends the entity unless a record with the same isbn exists, checked under the same lock
    async fn create_unique(&self, entity: &BookEntity) -> LibraryResult<usize>;

    // applies the change to the first record with the isbn and returns the updated record
    async fn update_copies(&self, isbn: &str, change: CopiesChange) -> LibraryResult<BookEntity>;
}
