use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, CopiesChange};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order behind one lock. Reads share the lock,
// every write finds and mutates under a single exclusive acquisition.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.write().await.push(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.read().await
            .iter()
            .find(|b| b.isbn == id)
            .cloned()
            .ok_or_else(|| LibraryError::book_not_found(id))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.isbn == id) {
            Some(ndx) => {
                books.remove(ndx);
                Ok(1)
            }
            None => Err(LibraryError::book_not_found(id)),
        }
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await
            .iter()
            .filter(|b| matches(b, predicate))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        let predicate = HashMap::from([
            ("author".to_string(), author.to_string()),
        ]);
        self.query(&predicate).await
    }

    async fn create_unique(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.isbn == entity.isbn) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", entity.isbn).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn update_copies(&self, isbn: &str, change: CopiesChange) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        let book = books.iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| LibraryError::book_not_found(isbn))?;
        change.apply(book)?;
        Ok(book.clone())
    }
}

// exact, case-sensitive equality on every predicate field; unknown fields never match
fn matches(book: &BookEntity, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, v)| match k.as_str() {
        "isbn" => book.isbn == *v,
        "title" => book.title() == v.as_str(),
        "author" => book.author() == v.as_str(),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use crate::books::domain::model::{BookEntity, CopiesChange};
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::books::seed::sample_books;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("978-0-12-1-0", "test book", "author", 2001, 1);
        let size = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_get_first_duplicate() {
        let books_repo = MemoryBookRepository::new();
        let first = BookEntity::new("978-0-12-1-0", "first", "author", 2001, 1);
        let second = BookEntity::new("978-0-12-1-0", "second", "author", 2002, 2);
        let _ = books_repo.create(&first).await.expect("should create book");
        let _ = books_repo.create(&second).await.expect("should create duplicate");

        let loaded = books_repo.get("978-0-12-1-0").await.expect("should return book");
        assert_eq!("first", loaded.title.as_str());

        let _ = books_repo.delete("978-0-12-1-0").await.expect("should delete first");
        let loaded = books_repo.get("978-0-12-1-0").await.expect("should return second");
        assert_eq!("second", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::with_books(sample_books());
        let deleted = books_repo.delete("978-3-16-148410-0").await.expect("should delete book");
        assert_eq!(1, deleted);

        let loaded = books_repo.get("978-3-16-148410-0").await;
        assert_eq!(Err(LibraryError::book_not_found("978-3-16-148410-0")), loaded);
        let deleted = books_repo.delete("978-3-16-148410-0").await;
        assert!(deleted.is_err());
    }

    #[tokio::test]
    async fn test_should_query_books() {
        let books_repo = MemoryBookRepository::with_books(sample_books());
        let res = books_repo.query(&HashMap::new()).await.expect("should return books");
        assert_eq!(10, res.len());

        let res = books_repo.query(&HashMap::from([
            ("title".to_string(), "1984".to_string()),
            ("author".to_string(), "George Orwell".to_string()),
        ])).await.expect("should return books");
        assert_eq!(1, res.len());

        let res = books_repo.query(&HashMap::from([
            ("publisher".to_string(), "unknown".to_string()),
        ])).await.expect("should return books");
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn test_should_find_by_author_in_store_order() {
        let books_repo = MemoryBookRepository::with_books(sample_books());
        let _ = books_repo.create(&BookEntity::new("978-0-12-1-0", "Tender Is the Night", "F. Scott Fitzgerald", 1934, 2))
            .await.expect("should create book");
        let res = books_repo.find_by_author("F. Scott Fitzgerald").await.expect("should return books");
        let titles: Vec<&str> = res.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["The Great Gatsby", "Tender Is the Night"], titles);

        let res = books_repo.find_by_author("f. scott fitzgerald").await.expect("should return books");
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_unique_create() {
        let books_repo = MemoryBookRepository::with_books(sample_books());
        let book = BookEntity::new("978-3-16-148410-0", "copy", "author", 2001, 1);
        let res = books_repo.create_unique(&book).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(10, books_repo.query(&HashMap::new()).await.expect("should return books").len());
    }

    #[tokio::test]
    async fn test_should_update_copies() {
        let books_repo = MemoryBookRepository::with_books(sample_books());
        let book = books_repo.update_copies("978-0-553-21311-7", CopiesChange::Increment).await.expect("should increment");
        assert_eq!(4, book.available_copies);
        let book = books_repo.update_copies("978-0-553-21311-7", CopiesChange::Decrement).await.expect("should decrement");
        assert_eq!(3, book.available_copies);

        let res = books_repo.update_copies("978-1-5011-9181-4", CopiesChange::Decrement).await;
        assert_eq!(Err(LibraryError::invalid_available_copies("978-1-5011-9181-4")), res);
        let loaded = books_repo.get("978-1-5011-9181-4").await.expect("should return book");
        assert_eq!(0, loaded.available_copies);

        let res = books_repo.update_copies("978-0-12-1-0", CopiesChange::Increment).await;
        assert_eq!(Err(LibraryError::book_not_found("978-0-12-1-0")), res);
    }

    #[tokio::test]
    async fn test_should_not_lose_concurrent_updates() {
        let books_repo = Arc::new(MemoryBookRepository::with_books(vec![
            BookEntity::new("978-0-12-1-0", "title", "author", 2001, 50)]));
        let mut handles = vec![];
        for i in 0..100 {
            let repo = books_repo.clone();
            let change = if i % 2 == 0 { CopiesChange::Increment } else { CopiesChange::Decrement };
            handles.push(tokio::spawn(async move {
                repo.update_copies("978-0-12-1-0", change).await
            }));
        }
        for handle in handles {
            let _ = handle.await.expect("task should finish").expect("should update");
        }
        let loaded = books_repo.get("978-0-12-1-0").await.expect("should return book");
        assert_eq!(50, loaded.available_copies);
        assert_eq!(100, loaded.version);
    }
}
