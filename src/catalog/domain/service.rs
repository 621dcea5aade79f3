use async_trait::async_trait;
use tracing::warn;
use crate::books::domain::model::{BookEntity, CopiesChange};
use crate::books::dto::{BookDto, BookResource};
use crate::books::generator::IsbnGenerator;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::utils::isbn::is_valid_isbn;

pub struct CatalogServiceImpl {
    unique_isbn: bool,
    max_isbn_attempts: usize,
    book_repository: Box<dyn BookRepository>,
    isbn_generator: Box<dyn IsbnGenerator>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               isbn_generator: Box<dyn IsbnGenerator>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            unique_isbn: config.unique_isbn,
            max_isbn_attempts: config.max_isbn_attempts.max(1),
            book_repository,
            isbn_generator,
            events_publisher,
        }
    }

    async fn insert(&self, book: &BookEntity) -> LibraryResult<usize> {
        if self.unique_isbn {
            self.book_repository.create_unique(book).await
        } else {
            self.book_repository.create(book).await
        }
    }

    async fn update_copies(&self, isbn: Option<&str>, change: CopiesChange) -> LibraryResult<BookDto> {
        let isbn = validate_isbn(isbn)?;
        let book = self.book_repository.update_copies(isbn, change).await?;
        let dto = BookDto::from(&book);
        self.publish(DomainEvent::copies_changed(change, &dto, book.version())).await;
        Ok(dto)
    }

    // the mutation is already committed, a failed publish is reported but does not fail the call
    async fn publish(&self, event: DomainEvent) {
        if let Err(err) = self.events_publisher.publish(&event).await {
            warn!(isbn = %event.isbn, name = %event.name, "failed to publish catalog event: {}", err);
        }
    }
}

fn validate_isbn(isbn: Option<&str>) -> LibraryResult<&str> {
    match isbn {
        Some(val) if is_valid_isbn(Some(val)) => Ok(val),
        other => Err(LibraryError::invalid_isbn(other)),
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookResource) -> LibraryResult<BookDto> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let isbn = self.isbn_generator.generate();
            if !is_valid_isbn(Some(isbn.as_str())) {
                return Err(LibraryError::runtime(
                    format!("generated isbn {} is not valid", isbn).as_str(), None));
            }
            let entity = BookEntity::new(isbn.as_str(), book.title.as_str(), book.author.as_str(),
                                         book.publication_year, book.available_copies);
            match self.insert(&entity).await {
                Ok(_) => {
                    let dto = BookDto::from(&entity);
                    self.publish(DomainEvent::book_added(&dto, entity.version())).await;
                    return Ok(dto);
                }
                Err(LibraryError::DuplicateKey { .. }) if attempts < self.max_isbn_attempts => {
                    continue;
                }
                Err(err) => {
                    return Err(err);
                }
            }
        }
    }

    async fn remove_book(&self, isbn: Option<&str>) -> LibraryResult<()> {
        let isbn = validate_isbn(isbn)?;
        let _ = self.book_repository.delete(isbn).await?;
        self.publish(DomainEvent::book_removed(isbn)).await;
        Ok(())
    }

    async fn find_book_by_isbn(&self, isbn: Option<&str>) -> LibraryResult<BookDto> {
        let isbn = validate_isbn(isbn)?;
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_books_by_author(&self, author: Option<&str>) -> LibraryResult<Vec<BookDto>> {
        let author = author.ok_or_else(|| LibraryError::invalid_author_name(None))?;
        let res = self.book_repository.find_by_author(author).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn increment_available_copies(&self, isbn: Option<&str>) -> LibraryResult<BookDto> {
        self.update_copies(isbn, CopiesChange::Increment).await
    }

    async fn decrement_available_copies(&self, isbn: Option<&str>) -> LibraryResult<BookDto> {
        self.update_copies(isbn, CopiesChange::Decrement).await
    }
}
