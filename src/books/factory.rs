use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::books::seed::sample_books;
use crate::core::domain::Configuration;

pub fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    if config.seed_catalog {
        Box::new(MemoryBookRepository::with_books(sample_books()))
    } else {
        Box::new(MemoryBookRepository::new())
    }
}
