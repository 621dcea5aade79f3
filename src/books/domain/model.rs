use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::serializer;

// BookEntity is the stored catalog record. Only the copies counter changes after creation,
// and only through CopiesChange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available_copies: u32,
    pub version: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32, available_copies: u32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available_copies,
            version: 0,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn increment_available_copies(&mut self) -> LibraryResult<()> {
        self.available_copies = self.available_copies.checked_add(1).ok_or_else(|| {
            LibraryError::runtime(format!("available copies overflow for {}", self.isbn).as_str(), None)
        })?;
        self.touch();
        Ok(())
    }

    // never clamps, a decrement at zero fails and leaves the record untouched
    pub fn decrement_available_copies(&mut self) -> LibraryResult<()> {
        if !self.is_available() {
            return Err(LibraryError::invalid_available_copies(self.isbn.as_str()));
        }
        self.available_copies -= 1;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn publication_year(&self) -> i32 {
        self.publication_year
    }

    fn available_copies(&self) -> u32 {
        self.available_copies
    }
}

// CopiesChange is the only way to mutate the availability counter.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum CopiesChange {
    Increment,
    Decrement,
}

impl CopiesChange {
    pub fn apply(&self, book: &mut BookEntity) -> LibraryResult<()> {
        match self {
            CopiesChange::Increment => book.increment_available_copies(),
            CopiesChange::Decrement => book.decrement_available_copies(),
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            CopiesChange::Increment => "copies_incremented",
            CopiesChange::Decrement => "copies_decremented",
        }
    }
}
