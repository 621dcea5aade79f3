use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::model::CopiesChange;
use crate::books::dto::BookDto;
use crate::utils::date::{serializer};

pub const BOOK_ADDED: &str = "book_added";
pub const BOOK_REMOVED: &str = "book_removed";

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent records one committed change to the catalog, keyed by isbn. Removals carry
// neither a version nor a snapshot.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub isbn: String,
    pub kind: DomainEventType,
    pub version: Option<i64>,
    pub book: Option<BookDto>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn book_added(book: &BookDto, version: i64) -> Self {
        Self::build(BOOK_ADDED, book.isbn.as_str(), DomainEventType::Added, Some(version), Some(book.clone()))
    }

    pub fn copies_changed(change: CopiesChange, book: &BookDto, version: i64) -> Self {
        Self::build(change.event_name(), book.isbn.as_str(), DomainEventType::Updated, Some(version), Some(book.clone()))
    }

    pub fn book_removed(isbn: &str) -> Self {
        Self::build(BOOK_REMOVED, isbn, DomainEventType::Deleted, None, None)
    }

    fn build(name: &str, isbn: &str, kind: DomainEventType, version: Option<i64>, book: Option<BookDto>) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            isbn: isbn.to_string(),
            kind,
            version,
            book,
            created_at: Utc::now().naive_utc(),
        }
    }
}
