use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is the snapshot handed to callers, field order is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available_copies: u32,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32, available_copies: u32) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available_copies,
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.id(),
            title: other.title().to_string(),
            author: other.author().to_string(),
            publication_year: other.publication_year(),
            available_copies: other.available_copies(),
        }
    }
}

// BookResource holds the already validated fields of a new book, the isbn is assigned by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct BookResource {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available_copies: u32,
}

impl BookResource {
    pub fn new(title: &str, author: &str, publication_year: i32, available_copies: u32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available_copies,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_serialize_in_wire_order() {
        let book = BookDto::new("978-3-16-148410-0", "The Great Gatsby", "F. Scott Fitzgerald", 1925, 12);
        let json = serde_json::to_string(&book).expect("should serialize");
        assert_eq!("{\"isbn\":\"978-3-16-148410-0\",\"title\":\"The Great Gatsby\",\"author\":\"F. Scott Fitzgerald\",\"publicationYear\":1925,\"availableCopies\":12}",
                   json.as_str());
    }

    #[tokio::test]
    async fn test_should_snapshot_entity() {
        let mut entity = BookEntity::new("978-0-12-1-0", "title", "author", 2001, 3);
        let snapshot = BookDto::from(&entity);
        entity.available_copies = 0;
        assert_eq!(3, snapshot.available_copies);
        assert_eq!("978-0-12-1-0", snapshot.isbn.as_str());
    }
}
