use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    // isbn is absent or does not match the accepted shape
    InvalidIsbn {
        isbn: Option<String>,
    },
    InvalidAuthorName {
        author: Option<String>,
    },
    // decrement attempted while the counter is already zero
    InvalidAvailableCopies {
        isbn: String,
    },
    BookNotFound {
        isbn: String,
    },
    // Reserved for callers that treat an empty author search as absence. Author search
    // itself returns an empty list instead.
    AuthorNotFound {
        author: String,
    },
    DuplicateKey {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn invalid_isbn(isbn: Option<&str>) -> LibraryError {
        LibraryError::InvalidIsbn { isbn: isbn.map(str::to_string) }
    }

    pub fn invalid_author_name(author: Option<&str>) -> LibraryError {
        LibraryError::InvalidAuthorName { author: author.map(str::to_string) }
    }

    pub fn invalid_available_copies(isbn: &str) -> LibraryError {
        LibraryError::InvalidAvailableCopies { isbn: isbn.to_string() }
    }

    pub fn book_not_found(isbn: &str) -> LibraryError {
        LibraryError::BookNotFound { isbn: isbn.to_string() }
    }

    pub fn author_not_found(author: &str) -> LibraryError {
        LibraryError::AuthorNotFound { author: author.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidIsbn { isbn } => {
                write!(f, "The ISBN {} is not valid", or_null(isbn))
            }
            LibraryError::InvalidAuthorName { author } => {
                write!(f, "The Author name {} is not valid", or_null(author))
            }
            LibraryError::InvalidAvailableCopies { isbn } => {
                write!(f, "Cannot further decrement available copies of book with ISBN {}", isbn)
            }
            LibraryError::BookNotFound { isbn } => {
                write!(f, "The Book with ISBN {} is not found", isbn)
            }
            LibraryError::AuthorNotFound { author } => {
                write!(f, "The Author with name {} is not found", author)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_create_invalid_isbn_error() {
        assert!(matches!(LibraryError::invalid_isbn(Some("978")), LibraryError::InvalidIsbn{ isbn: Some(_) }));
        assert!(matches!(LibraryError::invalid_isbn(None), LibraryError::InvalidIsbn{ isbn: None }));
    }

    #[tokio::test]
    async fn test_should_create_invalid_author_error() {
        assert!(matches!(LibraryError::invalid_author_name(None), LibraryError::InvalidAuthorName{ author: None }));
    }

    #[tokio::test]
    async fn test_should_create_invalid_copies_error() {
        assert!(matches!(LibraryError::invalid_available_copies("978-1-5011-9181-4"), LibraryError::InvalidAvailableCopies{ isbn: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_errors() {
        assert!(matches!(LibraryError::book_not_found("978-3-16-148410-0"), LibraryError::BookNotFound{ isbn: _ }));
        assert!(matches!(LibraryError::author_not_found("Random Name"), LibraryError::AuthorNotFound{ author: _ }));
    }

    #[tokio::test]
    async fn test_should_create_ambient_errors() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_format_messages() {
        assert_eq!("The ISBN 978-3-16-148410 is not valid",
                   LibraryError::invalid_isbn(Some("978-3-16-148410")).to_string());
        assert_eq!("The ISBN null is not valid", LibraryError::invalid_isbn(None).to_string());
        assert_eq!("The Author name null is not valid", LibraryError::invalid_author_name(None).to_string());
        assert_eq!("Cannot further decrement available copies of book with ISBN 978-1-5011-9181-4",
                   LibraryError::invalid_available_copies("978-1-5011-9181-4").to_string());
        assert_eq!("The Book with ISBN 978-3-16-148410-0 is not found",
                   LibraryError::book_not_found("978-3-16-148410-0").to_string());
    }
}
