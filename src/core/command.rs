use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    InvalidIsbn {
        message: String,
    },
    InvalidAuthorName {
        message: String,
    },
    InvalidAvailableCopies {
        message: String,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let message = other.to_string();
        match other {
            LibraryError::InvalidIsbn { .. } => {
                CommandError::InvalidIsbn { message }
            }
            LibraryError::InvalidAuthorName { .. } => {
                CommandError::InvalidAuthorName { message }
            }
            LibraryError::InvalidAvailableCopies { .. } => {
                CommandError::InvalidAvailableCopies { message }
            }
            LibraryError::BookNotFound { .. } => {
                CommandError::NotFound { message }
            }
            LibraryError::AuthorNotFound { .. } => {
                CommandError::NotFound { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
