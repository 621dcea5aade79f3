use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, BookResource};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookCommandRequest {
    // accepted for compatibility but ignored, the catalog assigns the isbn
    #[serde(default)]
    pub isbn: Option<String>,
    pub title: String,
    pub author: String,
    pub publication_year: i64,
    pub available_copies: i64,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, publication_year: i64, available_copies: i64) -> Self {
        Self {
            isbn: None,
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available_copies,
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookResource> {
        if self.title.is_empty() {
            return Err(LibraryError::validation("title must not be empty", Some("400".to_string())));
        }
        if self.author.is_empty() {
            return Err(LibraryError::validation("author must not be empty", Some("400".to_string())));
        }
        let publication_year = i32::try_from(self.publication_year).ok()
            .filter(|year| *year > 0)
            .ok_or_else(|| LibraryError::validation(
                format!("publication year {} must be positive", self.publication_year).as_str(), Some("400".to_string())))?;
        let available_copies = u32::try_from(self.available_copies).map_err(|_| LibraryError::validation(
            format!("available copies {} must not be negative", self.available_copies).as_str(), Some("400".to_string())))?;
        Ok(BookResource::new(self.title.as_str(), self.author.as_str(), publication_year, available_copies))
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
