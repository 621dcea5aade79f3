use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

pub struct FindBooksByAuthorCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByAuthorCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksByAuthorCommandRequest {
    #[serde(rename = "authorName")]
    pub author_name: Option<String>,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author_name: &str) -> Self {
        Self {
            author_name: Some(author_name.to_string()),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct FindBooksByAuthorCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksByAuthorCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse> for FindBooksByAuthorCommand {
    async fn execute(&self, req: FindBooksByAuthorCommandRequest) -> Result<FindBooksByAuthorCommandResponse, CommandError> {
        // the catalog only rejects a missing name, an empty one is refused here
        if let Some(name) = req.author_name.as_deref() {
            if name.is_empty() {
                return Err(CommandError::from(LibraryError::invalid_author_name(Some(name))));
            }
        }
        self.catalog_service.find_books_by_author(req.author_name.as_deref())
            .await.map_err(CommandError::from).map(FindBooksByAuthorCommandResponse::new)
    }
}
