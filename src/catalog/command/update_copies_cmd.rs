use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::CopiesChange;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::utils::isbn::is_invalid_isbn;

pub struct UpdateCopiesCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateCopiesCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCopiesCommandRequest {
    pub isbn: Option<String>,
    pub change: CopiesChange,
}

impl UpdateCopiesCommandRequest {
    pub fn new(isbn: &str, change: CopiesChange) -> Self {
        Self {
            isbn: Some(isbn.to_string()),
            change,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateCopiesCommandResponse {
    pub book: BookDto,
}

impl UpdateCopiesCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateCopiesCommandRequest, UpdateCopiesCommandResponse> for UpdateCopiesCommand {
    async fn execute(&self, req: UpdateCopiesCommandRequest) -> Result<UpdateCopiesCommandResponse, CommandError> {
        let isbn = req.isbn.as_deref();
        if is_invalid_isbn(isbn) {
            return Err(CommandError::from(LibraryError::invalid_isbn(isbn)));
        }
        let res = match req.change {
            CopiesChange::Increment => self.catalog_service.increment_available_copies(isbn).await,
            CopiesChange::Decrement => self.catalog_service.decrement_available_copies(isbn).await,
        };
        res.map_err(CommandError::from).map(UpdateCopiesCommandResponse::new)
    }
}
