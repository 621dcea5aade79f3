use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;

// AppState is shared by all handlers, so the catalog and its store live as long as the router.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub async fn new(config: Configuration, via: GatewayPublisherVia) -> AppState {
        let catalog = factory::create_catalog_service(&config, via).await;
        AppState {
            config,
            catalog: Arc::from(catalog),
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidIsbn { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::InvalidAuthorName { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::InvalidAvailableCopies { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::NotFound { message } => {
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::DuplicateKey { message } => {
                (StatusCode::CONFLICT, message)
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}
