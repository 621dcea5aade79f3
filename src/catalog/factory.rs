use crate::books::factory;
use crate::books::generator::RandomIsbnGenerator;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub async fn create_catalog_service(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config);
    let publisher = create_publisher(via).await;
    Box::new(CatalogServiceImpl::new(config, book_repo, Box::new(RandomIsbnGenerator), publisher))
}
