use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // appends an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // get the first entity matching the id
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete the first entity matching the id
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities whose fields equal every predicate value, in store order
    async fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>>;
}
