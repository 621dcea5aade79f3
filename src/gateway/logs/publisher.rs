use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes each domain event as one structured log record.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(event_id = %event.event_id, name = %event.name, isbn = %event.isbn,
            kind = ?event.kind, event = %json, "published domain event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::events::DomainEvent;
    use crate::gateway::{factory, GatewayPublisherVia};

    #[tokio::test]
    async fn test_should_publish_to_logs() {
        let book = BookDto::new("978-0-452-28423-4", "1984", "George Orwell", 1949, 7);
        let event = DomainEvent::book_added(&book, 0);
        let publisher = factory::create_publisher(GatewayPublisherVia::Logs).await;
        let _ = publisher.publish(&event).await.expect("should publish");
    }
}
