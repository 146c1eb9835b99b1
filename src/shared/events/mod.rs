use crate::domain::events::UiEvent;
use crate::domain::models::NotificationRequest;
use tokio::sync::broadcast;

/// Broadcast bus for cross-component signals
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<UiEvent>,
}

impl EventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all subscribers (non-blocking, fire-and-forget)
    pub fn publish(&self, event: UiEvent) {
        let name = event.name();
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("Failed to publish {} (no subscribers): {}", name, e);
        }
    }

    /// Ask whoever renders notifications to show one
    pub fn notify(&self, request: NotificationRequest) {
        self.publish(UiEvent::ShowNotification(request));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1000)
    }
}
