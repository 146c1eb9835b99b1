use atlas_client::application::services::{ApiGateway, NotificationCenter};
use atlas_client::domain::events::UiEvent;
use atlas_client::domain::models::NotificationRequest;
use atlas_client::infrastructure::http::MockApiClient;
use atlas_client::infrastructure::runtime::tokio::{TokioTaskSpawner, TokioTimeService};
use atlas_client::shared::events::EventBus;
use std::sync::Arc;
use tokio::sync::broadcast::Receiver;

pub fn setup_bus() -> EventBus {
    EventBus::new(64)
}

pub fn gateway(mock: &MockApiClient) -> ApiGateway {
    ApiGateway::new(Arc::new(mock.clone()))
}

pub fn setup_center() -> NotificationCenter {
    NotificationCenter::new(
        Arc::new(TokioTaskSpawner::new()),
        Arc::new(TokioTimeService::new()),
    )
}

/// Let spawned tasks run up to their next await point
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Every notification published so far, in order
pub fn drain_notifications(rx: &mut Receiver<UiEvent>) -> Vec<NotificationRequest> {
    let mut found = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let UiEvent::ShowNotification(request) = event {
            found.push(request);
        }
    }
    found
}
