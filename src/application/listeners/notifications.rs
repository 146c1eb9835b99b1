use super::ListenerHandle;
use crate::application::services::notification_center::NotificationCenter;
use crate::domain::events::UiEvent;
use crate::shared::events::EventBus;
use tokio::sync::broadcast::{error::RecvError, Receiver};

/// Subscribe now, then serve `ShowNotification` signals in the background.
///
/// Subscribing before spawning means signals published right after this
/// returns are not lost.
pub fn spawn_notification_listener(bus: &EventBus, center: NotificationCenter) -> ListenerHandle {
    let receiver = bus.subscribe();
    ListenerHandle::new(
        "notifications",
        tokio::spawn(run_notification_listener(receiver, center)),
    )
}

pub async fn run_notification_listener(mut receiver: Receiver<UiEvent>, center: NotificationCenter) {
    tracing::info!("Notification listener started");

    loop {
        match receiver.recv().await {
            Ok(UiEvent::ShowNotification(request)) => {
                center.show(request).await;
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Notification listener lagged, {} signals dropped", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }

    tracing::info!("Notification listener stopped");
}
