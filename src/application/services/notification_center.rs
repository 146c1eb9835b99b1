use crate::application::listeners::{spawn_notification_listener, ListenerHandle};
use crate::domain::models::{Notification, NotificationId, NotificationRequest};
use crate::domain::ports::task_spawner::TaskSpawner;
use crate::domain::ports::time_service::TimeService;
use crate::shared::events::EventBus;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Grace period between fade-out start and removal from the queue
pub const FADE_OUT_GRACE: Duration = Duration::from_millis(300);

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(5000);

#[derive(Default)]
struct Queue {
    entries: Vec<Notification>,
    last_id: u64,
}

/// Process-wide queue of transient notifications.
///
/// Every `show` schedules exactly one `hide` after the notification's
/// duration; `hide` starts the fade-out and schedules removal after
/// [`FADE_OUT_GRACE`]. Display order is insertion order.
#[derive(Clone)]
pub struct NotificationCenter {
    queue: Arc<Mutex<Queue>>,
    spawner: Arc<dyn TaskSpawner>,
    time: Arc<dyn TimeService>,
    default_duration: Duration,
}

impl NotificationCenter {
    pub fn new(spawner: Arc<dyn TaskSpawner>, time: Arc<dyn TimeService>) -> Self {
        Self {
            queue: Arc::new(Mutex::new(Queue::default())),
            spawner,
            time,
            default_duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    /// Queue a visible notification and schedule its automatic hide
    pub async fn show(&self, request: NotificationRequest) -> NotificationId {
        let duration = request.duration.unwrap_or(self.default_duration);

        let id = {
            let mut queue = self.queue.lock().await;
            // Time-based, but never reused when two land in the same millisecond
            let id = self.time.now_millis().max(queue.last_id + 1);
            queue.last_id = id;
            queue.entries.push(Notification {
                id: NotificationId(id),
                message: request.message,
                notification_type: request.notification_type,
                visible: true,
            });
            NotificationId(id)
        };

        metrics::counter!(
            "atlas_notifications_shown_total",
            "type" => request.notification_type.as_str()
        )
        .increment(1);
        info!(
            "Notification {} ({}) shown for {}ms",
            id,
            request.notification_type,
            duration.as_millis()
        );

        let center = self.clone();
        self.spawner.spawn(Box::pin(async move {
            center.time.sleep(duration).await;
            center.hide(id).await;
        }));

        id
    }

    /// Start the fade-out of `id`; unknown or already hidden ids are ignored
    pub async fn hide(&self, id: NotificationId) {
        let started = {
            let mut queue = self.queue.lock().await;
            match queue.entries.iter_mut().find(|n| n.id == id) {
                Some(notification) if notification.visible => {
                    notification.visible = false;
                    true
                }
                _ => false,
            }
        };

        if !started {
            debug!("Notification {} already hidden or gone", id);
            return;
        }

        let center = self.clone();
        self.spawner.spawn(Box::pin(async move {
            center.time.sleep(FADE_OUT_GRACE).await;
            center.remove(id).await;
        }));
    }

    async fn remove(&self, id: NotificationId) {
        let mut queue = self.queue.lock().await;
        queue.entries.retain(|n| n.id != id);
        debug!("Notification {} removed", id);
    }

    /// Current queue in display order
    pub async fn snapshot(&self) -> Vec<Notification> {
        self.queue.lock().await.entries.clone()
    }

    pub async fn len(&self) -> usize {
        self.queue.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Start serving `ShowNotification` signals from `bus`
    pub fn attach(&self, bus: &EventBus) -> ListenerHandle {
        spawn_notification_listener(bus, self.clone())
    }
}
