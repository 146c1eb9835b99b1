mod helpers;

use atlas_client::domain::events::UiEvent;
use atlas_client::domain::models::{NotificationId, NotificationRequest, NotificationType};
use helpers::*;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_visible_until_duration_then_removed_after_grace() {
    let center = setup_center();
    let id = center
        .show(NotificationRequest::success("Saved").with_duration(Duration::from_millis(1000)))
        .await;
    settle().await;

    tokio::time::advance(Duration::from_millis(999)).await;
    settle().await;
    assert!(center.snapshot().await[0].visible);

    tokio::time::advance(Duration::from_millis(1)).await;
    settle().await;
    let queue = center.snapshot().await;
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, id);
    assert!(!queue[0].visible);

    tokio::time::advance(Duration::from_millis(299)).await;
    settle().await;
    assert_eq!(center.len().await, 1);

    tokio::time::advance(Duration::from_millis(1)).await;
    settle().await;
    assert!(center.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_hide_unknown_id_leaves_queue_unchanged() {
    let center = setup_center();
    center.show(NotificationRequest::info("Sync started")).await;
    settle().await;

    center.hide(NotificationId(42)).await;
    settle().await;

    let queue = center.snapshot().await;
    assert_eq!(queue.len(), 1);
    assert!(queue[0].visible);
}

#[tokio::test(start_paused = true)]
async fn test_queue_keeps_insertion_order() {
    let center = setup_center();
    center.show(NotificationRequest::success("first")).await;
    center.show(NotificationRequest::error("second")).await;
    center.show(NotificationRequest::warning("third")).await;

    let queue = center.snapshot().await;
    let messages: Vec<&str> = queue.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(queue[1].notification_type, NotificationType::Error);
}

#[tokio::test(start_paused = true)]
async fn test_bus_notifications_reach_attached_center() {
    let bus = setup_bus();
    let center = setup_center();
    let listener = center.attach(&bus);

    bus.notify(NotificationRequest::success("Department saved"));
    bus.publish(UiEvent::RefreshDashboard);
    bus.notify(NotificationRequest::error("Failed to delete the department"));
    settle().await;

    let queue = center.snapshot().await;
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0].notification_type, NotificationType::Success);
    assert_eq!(queue[1].message, "Failed to delete the department");

    listener.shutdown();
}
