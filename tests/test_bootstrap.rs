mod helpers;

use atlas_client::bootstrap::build_app_state;
use atlas_client::config::Config;
use atlas_client::domain::models::NotificationRequest;
use atlas_client::domain::ports::confirmation::StaticConfirmation;
use atlas_client::infrastructure::http::MockApiClient;
use helpers::*;
use std::sync::Arc;

#[tokio::test]
async fn test_app_state_loads_every_page() {
    let mock = MockApiClient::new();
    mount_read_endpoints(&mock).await;
    let state = build_app_state(
        &Config::default(),
        Arc::new(mock.clone()),
        Arc::new(StaticConfirmation(false)),
    );

    state.load_all().await;

    assert_eq!(state.dashboard.stats().await.total_employees, 2);
    assert_eq!(state.attendance.logs().items().await.len(), 2);
    assert_eq!(state.employees.filtered_employees().await.len(), 2);
    assert_eq!(state.departments.stats().await.total_departments, 1);
    assert_eq!(state.reports.stats().await.total_attendance, 40);
    assert_eq!(state.settings.get().await["system"]["language"], "ar");
    assert!(state.session.is_authenticated().await);

    state.shutdown();
}

#[tokio::test]
async fn test_bus_notifications_land_in_center() {
    let mock = MockApiClient::new();
    let state = build_app_state(
        &Config::default(),
        Arc::new(mock),
        Arc::new(StaticConfirmation(false)),
    );
    assert_eq!(
        state.listener_names(),
        vec!["notifications", "dashboard-refresh", "refresh-timer"]
    );

    state.bus.notify(NotificationRequest::info("Welcome"));
    settle().await;

    assert_eq!(state.notifications.len().await, 1);
    state.shutdown();
}
