mod helpers;

use atlas_client::application::listeners::{follow_dashboard_refresh, spawn_refresh_timer};
use atlas_client::application::services::DashboardService;
use atlas_client::domain::events::UiEvent;
use atlas_client::infrastructure::http::{MockApiClient, MockReply};
use helpers::*;
use http::Method;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_partial_failure_still_applies_other_result() {
    let mock = MockApiClient::new();
    mock.on(Method::GET, "/api/dashboard/stats/", MockReply::status(500))
        .await;
    mock.on(
        Method::GET,
        "/api/dashboard/recent-activity/",
        MockReply::json(200, json!([{"employee": "Ali Hassan", "action": "IN"}])),
    )
    .await;
    let dashboard = DashboardService::new(gateway(&mock));

    dashboard.load().await;

    assert_eq!(dashboard.stats().await.total_employees, 0);
    assert_eq!(dashboard.recent_activity().await.len(), 1);
    assert!(!dashboard.is_loading());
}

#[tokio::test]
async fn test_refresh_signal_reloads_dashboard() {
    let mock = MockApiClient::new();
    mount_read_endpoints(&mock).await;
    let bus = setup_bus();
    let dashboard = DashboardService::new(gateway(&mock));
    let follower = follow_dashboard_refresh(&bus, dashboard.clone());

    bus.publish(UiEvent::RefreshDashboard);
    bus.publish(UiEvent::RefreshDashboard);
    settle().await;

    assert_eq!(mock.requests_to(Method::GET, "/api/dashboard/stats/").await.len(), 2);
    assert_eq!(dashboard.stats().await.total_employees, 2);

    follower.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_timer_drives_periodic_reload() {
    let mock = MockApiClient::new();
    mount_read_endpoints(&mock).await;
    let bus = setup_bus();
    let dashboard = DashboardService::new(gateway(&mock));
    let follower = follow_dashboard_refresh(&bus, dashboard);
    let timer = spawn_refresh_timer(&bus, Duration::from_secs(30));
    settle().await;

    tokio::time::advance(Duration::from_secs(30)).await;
    settle().await;
    tokio::time::advance(Duration::from_secs(30)).await;
    settle().await;

    assert_eq!(
        mock.requests_to(Method::GET, "/api/dashboard/recent-activity/").await.len(),
        2
    );

    timer.shutdown();
    follower.shutdown();
}
