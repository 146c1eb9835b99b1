mod helpers;

use atlas_client::application::services::{DepartmentService, EmployeeService, MutationOutcome};
use atlas_client::domain::models::{Department, Employee, NotificationType};
use atlas_client::domain::ports::confirmation::StaticConfirmation;
use atlas_client::infrastructure::http::{MockApiClient, MockReply};
use helpers::*;
use http::Method;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn test_save_new_department_posts_and_reloads() {
    let mock = MockApiClient::new();
    mount_read_endpoints(&mock).await;
    mock.on(Method::POST, "/api/departments/", MockReply::json(201, json!({})))
        .await;
    let bus = setup_bus();
    let mut rx = bus.subscribe();
    let departments =
        DepartmentService::new(gateway(&mock), bus, Arc::new(StaticConfirmation(true)));

    let outcome = departments.save(&Department::new("X")).await;

    assert_eq!(outcome, MutationOutcome::Completed);
    let posts = mock.requests_to(Method::POST, "/api/departments/").await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body.as_ref().unwrap()["name"], "X");
    assert_eq!(mock.requests_to(Method::GET, "/api/departments/").await.len(), 1);
    assert_eq!(mock.requests_to(Method::GET, "/api/departments/stats/").await.len(), 1);

    let notifications = drain_notifications(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].notification_type, NotificationType::Success);
}

#[tokio::test]
async fn test_delete_without_confirmation_sends_nothing() {
    let mock = MockApiClient::new();
    let bus = setup_bus();
    let mut rx = bus.subscribe();
    let departments =
        DepartmentService::new(gateway(&mock), bus, Arc::new(StaticConfirmation(false)));

    let outcome = departments.delete(Uuid::new_v4()).await;

    assert_eq!(outcome, MutationOutcome::Declined);
    assert_eq!(mock.request_count().await, 0);
    assert!(drain_notifications(&mut rx).is_empty());
}

#[tokio::test]
async fn test_confirmed_delete_reloads_list_and_stats() {
    let mock = MockApiClient::new();
    mount_read_endpoints(&mock).await;
    let id: Uuid = ENGINEERING_ID.parse().unwrap();
    let path = format!("/api/departments/{}/", id);
    mock.on(Method::DELETE, &path, MockReply::status(204)).await;
    let bus = setup_bus();
    let mut rx = bus.subscribe();
    let departments =
        DepartmentService::new(gateway(&mock), bus, Arc::new(StaticConfirmation(true)));

    assert_eq!(departments.delete(id).await, MutationOutcome::Completed);

    assert_eq!(mock.requests_to(Method::DELETE, &path).await.len(), 1);
    assert_eq!(mock.requests_to(Method::GET, "/api/departments/").await.len(), 1);
    assert_eq!(mock.requests_to(Method::GET, "/api/departments/stats/").await.len(), 1);
    assert_eq!(
        drain_notifications(&mut rx)[0].notification_type,
        NotificationType::Success
    );
}

#[tokio::test]
async fn test_rejected_save_notifies_error_and_skips_reload() {
    let mock = MockApiClient::new();
    mock.on(
        Method::POST,
        "/api/employees/",
        MockReply::json(400, json!({"employee_id": ["already exists"]})),
    )
    .await;
    let bus = setup_bus();
    let mut rx = bus.subscribe();
    let employees = EmployeeService::new(gateway(&mock), bus, Arc::new(StaticConfirmation(true)));
    employees.open_add().await;

    let outcome = employees.save(&Employee::new("E-001", "Ali Hassan")).await;

    assert_eq!(outcome, MutationOutcome::Failed);
    assert!(employees.manager().is_open().await);
    assert!(mock.requests_to(Method::GET, "/api/employees/").await.is_empty());
    assert_eq!(
        drain_notifications(&mut rx)[0].notification_type,
        NotificationType::Error
    );
}

#[tokio::test]
async fn test_employee_search_filters_locally() {
    let mock = MockApiClient::new();
    mount_read_endpoints(&mock).await;
    let employees =
        EmployeeService::new(gateway(&mock), setup_bus(), Arc::new(StaticConfirmation(true)));
    employees.init().await;
    mock.clear_requests().await;

    employees.set_search_term("ali").await;
    let names: Vec<String> = employees
        .filtered_employees()
        .await
        .into_iter()
        .map(|e| e.full_name)
        .collect();
    assert_eq!(names, vec!["Ali Hassan".to_string()]);

    employees.set_search_term("").await;
    employees.set_department(ENGINEERING_ID).await;
    assert_eq!(employees.filtered_employees().await.len(), 1);

    assert_eq!(mock.request_count().await, 0);
}
