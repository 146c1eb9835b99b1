use atlas_client::infrastructure::http::{MockApiClient, MockReply};
use http::Method;
use serde_json::{json, Value};

pub const ENGINEERING_ID: &str = "0b9c7a6e-1111-4c2d-8e3f-000000000001";
pub const ALI_ID: &str = "6f1c2a8e-3b5d-4e7f-9a0b-1c2d3e4f5a6b";
pub const SARA_ID: &str = "7a2d3b9f-4c6e-4f80-ab1c-2d3e4f5a6b7c";

pub fn department_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "manager": null,
        "is_active": true
    })
}

pub fn employee_json(id: &str, employee_id: &str, full_name: &str, department: Option<&str>) -> Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "full_name": full_name,
        "job_title": "Engineer",
        "department": department,
        "is_active": true
    })
}

pub fn attendance_page(ids: &[i64], current_page: u32, total_pages: u32) -> Value {
    let results: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "employee": ALI_ID,
                "employee_employee_id": "E-001",
                "employee_full_name": "Ali Hassan",
                "check_time": "2024-03-01T08:02:00",
                "log_type": "IN",
                "source": "device"
            })
        })
        .collect();

    json!({
        "results": results,
        "pagination": {
            "currentPage": current_page,
            "totalPages": total_pages,
            "total": ids.len(),
            "startIndex": 1,
            "endIndex": ids.len()
        }
    })
}

/// Standing replies for every read endpoint the client touches
pub async fn mount_read_endpoints(mock: &MockApiClient) {
    mock.on(
        Method::GET,
        "/api/dashboard/stats/",
        MockReply::json(
            200,
            json!({"totalEmployees": 2, "activeEmployees": 2, "presentToday": 1, "absentToday": 1}),
        ),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/dashboard/recent-activity/",
        MockReply::json(200, json!([{"employee": "Ali Hassan", "action": "IN"}])),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/departments/",
        MockReply::json(200, json!([department_json(ENGINEERING_ID, "Engineering")])),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/departments/stats/",
        MockReply::json(
            200,
            json!({"totalDepartments": 1, "totalEmployees": 2, "averageEmployees": 2.0}),
        ),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/employees/",
        MockReply::json(
            200,
            json!([
                employee_json(ALI_ID, "E-001", "Ali Hassan", Some(ENGINEERING_ID)),
                employee_json(SARA_ID, "E-002", "Sara Omar", None)
            ]),
        ),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/attendance/",
        MockReply::json(200, attendance_page(&[1, 2], 1, 1)),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/attendance/stats/",
        MockReply::json(200, json!({"presentToday": 1, "absentToday": 1})),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/reports/stats/",
        MockReply::json(200, json!({"totalAttendance": 40})),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/settings/",
        MockReply::json(200, json!({"system": {"language": "ar"}})),
    )
    .await;
    mock.on(
        Method::GET,
        "/api/auth/user/",
        MockReply::json(200, json!({"username": "admin"})),
    )
    .await;
}
