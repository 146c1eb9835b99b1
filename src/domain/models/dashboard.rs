use serde::{Deserialize, Serialize};

/// Headline counters on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub active_employees: u64,
    pub present_today: u64,
    pub absent_today: u64,
}

/// Entry of the recent-activity feed; the backend decides its shape.
pub type ActivityEntry = serde_json::Value;

/// Aggregates shown on the reports page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportStats {
    pub total_attendance: u64,
    pub average_hours: f64,
    pub overtime_hours: f64,
    pub leave_days: u64,
}
