use super::record::Entity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a clock event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogType {
    In,
    Out,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::In => "IN",
            LogType::Out => "OUT",
        }
    }
}

impl std::fmt::Display for LogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single check-in or check-out recorded by a device or entered manually
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub employee: Uuid,
    #[serde(default, skip_serializing)]
    pub employee_employee_id: String,
    #[serde(default, skip_serializing)]
    pub employee_full_name: String,
    pub check_time: String, // ISO 8601
    pub log_type: LogType,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>, // ISO 8601
}

impl Entity for AttendanceLog {
    type Id = i64;

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }
}

/// Daily attendance aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceStats {
    pub total_records: u64,
    pub present_today: u64,
    pub late_today: u64,
    pub absent_today: u64,
    pub present_percentage: f64,
    pub late_percentage: f64,
    pub absent_percentage: f64,
}
