use super::record::{Entity, Searchable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub employee_id: String,
    pub full_name: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub department: Option<Uuid>,
    #[serde(default, skip_serializing)]
    pub department_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>, // ISO 8601
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Create an unsaved employee
    pub fn new(employee_id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: None,
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            job_title: None,
            department: None,
            department_name: None,
            is_active: true,
            created_at: None,
        }
    }
}

impl Entity for Employee {
    type Id = Uuid;

    fn id(&self) -> Option<&Uuid> {
        self.id.as_ref()
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.employee_id.as_str()]
    }

    fn category(&self) -> Option<String> {
        self.department.map(|d| d.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_fields_not_sent() {
        let mut employee = Employee::new("E-001", "Ali Hassan");
        employee.department_name = Some("Operations".to_string());
        employee.created_at = Some("2024-01-01T08:00:00Z".to_string());

        let json = serde_json::to_value(&employee).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("department_name").is_none());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["full_name"], "Ali Hassan");
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": "6f1c1f4e-58a4-4d4a-9a4b-1d2b3c4d5e6f",
            "employee_id": "E-002",
            "full_name": "Sara Omar",
            "job_title": null,
            "department": "0b7e3d4a-0000-4000-8000-000000000001",
            "department_name": "Finance",
            "is_active": false,
            "created_at": "2024-03-01T09:00:00Z"
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.id.is_some());
        assert!(!employee.is_active);
        assert_eq!(employee.department_name.as_deref(), Some("Finance"));
        assert_eq!(
            employee.category().as_deref(),
            Some("0b7e3d4a-0000-4000-8000-000000000001")
        );
    }
}
