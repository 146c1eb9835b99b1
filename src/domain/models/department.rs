use super::record::{Entity, Searchable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>, // ISO 8601
}

fn default_active() -> bool {
    true
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            manager: None,
            is_active: true,
            created_at: None,
        }
    }
}

impl Default for Department {
    /// Blank form used when opening the "add department" dialog
    fn default() -> Self {
        Self::new("")
    }
}

impl Entity for Department {
    type Id = Uuid;

    fn id(&self) -> Option<&Uuid> {
        self.id.as_ref()
    }
}

impl Searchable for Department {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        fields
    }
}

/// Aggregates shown above the department table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentStats {
    pub total_departments: u64,
    pub total_employees: u64,
    pub average_employees: f64,
}
