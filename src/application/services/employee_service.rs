use super::collection::LocalCollection;
use super::entity_manager::{EntityManager, EntityMessages, MutationOutcome};
use super::gateway::{ApiGateway, Reloadable};
use crate::domain::models::{Department, Employee};
use crate::domain::ports::confirmation::ConfirmationPort;
use crate::shared::events::EventBus;
use std::sync::Arc;

pub const EMPLOYEES_ENDPOINT: &str = "/api/employees/";

/// Employee directory, filtered on the client by name/id and department
#[derive(Clone)]
pub struct EmployeeService {
    employees: LocalCollection<Employee>,
    departments: LocalCollection<Department>,
    manager: EntityManager<Employee>,
}

impl EmployeeService {
    pub fn new(api: ApiGateway, bus: EventBus, confirmation: Arc<dyn ConfirmationPort>) -> Self {
        let employees = LocalCollection::new(api.clone(), EMPLOYEES_ENDPOINT);
        let manager = EntityManager::new(
            api.clone(),
            EMPLOYEES_ENDPOINT,
            bus,
            confirmation,
            EntityMessages::for_noun("employee"),
        )
        .with_dependent(Arc::new(employees.clone()) as Arc<dyn Reloadable>);

        Self {
            employees,
            departments: LocalCollection::new(api, super::attendance_service::DEPARTMENTS_ENDPOINT),
            manager,
        }
    }

    pub async fn init(&self) {
        tokio::join!(self.employees.load(), self.departments.load());
    }

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.employees.set_search_term(term).await;
    }

    /// Department id to filter by; empty for all departments
    pub async fn set_department(&self, department: impl Into<String>) {
        self.employees.set_category(department).await;
    }

    pub async fn filtered_employees(&self) -> Vec<Employee> {
        self.employees.filtered().await
    }

    pub async fn departments(&self) -> Vec<Department> {
        self.departments.items().await
    }

    pub async fn open_add(&self) {
        self.manager.open_create(None).await;
    }

    pub async fn open_edit(&self, employee: &Employee) {
        self.manager.open_edit(employee).await;
    }

    pub async fn save(&self, employee: &Employee) -> MutationOutcome {
        self.manager.save(employee).await
    }

    pub fn employees(&self) -> &LocalCollection<Employee> {
        &self.employees
    }

    pub fn manager(&self) -> &EntityManager<Employee> {
        &self.manager
    }

    pub fn is_loading(&self) -> bool {
        self.employees.is_loading()
    }
}
