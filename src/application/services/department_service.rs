use super::attendance_service::DEPARTMENTS_ENDPOINT;
use super::collection::LocalCollection;
use super::entity_manager::{EntityManager, EntityMessages, MutationOutcome};
use super::gateway::{ApiGateway, Reloadable};
use super::remote_resource::RemoteResource;
use crate::domain::models::{Department, DepartmentStats};
use crate::domain::ports::confirmation::ConfirmationPort;
use crate::shared::events::EventBus;
use std::sync::Arc;
use uuid::Uuid;

pub const DEPARTMENT_STATS_ENDPOINT: &str = "/api/departments/stats/";

/// Department management: list, stats and CRUD. Every successful mutation
/// reloads both the list and the stats.
#[derive(Clone)]
pub struct DepartmentService {
    departments: LocalCollection<Department>,
    stats: RemoteResource<DepartmentStats>,
    manager: EntityManager<Department>,
}

impl DepartmentService {
    pub fn new(api: ApiGateway, bus: EventBus, confirmation: Arc<dyn ConfirmationPort>) -> Self {
        let departments = LocalCollection::new(api.clone(), DEPARTMENTS_ENDPOINT);
        let stats = RemoteResource::new(api.clone(), DEPARTMENT_STATS_ENDPOINT);
        let manager = EntityManager::new(
            api,
            DEPARTMENTS_ENDPOINT,
            bus,
            confirmation,
            EntityMessages::for_noun("department"),
        )
        .with_dependent(Arc::new(departments.clone()) as Arc<dyn Reloadable>)
        .with_dependent(Arc::new(stats.clone()) as Arc<dyn Reloadable>);

        Self {
            departments,
            stats,
            manager,
        }
    }

    pub async fn init(&self) {
        tokio::join!(self.departments.load(), self.stats.load());
    }

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.departments.set_search_term(term).await;
    }

    pub async fn filtered_departments(&self) -> Vec<Department> {
        self.departments.filtered().await
    }

    pub async fn stats(&self) -> DepartmentStats {
        self.stats.get().await
    }

    /// Opens the dialog with a blank, active department
    pub async fn open_add(&self) {
        self.manager.open_create(Some(Department::default())).await;
    }

    pub async fn open_edit(&self, department: &Department) {
        self.manager.open_edit(department).await;
    }

    pub async fn save(&self, department: &Department) -> MutationOutcome {
        self.manager.save(department).await
    }

    pub async fn delete(&self, id: Uuid) -> MutationOutcome {
        self.manager.delete(&id).await
    }

    pub fn departments(&self) -> &LocalCollection<Department> {
        &self.departments
    }

    pub fn manager(&self) -> &EntityManager<Department> {
        &self.manager
    }

    pub fn is_loading(&self) -> bool {
        self.departments.is_loading()
    }
}
