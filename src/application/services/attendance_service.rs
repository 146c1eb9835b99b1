use super::collection::LocalCollection;
use super::entity_manager::{EntityManager, EntityMessages, MutationOutcome};
use super::gateway::{ApiGateway, Reloadable};
use super::list_controller::ListController;
use super::load_tracker::LoadTracker;
use super::remote_resource::RemoteResource;
use crate::domain::models::{AttendanceLog, AttendanceStats, Department, ListQuery, NotificationRequest};
use crate::domain::ports::api_client::ApiRequest;
use crate::domain::ports::confirmation::ConfirmationPort;
use crate::shared::events::EventBus;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{error, info};

pub const ATTENDANCE_ENDPOINT: &str = "/api/attendance/";
pub const ATTENDANCE_STATS_ENDPOINT: &str = "/api/attendance/stats/";
pub const ATTENDANCE_SYNC_ENDPOINT: &str = "/api/attendance/sync/";
pub const DEPARTMENTS_ENDPOINT: &str = "/api/departments/";

/// Attendance page: paginated logs, daily stats, device sync and deletion
#[derive(Clone)]
pub struct AttendanceService {
    api: ApiGateway,
    bus: EventBus,
    logs: ListController<AttendanceLog>,
    stats: RemoteResource<AttendanceStats>,
    departments: LocalCollection<Department>,
    manager: EntityManager<AttendanceLog>,
    syncs: LoadTracker,
}

impl AttendanceService {
    /// Date range filters start and end on `today`
    pub fn new(
        api: ApiGateway,
        bus: EventBus,
        confirmation: Arc<dyn ConfirmationPort>,
        today: NaiveDate,
    ) -> Self {
        let day = today.format("%Y-%m-%d").to_string();
        let query = ListQuery::new()
            .with_filter("start_date", day.clone())
            .with_filter("end_date", day)
            .with_filter("search", "")
            .with_filter("department", "");

        let logs = ListController::with_query(api.clone(), ATTENDANCE_ENDPOINT, query);
        let stats = RemoteResource::new(api.clone(), ATTENDANCE_STATS_ENDPOINT);
        let manager = EntityManager::new(
            api.clone(),
            ATTENDANCE_ENDPOINT,
            bus.clone(),
            confirmation,
            EntityMessages::for_noun("attendance record"),
        )
        .with_dependent(Arc::new(logs.clone()) as Arc<dyn Reloadable>);

        Self {
            departments: LocalCollection::new(api.clone(), DEPARTMENTS_ENDPOINT),
            api,
            bus,
            logs,
            stats,
            manager,
            syncs: LoadTracker::new(),
        }
    }

    /// Initial load of departments, logs and stats
    pub async fn init(&self) {
        tokio::join!(self.departments.load(), self.logs.load(), self.stats.load());
    }

    pub async fn set_date_range(&self, start: NaiveDate, end: NaiveDate) {
        self.logs
            .set_filter("start_date", start.format("%Y-%m-%d").to_string())
            .await;
        self.logs
            .set_filter("end_date", end.format("%Y-%m-%d").to_string())
            .await;
    }

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.logs.set_filter("search", term).await;
    }

    pub async fn set_department(&self, department: impl Into<String>) {
        self.logs.set_filter("department", department).await;
    }

    /// Pull fresh logs from the attendance devices
    pub async fn sync(&self) -> MutationOutcome {
        let _guard = self.syncs.begin();

        match self.api.execute(ApiRequest::post(ATTENDANCE_SYNC_ENDPOINT)).await {
            Ok(_) => {
                info!("Attendance sync completed");
                self.bus
                    .notify(NotificationRequest::success("Synchronization completed successfully"));
                tokio::join!(self.logs.load(), self.stats.load());
                MutationOutcome::Completed
            }
            Err(e) => {
                error!("Error syncing attendance: {}", e);
                self.bus
                    .notify(NotificationRequest::error("Synchronization failed"));
                MutationOutcome::Failed
            }
        }
    }

    pub async fn delete_log(&self, id: i64) -> MutationOutcome {
        self.manager.delete(&id).await
    }

    pub fn logs(&self) -> &ListController<AttendanceLog> {
        &self.logs
    }

    pub async fn stats(&self) -> AttendanceStats {
        self.stats.get().await
    }

    pub async fn departments(&self) -> Vec<Department> {
        self.departments.items().await
    }

    pub async fn previous_page(&self) -> bool {
        self.logs.previous_page().await
    }

    pub async fn next_page(&self) -> bool {
        self.logs.next_page().await
    }

    pub fn is_loading(&self) -> bool {
        self.logs.is_loading() || self.syncs.is_loading()
    }
}
