use super::attendance_service::DEPARTMENTS_ENDPOINT;
use super::collection::LocalCollection;
use super::entity_manager::MutationOutcome;
use super::gateway::ApiGateway;
use super::load_tracker::LoadTracker;
use super::remote_resource::RemoteResource;
use crate::domain::models::{Department, NotificationRequest, ReportStats};
use crate::shared::events::EventBus;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

pub const REPORT_STATS_ENDPOINT: &str = "/api/reports/stats/";
pub const REPORT_GENERATE_ENDPOINT: &str = "/api/reports/generate/";

/// Filters applied to report generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilters {
    pub year: i32,
    /// Empty for the whole year
    pub month: String,
    /// Empty for all departments
    pub department: String,
}

impl ReportFilters {
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            month: String::new(),
            department: String::new(),
        }
    }

    fn to_params(&self, report_type: &str) -> Vec<(String, String)> {
        vec![
            ("type".to_string(), report_type.to_string()),
            ("year".to_string(), self.year.to_string()),
            ("month".to_string(), self.month.clone()),
            ("department".to_string(), self.department.clone()),
        ]
    }
}

#[derive(Debug, Default)]
struct ReportState {
    selected: Option<String>,
    rows: Vec<Value>,
}

#[derive(Clone)]
pub struct ReportService {
    api: ApiGateway,
    bus: EventBus,
    departments: LocalCollection<Department>,
    stats: RemoteResource<ReportStats>,
    filters: Arc<RwLock<ReportFilters>>,
    state: Arc<RwLock<ReportState>>,
    loads: LoadTracker,
}

impl ReportService {
    pub fn new(api: ApiGateway, bus: EventBus, year: i32) -> Self {
        Self {
            departments: LocalCollection::new(api.clone(), DEPARTMENTS_ENDPOINT),
            stats: RemoteResource::new(api.clone(), REPORT_STATS_ENDPOINT),
            api,
            bus,
            filters: Arc::new(RwLock::new(ReportFilters::for_year(year))),
            state: Arc::new(RwLock::new(ReportState::default())),
            loads: LoadTracker::new(),
        }
    }

    pub async fn init(&self) {
        tokio::join!(self.departments.load(), self.stats.load());
    }

    pub async fn select_report(&self, report_type: impl Into<String>) {
        self.state.write().await.selected = Some(report_type.into());
    }

    pub async fn selected_report(&self) -> Option<String> {
        self.state.read().await.selected.clone()
    }

    pub async fn set_filters(&self, filters: ReportFilters) {
        *self.filters.write().await = filters;
    }

    pub async fn filters(&self) -> ReportFilters {
        self.filters.read().await.clone()
    }

    /// Generate the selected report. Without a selection only a warning
    /// is shown and nothing is sent.
    pub async fn generate(&self) -> MutationOutcome {
        let Some(report_type) = self.selected_report().await else {
            self.bus
                .notify(NotificationRequest::warning("Please select a report type"));
            return MutationOutcome::Declined;
        };

        let guard = self.loads.begin();
        let params = self.filters.read().await.to_params(&report_type);

        match self
            .api
            .get_json::<Vec<Value>>(REPORT_GENERATE_ENDPOINT, params)
            .await
        {
            Ok(rows) if guard.is_current() => {
                info!("Generated {} report with {} rows", report_type, rows.len());
                self.state.write().await.rows = rows;
                self.bus
                    .notify(NotificationRequest::success("Report generated successfully"));
                MutationOutcome::Completed
            }
            Ok(_) => {
                debug!("Discarding stale {} report", report_type);
                MutationOutcome::Declined
            }
            Err(e) => {
                error!("Error generating {} report: {}", report_type, e);
                self.bus
                    .notify(NotificationRequest::error("Failed to generate the report"));
                MutationOutcome::Failed
            }
        }
    }

    pub async fn rows(&self) -> Vec<Value> {
        self.state.read().await.rows.clone()
    }

    pub async fn stats(&self) -> ReportStats {
        self.stats.get().await
    }

    pub async fn departments(&self) -> Vec<Department> {
        self.departments.items().await
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_loading()
    }
}
