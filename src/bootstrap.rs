use crate::application::listeners::{follow_dashboard_refresh, spawn_refresh_timer, ListenerHandle};
use crate::application::services::*;
use crate::config::Config;
use crate::domain::errors::ClientResult;
use crate::domain::ports::api_client::ApiClient;
use crate::domain::ports::confirmation::ConfirmationPort;
use crate::domain::ports::task_spawner::TaskSpawner;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::ReqwestApiClient;
use crate::infrastructure::runtime::tokio::{TokioTaskSpawner, TokioTimeService};
use crate::shared::csrf::CsrfToken;
use crate::shared::events::EventBus;
use chrono::Datelike;
use std::sync::Arc;

/// Every service of the client plus the background tasks that keep it
/// current. Built once at startup; `shutdown` stops the tasks.
pub struct AppState {
    pub bus: EventBus,
    pub notifications: NotificationCenter,
    pub dashboard: DashboardService,
    pub attendance: AttendanceService,
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    pub reports: ReportService,
    pub settings: SettingsService,
    pub session: SessionService,
    listeners: Vec<ListenerHandle>,
}

impl AppState {
    /// Initial load of every page
    pub async fn load_all(&self) {
        tokio::join!(
            self.session.load_current_user(),
            self.dashboard.load(),
            self.attendance.init(),
            self.employees.init(),
            self.departments.init(),
            self.reports.init(),
            self.settings.load(),
        );
    }

    pub fn listener_names(&self) -> Vec<&'static str> {
        self.listeners.iter().map(|l| l.name()).collect()
    }

    pub fn shutdown(self) {
        for listener in self.listeners {
            listener.shutdown();
        }
        tracing::info!("Background listeners stopped");
    }
}

/// Build the HTTP client, resolving the CSRF token from configuration or,
/// failing that, from the form of a server-rendered page.
pub async fn build_api_client(config: &Config) -> ClientResult<ReqwestApiClient> {
    let configured = config.csrf_token.clone().and_then(CsrfToken::new);
    let client = ReqwestApiClient::new(&config.api_base_url, config.http_timeout(), configured)?;

    if config.csrf_token.is_some() {
        return Ok(client);
    }

    match client.discover_csrf_token(&config.csrf_page_path).await {
        Ok(Some(token)) => {
            tracing::info!("CSRF token discovered from {}", config.csrf_page_path);
            Ok(client.with_csrf_token(Some(token)))
        }
        Ok(None) => {
            tracing::warn!(
                "No CSRF token found on {}; mutating requests may be rejected",
                config.csrf_page_path
            );
            Ok(client)
        }
        Err(e) => {
            tracing::warn!("Failed to discover CSRF token: {}", e);
            Ok(client)
        }
    }
}

/// Wire all services around `client` and start the background listeners
pub fn build_app_state(
    config: &Config,
    client: Arc<dyn ApiClient>,
    confirmation: Arc<dyn ConfirmationPort>,
) -> AppState {
    let bus = EventBus::new(config.event_bus_capacity);
    tracing::info!("Event bus initialized with capacity {}", config.event_bus_capacity);

    let task_spawner = Arc::new(TokioTaskSpawner::new()) as Arc<dyn TaskSpawner>;
    let time_service = Arc::new(TokioTimeService::new()) as Arc<dyn TimeService>;

    let notifications = NotificationCenter::new(task_spawner, time_service)
        .with_default_duration(config.notification_duration());
    let notification_listener = notifications.attach(&bus);
    tracing::info!("Notification center attached");

    let api = ApiGateway::new(client);
    let today = chrono::Local::now().date_naive();

    let dashboard = DashboardService::new(api.clone());
    let attendance = AttendanceService::new(api.clone(), bus.clone(), confirmation.clone(), today);
    let employees = EmployeeService::new(api.clone(), bus.clone(), confirmation.clone());
    let departments = DepartmentService::new(api.clone(), bus.clone(), confirmation);
    let reports = ReportService::new(api.clone(), bus.clone(), today.year());
    let settings = SettingsService::new(api.clone(), bus.clone(), default_settings());
    let session = SessionService::new(api);

    let refresh_follower = follow_dashboard_refresh(&bus, dashboard.clone());
    let refresh_timer = spawn_refresh_timer(&bus, config.refresh_interval());
    tracing::info!("Dashboard refresh started");

    AppState {
        bus,
        notifications,
        dashboard,
        attendance,
        employees,
        departments,
        reports,
        settings,
        session,
        listeners: vec![notification_listener, refresh_follower, refresh_timer],
    }
}
