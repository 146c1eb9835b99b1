pub mod attendance_service;
pub mod collection;
pub mod dashboard_service;
pub mod department_service;
pub mod employee_service;
pub mod entity_manager;
pub mod gateway;
pub mod list_controller;
pub mod load_tracker;
pub mod notification_center;
pub mod remote_resource;
pub mod report_service;
pub mod session_service;
pub mod settings_service;

pub use attendance_service::AttendanceService;
pub use collection::{filter_items, LocalCollection};
pub use dashboard_service::DashboardService;
pub use department_service::DepartmentService;
pub use employee_service::EmployeeService;
pub use entity_manager::{EditForm, EntityManager, EntityMessages, MutationOutcome};
pub use gateway::{ApiGateway, Reloadable};
pub use list_controller::ListController;
pub use load_tracker::{LoadGuard, LoadTracker};
pub use notification_center::NotificationCenter;
pub use remote_resource::RemoteResource;
pub use report_service::{ReportFilters, ReportService};
pub use session_service::SessionService;
pub use settings_service::{default_settings, shallow_merge, SettingsService};
