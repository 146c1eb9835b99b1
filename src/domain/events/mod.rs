use crate::domain::models::NotificationRequest;

/// Process-wide signals exchanged between components
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// `show-notification {message, type, duration}`
    ShowNotification(NotificationRequest),
    /// `refresh-dashboard`, no payload
    RefreshDashboard,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::ShowNotification(_) => "show-notification",
            UiEvent::RefreshDashboard => "refresh-dashboard",
        }
    }
}
