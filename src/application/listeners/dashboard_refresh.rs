use super::ListenerHandle;
use crate::application::services::dashboard_service::DashboardService;
use crate::domain::events::UiEvent;
use crate::shared::events::EventBus;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Publish `RefreshDashboard` every `period`, first tick one period from now
pub fn spawn_refresh_timer(bus: &EventBus, period: Duration) -> ListenerHandle {
    let bus = bus.clone();
    let task = tokio::spawn(async move {
        tracing::info!("Dashboard refresh timer started ({}s interval)", period.as_secs());

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            bus.publish(UiEvent::RefreshDashboard);
        }
    });
    ListenerHandle::new("refresh-timer", task)
}

/// Reload `dashboard` on every `RefreshDashboard` signal.
///
/// Signals are handled one at a time in arrival order; a signal that
/// arrives while a reload is running waits for it.
pub fn follow_dashboard_refresh(bus: &EventBus, dashboard: DashboardService) -> ListenerHandle {
    let mut receiver = bus.subscribe();
    let task = tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(UiEvent::RefreshDashboard) => {
                    tracing::debug!("Refreshing dashboard");
                    dashboard.load().await;
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Dashboard follower lagged, {} signals dropped", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
    ListenerHandle::new("dashboard-refresh", task)
}
