use super::gateway::{ApiGateway, Reloadable};
use super::load_tracker::LoadTracker;
use super::remote_resource::RemoteResource;
use crate::domain::models::{ActivityEntry, DashboardStats};
use async_trait::async_trait;

pub const DASHBOARD_STATS_ENDPOINT: &str = "/api/dashboard/stats/";
pub const RECENT_ACTIVITY_ENDPOINT: &str = "/api/dashboard/recent-activity/";

/// Headline stats plus the recent-activity feed.
///
/// Both are fetched concurrently on every load; each fetch is guarded on
/// its own, so one failing does not stop the other from being applied.
#[derive(Clone)]
pub struct DashboardService {
    stats: RemoteResource<DashboardStats>,
    recent_activity: RemoteResource<Vec<ActivityEntry>>,
    loads: LoadTracker,
}

impl DashboardService {
    pub fn new(api: ApiGateway) -> Self {
        Self {
            stats: RemoteResource::new(api.clone(), DASHBOARD_STATS_ENDPOINT),
            recent_activity: RemoteResource::new(api, RECENT_ACTIVITY_ENDPOINT),
            loads: LoadTracker::new(),
        }
    }

    pub async fn load(&self) {
        let _guard = self.loads.begin();
        let (stats_loaded, activity_loaded) =
            tokio::join!(self.stats.load(), self.recent_activity.load());
        tracing::debug!(
            "Dashboard loaded (stats: {}, recent activity: {})",
            stats_loaded,
            activity_loaded
        );
    }

    pub async fn stats(&self) -> DashboardStats {
        self.stats.get().await
    }

    pub async fn recent_activity(&self) -> Vec<ActivityEntry> {
        self.recent_activity.get().await
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_loading()
    }
}

#[async_trait]
impl Reloadable for DashboardService {
    async fn reload(&self) {
        self.load().await;
    }
}
