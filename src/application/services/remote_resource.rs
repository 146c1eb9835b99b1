use super::gateway::{ApiGateway, Reloadable};
use super::load_tracker::LoadTracker;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// A single value fetched from one endpoint (a stats block, an activity
/// feed, the current user). Loads are passive: failures are logged and the
/// previous value stays.
pub struct RemoteResource<V> {
    api: ApiGateway,
    endpoint: String,
    value: Arc<RwLock<V>>,
    loads: LoadTracker,
}

impl<V> Clone for RemoteResource<V> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            endpoint: self.endpoint.clone(),
            value: self.value.clone(),
            loads: self.loads.clone(),
        }
    }
}

impl<V> RemoteResource<V>
where
    V: DeserializeOwned + Default + Clone + Send + Sync + 'static,
{
    pub fn new(api: ApiGateway, endpoint: impl Into<String>) -> Self {
        Self {
            api,
            endpoint: endpoint.into(),
            value: Arc::new(RwLock::new(V::default())),
            loads: LoadTracker::new(),
        }
    }

    /// Returns whether the value was replaced
    pub async fn load(&self) -> bool {
        let guard = self.loads.begin();

        match self.api.get_json::<V>(&self.endpoint, Vec::new()).await {
            Ok(value) if guard.is_current() => {
                *self.value.write().await = value;
                true
            }
            Ok(_) => {
                debug!("Discarding stale response from {}", self.endpoint);
                false
            }
            Err(e) => {
                warn!("Error loading {}: {}", self.endpoint, e);
                false
            }
        }
    }

    pub async fn get(&self) -> V {
        self.value.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_loading()
    }
}

#[async_trait]
impl<V> Reloadable for RemoteResource<V>
where
    V: DeserializeOwned + Default + Clone + Send + Sync + 'static,
{
    async fn reload(&self) {
        self.load().await;
    }
}
