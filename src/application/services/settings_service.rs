use super::entity_manager::MutationOutcome;
use super::gateway::ApiGateway;
use super::load_tracker::LoadTracker;
use crate::domain::models::NotificationRequest;
use crate::domain::ports::api_client::ApiRequest;
use crate::shared::events::EventBus;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

pub const SETTINGS_ENDPOINT: &str = "/api/settings/";

/// Settings used until the server provides its own
pub fn default_settings() -> Value {
    json!({
        "company": {
            "name": "",
            "address": "",
            "phone": "",
            "email": ""
        },
        "system": {
            "timezone": "Asia/Riyadh",
            "language": "ar",
            "dateFormat": "DD/MM/YYYY",
            "darkMode": false
        },
        "attendance": {
            "startTime": "08:00",
            "endTime": "16:00",
            "dailyHours": 8,
            "workDays": ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"],
            "gracePeriod": 15,
            "maxOvertime": 4,
            "autoLogout": true,
            "lateAlerts": true
        },
        "notifications": {
            "email": {"dailyReport": true, "lateAlerts": false, "monthlyReport": true},
            "sms": {"lateAlerts": false, "overtimeReminders": true}
        },
        "security": {
            "passwordMinLength": 8,
            "passwordRequireUppercase": true,
            "passwordRequireNumbers": true,
            "passwordRequireSymbols": false,
            "sessionTimeout": 30,
            "autoLogout": true,
            "preventMultipleLogins": false
        },
        "integrations": {
            "fingertec": {
                "ip": "192.168.1.100",
                "port": 4370,
                "username": "admin",
                "password": "",
                "autoSync": true
            },
            "backup": {"path": "/backup/", "retention": 7, "autoBackup": true}
        }
    })
}

/// Replace each top-level key of `current` with the one from `incoming`.
/// Nested objects are replaced whole, not merged.
pub fn shallow_merge(current: &mut Value, incoming: Value) {
    match (current.as_object_mut(), incoming) {
        (Some(target), Value::Object(source)) => {
            for (key, value) in source {
                target.insert(key, value);
            }
        }
        (_, other) => {
            warn!("Ignoring settings payload that is not an object: {}", other);
        }
    }
}

/// Application settings as one opaque JSON document
#[derive(Clone)]
pub struct SettingsService {
    api: ApiGateway,
    bus: EventBus,
    settings: Arc<RwLock<Value>>,
    loads: LoadTracker,
}

impl SettingsService {
    pub fn new(api: ApiGateway, bus: EventBus, defaults: Value) -> Self {
        Self {
            api,
            bus,
            settings: Arc::new(RwLock::new(defaults)),
            loads: LoadTracker::new(),
        }
    }

    pub async fn load(&self) {
        let guard = self.loads.begin();

        match self.api.get_json::<Value>(SETTINGS_ENDPOINT, Vec::new()).await {
            Ok(remote) if guard.is_current() => {
                shallow_merge(&mut *self.settings.write().await, remote);
                debug!("Settings loaded");
            }
            Ok(_) => debug!("Discarding stale settings response"),
            Err(e) => warn!("Error loading settings: {}", e),
        }
    }

    pub async fn get(&self) -> Value {
        self.settings.read().await.clone()
    }

    /// Replace one top-level section locally; nothing is sent until `save_all`
    pub async fn set_section(&self, key: &str, value: Value) {
        if let Some(document) = self.settings.write().await.as_object_mut() {
            document.insert(key.to_string(), value);
        }
    }

    pub async fn save_all(&self) -> MutationOutcome {
        let document = self.get().await;

        match self
            .api
            .execute(ApiRequest::post(SETTINGS_ENDPOINT).with_json(document))
            .await
        {
            Ok(_) => {
                info!("Settings saved");
                self.bus
                    .notify(NotificationRequest::success("Settings saved successfully"));
                MutationOutcome::Completed
            }
            Err(e) => {
                error!("Error saving settings: {}", e);
                self.bus
                    .notify(NotificationRequest::error("Failed to save settings"));
                MutationOutcome::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_loading()
    }
}
