use super::gateway::{ApiGateway, Reloadable};
use crate::domain::errors::ClientError;
use crate::domain::models::{Entity, NotificationRequest};
use crate::domain::ports::api_client::ApiRequest;
use crate::domain::ports::confirmation::ConfirmationPort;
use crate::shared::events::EventBus;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// What happened to a create/update/delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Completed,
    Failed,
    /// Nothing was applied: the user did not confirm, there was nothing to
    /// send, or a newer request superseded this one
    Declined,
}

/// User-facing texts for one kind of entity
#[derive(Debug, Clone)]
pub struct EntityMessages {
    pub saved: String,
    pub save_failed: String,
    pub deleted: String,
    pub delete_failed: String,
    pub confirm_delete: String,
}

impl EntityMessages {
    /// Generic texts built from a singular noun, e.g. "department"
    pub fn for_noun(noun: &str) -> Self {
        Self {
            saved: format!("The {} was saved successfully", noun),
            save_failed: format!("An error occurred while saving the {}", noun),
            deleted: format!("The {} was deleted successfully", noun),
            delete_failed: format!("Failed to delete the {}", noun),
            confirm_delete: format!("Are you sure you want to delete this {}?", noun),
        }
    }
}

/// Add/edit dialog state
#[derive(Debug, Clone)]
pub struct EditForm<T> {
    pub open: bool,
    /// Copy being edited; `None` for a blank create form
    pub draft: Option<T>,
}

impl<T> Default for EditForm<T> {
    fn default() -> Self {
        Self {
            open: false,
            draft: None,
        }
    }
}

/// Create/update/delete for one entity endpoint.
///
/// Nothing is applied locally before the backend confirms; on success the
/// edit form closes, every dependent (list, stats) reloads, then a success
/// notification goes out. Failures only produce an error notification.
pub struct EntityManager<T> {
    api: ApiGateway,
    endpoint: String,
    bus: EventBus,
    confirmation: Arc<dyn ConfirmationPort>,
    messages: EntityMessages,
    form: Arc<RwLock<EditForm<T>>>,
    dependents: Vec<Arc<dyn Reloadable>>,
}

impl<T> Clone for EntityManager<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            endpoint: self.endpoint.clone(),
            bus: self.bus.clone(),
            confirmation: self.confirmation.clone(),
            messages: self.messages.clone(),
            form: self.form.clone(),
            dependents: self.dependents.clone(),
        }
    }
}

impl<T: Entity> EntityManager<T> {
    pub fn new(
        api: ApiGateway,
        endpoint: impl Into<String>,
        bus: EventBus,
        confirmation: Arc<dyn ConfirmationPort>,
        messages: EntityMessages,
    ) -> Self {
        Self {
            api,
            endpoint: endpoint.into(),
            bus,
            confirmation,
            messages,
            form: Arc::new(RwLock::new(EditForm::default())),
            dependents: Vec::new(),
        }
    }

    /// Reload `dependent` after every successful mutation
    pub fn with_dependent(mut self, dependent: Arc<dyn Reloadable>) -> Self {
        self.dependents.push(dependent);
        self
    }

    fn item_path(&self, id: &T::Id) -> String {
        format!("{}{}/", self.endpoint, id)
    }

    pub async fn open_create(&self, blank: Option<T>) {
        let mut form = self.form.write().await;
        form.open = true;
        form.draft = blank;
    }

    pub async fn open_edit(&self, entity: &T) {
        let mut form = self.form.write().await;
        form.open = true;
        form.draft = Some(entity.clone());
    }

    pub async fn update_draft(&self, draft: T) {
        self.form.write().await.draft = Some(draft);
    }

    pub async fn close(&self) {
        let mut form = self.form.write().await;
        form.open = false;
    }

    pub async fn is_open(&self) -> bool {
        self.form.read().await.open
    }

    pub async fn draft(&self) -> Option<T> {
        self.form.read().await.draft.clone()
    }

    /// Update when `entity` has an id, create otherwise
    pub async fn save(&self, entity: &T) -> MutationOutcome {
        let request = match entity.id() {
            Some(id) => ApiRequest::patch(self.item_path(id)),
            None => ApiRequest::post(self.endpoint.clone()),
        };

        let result = match serde_json::to_value(entity) {
            Ok(body) => self.api.execute(request.with_json(body)).await.map(|_| ()),
            Err(e) => Err(ClientError::from(e)),
        };

        match result {
            Ok(()) => {
                info!("Saved record at {}", self.endpoint);
                self.close().await;
                self.reload_dependents().await;
                self.bus
                    .notify(NotificationRequest::success(self.messages.saved.clone()));
                MutationOutcome::Completed
            }
            Err(e) => {
                error!("Error saving record at {}: {}", self.endpoint, e);
                self.bus
                    .notify(NotificationRequest::error(self.messages.save_failed.clone()));
                MutationOutcome::Failed
            }
        }
    }

    /// Save whatever the edit form currently holds
    pub async fn save_draft(&self) -> MutationOutcome {
        match self.draft().await {
            Some(draft) => self.save(&draft).await,
            None => {
                debug!("Nothing to save at {}", self.endpoint);
                MutationOutcome::Declined
            }
        }
    }

    /// Delete after explicit confirmation; never retried
    pub async fn delete(&self, id: &T::Id) -> MutationOutcome {
        if !self.confirmation.confirm(&self.messages.confirm_delete).await {
            debug!("Delete of {} declined", self.item_path(id));
            return MutationOutcome::Declined;
        }

        match self.api.execute(ApiRequest::delete(self.item_path(id))).await {
            Ok(_) => {
                info!("Deleted {}", self.item_path(id));
                self.reload_dependents().await;
                self.bus
                    .notify(NotificationRequest::success(self.messages.deleted.clone()));
                MutationOutcome::Completed
            }
            Err(e) => {
                error!("Error deleting {}: {}", self.item_path(id), e);
                self.bus
                    .notify(NotificationRequest::error(self.messages.delete_failed.clone()));
                MutationOutcome::Failed
            }
        }
    }

    async fn reload_dependents(&self) {
        join_all(self.dependents.iter().map(|d| d.reload())).await;
    }
}
