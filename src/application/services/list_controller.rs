use super::gateway::{ApiGateway, Reloadable};
use super::load_tracker::LoadTracker;
use crate::domain::errors::ClientResult;
use crate::domain::models::{ListQuery, PageResult, Pagination};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

struct ListState<T> {
    items: Vec<T>,
    query: ListQuery,
    pagination: Pagination,
}

/// Server-paginated list: filters → fetch → items + pagination.
///
/// `load` never surfaces errors. A failed load keeps the previous items
/// and pagination; the loading flag clears on every path. Filter changes
/// do not reload by themselves.
pub struct ListController<T> {
    api: ApiGateway,
    endpoint: String,
    state: Arc<RwLock<ListState<T>>>,
    loads: LoadTracker,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            endpoint: self.endpoint.clone(),
            state: self.state.clone(),
            loads: self.loads.clone(),
        }
    }
}

impl<T> ListController<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(api: ApiGateway, endpoint: impl Into<String>) -> Self {
        Self::with_query(api, endpoint, ListQuery::new())
    }

    pub fn with_query(api: ApiGateway, endpoint: impl Into<String>, query: ListQuery) -> Self {
        let pagination = Pagination {
            current_page: query.page,
            ..Pagination::default()
        }
        .clamped();

        Self {
            api,
            endpoint: endpoint.into(),
            state: Arc::new(RwLock::new(ListState {
                items: Vec::new(),
                query,
                pagination,
            })),
            loads: LoadTracker::new(),
        }
    }

    /// Fetch the current page with the current filters
    pub async fn load(&self) {
        let guard = self.loads.begin();

        let params = {
            let state = self.state.read().await;
            state.query.to_params()
        };

        match self.fetch(params).await {
            Ok(page) => {
                if !guard.is_current() {
                    debug!("Discarding stale page from {}", self.endpoint);
                    return;
                }
                let mut state = self.state.write().await;
                state.items = page.items;
                state.pagination = page.pagination.clamped();
                state.query.page = state.pagination.current_page;
                debug!(
                    "Loaded {} items from {} (page {}/{})",
                    state.items.len(),
                    self.endpoint,
                    state.pagination.current_page,
                    state.pagination.total_pages
                );
            }
            Err(e) => {
                error!("Error loading {}: {}", self.endpoint, e);
            }
        }
    }

    async fn fetch(&self, params: Vec<(String, String)>) -> ClientResult<PageResult<T>> {
        self.api.get_json(&self.endpoint, params).await
    }

    /// Step back one page and reload; returns false (and does nothing) on page 1
    pub async fn previous_page(&self) -> bool {
        let moved = {
            let mut state = self.state.write().await;
            if state.pagination.has_previous() {
                state.pagination.current_page -= 1;
                state.query.page = state.pagination.current_page;
                true
            } else {
                false
            }
        };
        if moved {
            self.load().await;
        }
        moved
    }

    /// Step forward one page and reload; returns false (and does nothing) on the last page
    pub async fn next_page(&self) -> bool {
        let moved = {
            let mut state = self.state.write().await;
            if state.pagination.has_next() {
                state.pagination.current_page += 1;
                state.query.page = state.pagination.current_page;
                true
            } else {
                false
            }
        };
        if moved {
            self.load().await;
        }
        moved
    }

    /// Update one filter; call `load` afterwards to apply it
    pub async fn set_filter(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut state = self.state.write().await;
        state.query.set_filter(name, value);
    }

    pub async fn filter(&self, name: &str) -> Option<String> {
        let state = self.state.read().await;
        state.query.filter(name).map(str::to_string)
    }

    pub async fn items(&self) -> Vec<T> {
        self.state.read().await.items.clone()
    }

    pub async fn pagination(&self) -> Pagination {
        self.state.read().await.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_loading()
    }
}

#[async_trait]
impl<T> Reloadable for ListController<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn reload(&self) {
        self.load().await;
    }
}
