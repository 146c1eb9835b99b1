use super::gateway::{ApiGateway, Reloadable};
use super::load_tracker::LoadTracker;
use crate::domain::models::Searchable;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Records matching `search_term` and `category`.
///
/// The search term is a case-insensitive substring match against any of the
/// record's search fields; the category must match exactly. Empty values
/// match everything.
pub fn filter_items<T: Searchable + Clone>(items: &[T], search_term: &str, category: &str) -> Vec<T> {
    let needle = search_term.to_lowercase();

    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .filter(|item| category.is_empty() || item.category().as_deref() == Some(category))
        .cloned()
        .collect()
}

struct CollectionState<T> {
    items: Vec<T>,
    search_term: String,
    selected_category: String,
}

/// Fully-loaded collection filtered on the client.
///
/// The filtered view is derived on every read, so it always reflects the
/// latest items, search term and category.
pub struct LocalCollection<T> {
    api: ApiGateway,
    endpoint: String,
    state: Arc<RwLock<CollectionState<T>>>,
    loads: LoadTracker,
}

impl<T> Clone for LocalCollection<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            endpoint: self.endpoint.clone(),
            state: self.state.clone(),
            loads: self.loads.clone(),
        }
    }
}

impl<T> LocalCollection<T>
where
    T: Searchable + DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(api: ApiGateway, endpoint: impl Into<String>) -> Self {
        Self {
            api,
            endpoint: endpoint.into(),
            state: Arc::new(RwLock::new(CollectionState {
                items: Vec::new(),
                search_term: String::new(),
                selected_category: String::new(),
            })),
            loads: LoadTracker::new(),
        }
    }

    pub async fn load(&self) {
        let guard = self.loads.begin();

        match self.api.get_json::<Vec<T>>(&self.endpoint, Vec::new()).await {
            Ok(items) => {
                if !guard.is_current() {
                    debug!("Discarding stale collection from {}", self.endpoint);
                    return;
                }
                debug!("Loaded {} records from {}", items.len(), self.endpoint);
                self.state.write().await.items = items;
            }
            Err(e) => {
                error!("Error loading {}: {}", self.endpoint, e);
            }
        }
    }

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().await.search_term = term.into();
    }

    pub async fn set_category(&self, category: impl Into<String>) {
        self.state.write().await.selected_category = category.into();
    }

    pub async fn search_term(&self) -> String {
        self.state.read().await.search_term.clone()
    }

    pub async fn category(&self) -> String {
        self.state.read().await.selected_category.clone()
    }

    pub async fn items(&self) -> Vec<T> {
        self.state.read().await.items.clone()
    }

    pub async fn filtered(&self) -> Vec<T> {
        let state = self.state.read().await;
        filter_items(&state.items, &state.search_term, &state.selected_category)
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_loading()
    }
}

#[async_trait]
impl<T> Reloadable for LocalCollection<T>
where
    T: Searchable + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn reload(&self) {
        self.load().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Department, Employee};
    use crate::infrastructure::http::{MockApiClient, MockReply};
    use http::Method;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_empty_filters_match_everything() {
        let items = vec![Department::new("Finance"), Department::new("IT")];
        assert_eq!(filter_items(&items, "", "").len(), 2);
    }

    #[test]
    fn test_whitespace_is_part_of_the_term() {
        let items = vec![
            Employee::new("E-1", "Ali"),
            Employee::new("E-2", "Sara Ali"),
        ];

        let names = |term: &str| -> Vec<String> {
            filter_items(&items, term, "")
                .into_iter()
                .map(|e| e.full_name)
                .collect()
        };

        assert_eq!(names(" "), vec!["Sara Ali".to_string()]);
        assert_eq!(names(" ali"), vec!["Sara Ali".to_string()]);
        assert!(names("ali ").is_empty());
    }

    #[test]
    fn test_search_any_field() {
        let mut it = Department::new("IT");
        it.description = Some("Network and SUPPORT".to_string());
        let items = vec![Department::new("Finance"), it];

        let found = filter_items(&items, "support", "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "IT");
    }

    #[test]
    fn test_category_and_search_combined() {
        let ops = Uuid::new_v4();
        let mut ali = Employee::new("E-1", "Ali Hassan");
        ali.department = Some(ops);
        let mut alia = Employee::new("E-2", "Alia Saad");
        alia.department = Some(Uuid::new_v4());
        let items = vec![ali, alia];

        assert_eq!(filter_items(&items, "ali", "").len(), 2);
        let found = filter_items(&items, "ali", &ops.to_string());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name, "Ali Hassan");
    }

    #[test]
    fn test_employee_id_is_searchable() {
        let items = vec![Employee::new("WS-0042", "Omar"), Employee::new("WS-0100", "Huda")];
        let found = filter_items(&items, "ws-0042", "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name, "Omar");
    }

    #[tokio::test]
    async fn test_filtered_view_tracks_inputs() {
        let mock = MockApiClient::new();
        mock.on(
            Method::GET,
            "/api/departments/",
            MockReply::json(200, json!([{"name": "Finance"}, {"name": "Field Ops"}, {"name": "IT"}])),
        )
        .await;
        let departments: LocalCollection<Department> =
            LocalCollection::new(ApiGateway::new(Arc::new(mock)), "/api/departments/");

        departments.load().await;
        assert_eq!(departments.filtered().await.len(), 3);

        departments.set_search_term("f").await;
        assert_eq!(departments.filtered().await.len(), 2);

        departments.set_search_term("").await;
        assert_eq!(departments.filtered().await.len(), 3);
        assert_eq!(departments.items().await.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_items() {
        let mock = MockApiClient::new();
        mock.enqueue(
            Method::GET,
            "/api/departments/",
            MockReply::json(200, json!([{"name": "Finance"}])),
        )
        .await;
        mock.enqueue(Method::GET, "/api/departments/", MockReply::network_failure())
            .await;
        let departments: LocalCollection<Department> =
            LocalCollection::new(ApiGateway::new(Arc::new(mock)), "/api/departments/");

        departments.load().await;
        departments.load().await;

        assert_eq!(departments.items().await.len(), 1);
        assert!(!departments.is_loading());
    }
}
