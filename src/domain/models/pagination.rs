use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub start_index: u64,
    #[serde(default)]
    pub end_index: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total: 0,
            start_index: 0,
            end_index: 0,
        }
    }
}

impl Pagination {
    /// Enforce `total_pages >= 1` and `current_page` within `[1, total_pages]`.
    pub fn clamped(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
        self
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One page of records, wire shape `{"results": [...], "pagination": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    #[serde(rename = "results")]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Filters plus page number for a list endpoint.
///
/// Filter mutation never touches `page` and page navigation never touches
/// the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: BTreeMap<String, String>,
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(name, value);
        self
    }

    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(name.into(), value.into());
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    /// Filters followed by `page`, ready for a query string.
    ///
    /// Empty filter values are sent as-is; the backend treats them as unset.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        params.push(("page".to_string(), self.page.to_string()));
        params
    }
}
