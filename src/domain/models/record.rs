use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

/// A backend record that can be created, updated and deleted.
///
/// An entity without an id has never been saved; saving it issues a create.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Id: Display + Clone + Send + Sync + 'static;

    fn id(&self) -> Option<&Self::Id>;
}

/// A record that supports client-side filtering.
pub trait Searchable {
    /// Text fields matched by the free-text search term.
    fn search_fields(&self) -> Vec<&str>;

    /// Key matched exactly by the category selector.
    fn category(&self) -> Option<String> {
        None
    }
}
