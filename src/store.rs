//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the catalog itself only changes through `reduce`.

use leptos::prelude::*;
use reactive_stores::Store;
use catalog_core::{reduce, Action, CatalogConfig, CatalogState, FetchRequest, Transition};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Fetched page, local edits, parameters and form draft
    pub catalog: CatalogState,
}

impl AppState {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            catalog: CatalogState::new(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Apply one action, returning the fetch the caller must perform
pub fn store_reduce(store: &AppStore, action: Action) -> Option<FetchRequest> {
    let field = store.catalog();
    let mut catalog = field.write();
    let Transition { state, fetch } = reduce(std::mem::take(&mut *catalog), action);
    *catalog = state;
    fetch
}

/// Read the catalog (tracked)
pub fn store_read<T>(store: &AppStore, f: impl FnOnce(&CatalogState) -> T) -> T {
    f(&store.catalog().read())
}
