//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use catalog_core::{Action, CatalogConfig, CatalogState};

use crate::api;
use crate::store::{store_read, store_reduce, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    config: StoredValue<CatalogConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: CatalogConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Feed an action through the reducer and run any fetch it asks for.
    /// Fetch results re-enter here; stale ones are dropped by the reducer.
    pub fn dispatch(&self, action: Action) {
        let Some(request) = store_reduce(&self.store, action) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let config = ctx.config.get_value();
            let outcome = api::fetch_characters(&config, &request).await;
            ctx.dispatch(outcome);
        });
    }

    pub fn with_catalog<T>(&self, f: impl FnOnce(&CatalogState) -> T) -> T {
        store_read(&self.store, f)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
