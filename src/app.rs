//! Character Catalog App
//!
//! Either the error panel, or the toolbar over the loading panel or form + grid.

use leptos::prelude::*;
use reactive_stores::Store;
use catalog_core::Action;

use crate::api;
use crate::context::AppContext;
use crate::store::AppState;
use crate::components::{CatalogToolbar, CharacterForm, CharacterGrid, ErrorPanel, LoadingPanel};

#[component]
pub fn App() -> impl IntoView {
    let config = api::load_config();
    let store = Store::new(AppState::new(&config));
    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        log::info!("[APP] Loading first page");
        ctx.dispatch(Action::Reload);
    });

    // Only re-render the body when loading/error actually flip
    let status = Memo::new(move |_| {
        ctx.with_catalog(|c| (c.loading(), c.error().map(|e| e.to_string())))
    });

    view! {
        <section class="catalog">
            <header class="catalog-header">
                <h1>"Disney Characters"</h1>
                <p class="subtitle">"Add a character (fields mapped from API)."</p>
            </header>

            // Toolbar is hidden on error: Reload is the only way out
            {move || match status.get() {
                (_, Some(message)) => view! { <ErrorPanel message=message /> }.into_any(),
                (true, None) => view! {
                    <CatalogToolbar />
                    <LoadingPanel />
                }.into_any(),
                (false, None) => view! {
                    <CatalogToolbar />
                    <CharacterForm />
                    <CharacterGrid />
                }.into_any(),
            }}
        </section>
    }
}
