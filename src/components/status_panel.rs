//! Loading and error panels

use leptos::prelude::*;
use catalog_core::Action;

use crate::context::use_app_context;

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="status-panel loading">
            <span>"Loading characters…"</span>
        </div>
    }
}

/// Replaces the catalog until the user reloads
#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="status-panel error">
            <div class="error-title">"Error"</div>
            <div class="error-message">{message}</div>
            <button class="reload-btn" on:click=move |_| ctx.dispatch(Action::Reload)>
                "Reload"
            </button>
        </div>
    }
}
