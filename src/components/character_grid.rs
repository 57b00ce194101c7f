//! Character Grid

use leptos::prelude::*;
use catalog_core::Entity;

use crate::components::CharacterCard;
use crate::context::use_app_context;

/// Renders the derived view (filtered and sorted working set)
#[component]
pub fn CharacterGrid() -> impl IntoView {
    let ctx = use_app_context();

    let visible = move || ctx.with_catalog(|c| c.view().into_iter().cloned().collect::<Vec<Entity>>());
    let count = move || ctx.with_catalog(|c| (c.view().len(), c.entities().len()));

    view! {
        <div class="character-grid">
            <For
                each=visible
                key=|entity| entity.id.to_string()
                children=move |entity| view! { <CharacterCard entity=entity /> }
            />
        </div>
        <p class="item-count">
            {move || {
                let (shown, total) = count();
                format!("{} of {} characters", shown, total)
            }}
        </p>
    }
}
