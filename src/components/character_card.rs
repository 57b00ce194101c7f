//! Character Card
//!
//! Image, name, film count badge, remove button and optional API link.

use leptos::prelude::*;
use catalog_core::{Action, Entity, PLACEHOLDER_IMAGE};

use crate::context::use_app_context;

#[component]
pub fn CharacterCard(entity: Entity) -> impl IntoView {
    let ctx = use_app_context();

    // Broken images swap to the placeholder once
    let (src, set_src) = signal(entity.image_url.clone());
    let id = entity.id.to_string();
    let name = entity.name.clone();
    let films = entity.films().len();
    let tv = entity.lists.tv_shows.len();

    view! {
        <article class="character-card">
            <div class="card-media">
                <img
                    src=move || src.get()
                    alt=name.clone()
                    loading="lazy"
                    on:error=move |_| {
                        if src.get_untracked() != PLACEHOLDER_IMAGE {
                            set_src.set(PLACEHOLDER_IMAGE.to_string());
                        }
                    }
                />
                <h2 class="card-name">{name.clone()}</h2>
                <span class="film-badge">{format!("🎬 {}", films)}</span>
                <button
                    class="remove-btn"
                    aria-label=format!("Remove {}", name)
                    title=format!("Remove {}", name)
                    on:click=move |_| ctx.dispatch(Action::Remove(id.clone()))
                >
                    "×"
                </button>
            </div>
            <div class="card-body">
                {entity.url.clone().map(|url| view! {
                    <a class="api-link" href=url target="_blank" rel="noreferrer">"API entry"</a>
                })}
                <div class="tv-count">{format!("TV: {}", tv)}</div>
            </div>
        </article>
    }
}
