//! Catalog Toolbar
//!
//! Search, sort, film filter, page size and pager.

use leptos::prelude::*;
use catalog_core::{Action, FilmFilter, PageSize, SortMethod};

use crate::context::use_app_context;

#[component]
pub fn CatalogToolbar() -> impl IntoView {
    let ctx = use_app_context();

    let page = move || ctx.with_catalog(|c| c.page());
    let films = move || ctx.with_catalog(|c| c.films());

    let on_search = move |ev: web_sys::Event| {
        ctx.dispatch(Action::SetSearch(event_target_value(&ev)));
    };

    let on_sort = move |ev: web_sys::Event| {
        ctx.dispatch(Action::SetSort(SortMethod::parse(&event_target_value(&ev))));
    };

    // Options are indexed so a film literally named "all" stays selectable
    let on_film = move |ev: web_sys::Event| {
        let chosen = event_target_value(&ev)
            .parse::<usize>()
            .ok()
            .and_then(|i| ctx.with_catalog(|c| c.films()).into_iter().nth(i))
            .unwrap_or(FilmFilter::All);
        ctx.dispatch(Action::SetFilm(chosen));
    };

    let on_page_size = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        match raw.parse::<u32>().map_err(|e| e.to_string()).and_then(|n| PageSize::try_from(n).map_err(|e| e.to_string())) {
            Ok(size) => ctx.dispatch(Action::SetPageSize(size)),
            Err(e) => log::warn!("[TOOLBAR] Ignoring page size {:?}: {}", raw, e),
        }
    };

    view! {
        <div class="catalog-toolbar">
            <input
                type="search"
                class="search-input"
                placeholder="Search by name…"
                prop:value=move || ctx.with_catalog(|c| c.search().to_string())
                on:change=on_search
            />

            <select class="sort-select" on:change=on_sort>
                {[SortMethod::Id, SortMethod::Name].into_iter().map(|method| {
                    let selected = move || ctx.with_catalog(|c| c.sort() == method);
                    view! {
                        <option value=method.as_str() selected=selected>
                            {format!("Sort by {}", method.as_str())}
                        </option>
                    }
                }).collect_view()}
            </select>

            <select class="film-select" on:change=on_film>
                {move || films().into_iter().enumerate().map(|(i, film)| {
                    let selected = ctx.with_catalog(|c| *c.film() == film);
                    let label = match &film {
                        FilmFilter::All => "All films".to_string(),
                        FilmFilter::Film(name) => name.clone(),
                    };
                    view! { <option value=i.to_string() selected=selected>{label}</option> }
                }).collect_view()}
            </select>

            <select class="page-size-select" on:change=on_page_size>
                {PageSize::ALL.into_iter().map(|size| {
                    let selected = move || ctx.with_catalog(|c| c.page_size() == size);
                    view! {
                        <option value=size.get().to_string() selected=selected>
                            {format!("{} per page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>

            <div class="pager">
                <button
                    type="button"
                    disabled=move || page() <= 1
                    on:click=move |_| ctx.dispatch(Action::PrevPage)
                >
                    "‹ Prev"
                </button>
                <span class="page-label">{move || format!("Page {}", page())}</span>
                <button type="button" on:click=move |_| ctx.dispatch(Action::NextPage)>
                    "Next ›"
                </button>
            </div>
        </div>
    }
}
