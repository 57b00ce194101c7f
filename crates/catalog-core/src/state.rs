//! Catalog State
//!
//! The whole client-side catalog as one value, advanced by `reduce`.
//! Effects (fetches) are returned as data for the caller to run; their
//! results come back in as actions tagged with the request id.

use serde_json::Value;

use crate::client::{FetchParams, FetchRequest, RequestId};
use crate::config::{CatalogConfig, PageSize};
use crate::entity::Entity;
use crate::error::CatalogError;
use crate::form::FormDraft;
use crate::local_store::LocalStore;
use crate::normalize::{normalize_page, PlaceholderIds};
use crate::view::{derive_view, film_vocabulary, FilmFilter, SortMethod};

#[derive(Debug, Clone)]
pub enum Action {
    /// Re-issue the current query (initial load and manual recovery)
    Reload,
    SetPage(u32),
    NextPage,
    PrevPage,
    SetPageSize(PageSize),
    SetSearch(String),
    SetSort(SortMethod),
    SetFilm(FilmFilter),
    FetchSucceeded { request: RequestId, records: Vec<Value> },
    FetchFailed { request: RequestId, error: CatalogError },
    SetField { key: String, value: String },
    Submit { now_ms: u64 },
    Remove(String),
}

impl Action {
    pub fn from_fetch(request: RequestId, outcome: Result<Vec<Value>, CatalogError>) -> Self {
        match outcome {
            Ok(records) => Action::FetchSucceeded { request, records },
            Err(error) => Action::FetchFailed { request, error },
        }
    }

    /// Server-side parameter changes; only `Reload` may leave the error state
    fn is_query_change(&self) -> bool {
        matches!(
            self,
            Action::SetPage(_) | Action::NextPage | Action::PrevPage | Action::SetPageSize(_) | Action::SetSearch(_)
        )
    }
}

/// Result of one reducer step
#[derive(Debug)]
pub struct Transition {
    pub state: CatalogState,
    pub fetch: Option<FetchRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    page: u32,
    page_size: PageSize,
    search: String,
    sort: SortMethod,
    film: FilmFilter,
    loading: bool,
    error: Option<CatalogError>,
    store: LocalStore,
    form: FormDraft,
    placeholder_ids: PlaceholderIds,
    issued: u64,
    latest: Option<RequestId>,
}

impl CatalogState {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            page: 1,
            page_size: config.default_page_size,
            loading: true,
            ..Default::default()
        }
    }

    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortMethod {
        self.sort
    }

    pub fn film(&self) -> &FilmFilter {
        &self.film
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    pub fn form(&self) -> &FormDraft {
        &self.form
    }

    pub fn params(&self) -> FetchParams {
        FetchParams {
            page: self.page(),
            page_size: self.page_size,
            search: self.search.clone(),
        }
    }

    /// Working set: local additions, then the visible fetched page
    pub fn entities(&self) -> Vec<&Entity> {
        self.store.entities()
    }

    /// Filtered and sorted list to render
    pub fn view(&self) -> Vec<&Entity> {
        derive_view(self.store.entities(), &self.film, self.sort)
    }

    /// Film filter options, `All` first
    pub fn films(&self) -> Vec<FilmFilter> {
        film_vocabulary(self.store.entities())
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.issued += 1;
        let id = RequestId(self.issued);
        self.latest = Some(id);
        self.loading = true;
        self.error = None;
        let params = self.params();
        log::debug!("[CATALOG] Request #{} page={} size={} search={:?}", id.0, params.page, params.page_size, params.search);
        FetchRequest { id, params }
    }

    fn is_current(&self, request: RequestId) -> bool {
        if self.latest == Some(request) {
            return true;
        }
        log::debug!("[CATALOG] Discarding stale response #{} (latest {:?})", request.0, self.latest);
        false
    }
}

pub fn reduce(mut state: CatalogState, action: Action) -> Transition {
    if state.error.is_some() && action.is_query_change() {
        log::debug!("[CATALOG] Ignoring {:?} while in error state", action);
        return Transition { state, fetch: None };
    }
    let mut fetch = None;
    match action {
        Action::Reload => fetch = Some(state.begin_fetch()),
        Action::SetPage(page) => {
            state.page = page.max(1);
            fetch = Some(state.begin_fetch());
        }
        Action::NextPage => {
            state.page = state.page().saturating_add(1);
            fetch = Some(state.begin_fetch());
        }
        Action::PrevPage => {
            if state.page() > 1 {
                state.page = state.page() - 1;
                fetch = Some(state.begin_fetch());
            }
        }
        Action::SetPageSize(size) => {
            state.page_size = size;
            state.page = 1;
            fetch = Some(state.begin_fetch());
        }
        Action::SetSearch(term) => {
            state.search = term;
            state.page = 1;
            fetch = Some(state.begin_fetch());
        }
        Action::SetSort(sort) => state.sort = sort,
        Action::SetFilm(film) => state.film = film,
        Action::FetchSucceeded { request, records } => {
            if state.is_current(request) {
                let entities = normalize_page(&records, &mut state.placeholder_ids);
                log::debug!("[CATALOG] Request #{} loaded {} records", request.0, entities.len());
                state.store.replace_fetched(entities);
                if let Some(sample) = state.store.entities().first().copied().cloned() {
                    state.form.discover(&sample);
                }
                state.loading = false;
                state.error = None;
                state.latest = None;
            }
        }
        Action::FetchFailed { request, error } => {
            if state.is_current(request) {
                log::warn!("[CATALOG] Request #{} failed: {}", request.0, error);
                state.loading = false;
                state.error = Some(error);
                state.latest = None;
            }
        }
        Action::SetField { key, value } => state.form.set_field(&key, value),
        Action::Submit { now_ms } => {
            let record = state.form.to_record();
            state.store.add(record, now_ms, &mut state.placeholder_ids);
            state.form.reset();
        }
        Action::Remove(id) => {
            state.store.remove(&id);
        }
    }
    Transition { state, fetch }
}
