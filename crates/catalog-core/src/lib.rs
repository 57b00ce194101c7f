//! Catalog Core
//!
//! Client-side catalog state machine. Owns what the user currently sees by
//! combining fetched pages, local-only edits and filter/sort/page parameters.
//!
//! Layers:
//! - client: remote page contract (URL building, response parsing, timeout)
//! - normalize: raw record -> canonical `Entity`
//! - local_store: optimistic client-only additions/removals
//! - view: filtering, sorting, film vocabulary
//! - form: new-entity draft with a schema registry
//! - state: the single reducer tying everything together

mod error;
mod config;
mod entity;
mod normalize;
mod local_store;
mod view;
mod form;
mod client;
mod state;


pub use error::{CatalogError, CatalogResult};
pub use config::{CatalogConfig, PageSize};
pub use entity::{ArrayField, ArrayFields, Entity, EntityId, PLACEHOLDER_IMAGE, UNKNOWN_NAME};
pub use normalize::{normalize, normalize_page, PlaceholderIds};
pub use local_store::{next_local_id, LocalStore};
pub use view::{derive_view, film_vocabulary, FilmFilter, SortMethod};
pub use form::{FieldKind, FormDraft};
pub use client::{fetch_page, parse_page, FetchParams, FetchRequest, HttpResponse, RequestId, Transport};
pub use state::{reduce, Action, CatalogState, Transition};
