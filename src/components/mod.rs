//! UI Components
//!
//! Leptos views over the catalog state.

mod catalog_toolbar;
mod character_card;
mod character_form;
mod character_grid;
mod status_panel;

pub use catalog_toolbar::CatalogToolbar;
pub use character_card::CharacterCard;
pub use character_form::CharacterForm;
pub use character_grid::CharacterGrid;
pub use status_panel::{ErrorPanel, LoadingPanel};
