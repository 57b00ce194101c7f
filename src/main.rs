#![allow(warnings)]
//! Character Catalog Frontend Entry Point

mod api;
mod logging;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::level_from_env());
    mount_to_body(App);
}
