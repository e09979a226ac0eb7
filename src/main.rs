//! Car Swipe Frontend Entry Point

mod app;
mod components;
mod context;
mod deck;
mod format;
mod listings;
mod logging;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::Level::Debug);
    mount_to_body(App);
}
