//! Catalog Console Frontend Entry Point

mod app;
mod binding;
mod components;
mod config;
mod context;
mod logging;
mod transport;

use app::App;
use config::ConsoleConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = ConsoleConfig::from_window();
    logging::init(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
