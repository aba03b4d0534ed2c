//! Resume Builder Frontend Entry Point

mod app;
mod components;
mod config;
mod document;
mod i18n;
mod logging;
mod models;
mod store;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = UiConfig::load();
    log::set_max_level(config.log_level);
    log::info!("mounting resume builder (locale {})", config.locale);

    mount_to_body(move || view! { <App config=config /> });
}
