//! Pension Web App
//!
//! Client-side shell for the pension dApp: a router with five pages, a
//! header carrying the wallet widget, a loading indicator and a footer.
//! Built to WASM with Trunk; see `index.html`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use config::AppConfig;
use utils::constants::APP_NAME;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("{} web app starting (log level {})", APP_NAME, config.log_level);

    leptos::mount::mount_to_body(|| view! { <App/> });
}
