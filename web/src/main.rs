//! Slot Machine Web Client
//!
//! Browser front end of the slot game. All game logic lives on the server;
//! this app only calls the API, keeps the session in `localStorage`, and
//! guards the routes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod api;
mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Slot machine client starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
