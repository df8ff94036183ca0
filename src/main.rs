//! LMS Landing Frontend Entry Point

mod models;
mod routes;
mod config;
mod context;
mod docstore;
mod loader;
mod display;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[MAIN] LMS landing starting");
    mount_to_body(App);
}
