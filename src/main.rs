mod components;
mod config;
mod hooks;
mod models;
mod routes;
mod services;
mod stores;
mod utils;

use components::App;
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🎟️ Sistema de Comedores - iniciando...");

    yew::Renderer::<App>::new().render();
}
