use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

pub mod api;
pub mod config;

pub use config::API_BASE_URL;

#[cfg(test)]
mod api_tests;

/// Admin API base URL, for JS code that issues its own requests
#[wasm_bindgen]
pub fn get_api_base_url() -> String {
    config::Config::api_base_url()
}

pub fn run_app() -> Result<(), JsValue> {
    info!("Initializing admin console...");

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    if config::Config::is_same_origin() {
        info!("Admin API is same-origin at {}", API_BASE_URL.as_str());
    } else {
        info!("Admin API base URL: {}", API_BASE_URL.as_str());
    }
    for resource in api::AdminResource::ALL {
        debug!("Admin resource {} at {}", resource, resource.url());
    }

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run_app()
}
