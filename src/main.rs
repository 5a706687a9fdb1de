//! Tutorial Steps Field Entry Point

mod app;
mod components;
mod context;
mod logger;
mod sdk;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();

    if let Err(e) = sdk::init(|sdk| mount_to_body(move || view! { <App sdk=sdk /> })) {
        log::error!("[APP] Cannot start field editor: {}", e);
    }
}
