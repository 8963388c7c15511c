//! WASM entry point for the Leptos CSR app

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use storefront_web::config::config_from_document;
use storefront_web::App;

fn main() {
    console_error_panic_hook::set_once();

    let config = config_from_document();
    mount_to_body(move || view! { <App config /> });
}
