//! Entry point for the WASM application

use file_upload::{init_logging, App};
use leptos::*;

pub fn main() {
    init_logging();

    log::info!("🦀 File Upload - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
