//! File Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly multi-file upload form. Files are validated against a
//! MIME allow-list, a per-file size limit and a file-count limit, shown as
//! cards, and can be removed one by one. Nothing leaves the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  FileUpload          accepted + rejected state, removal      │
//! │  └── FileUploadField props forwarding                        │
//! │      └── FileUploader  drop zone, input, classification      │
//! │          └── Alert + FileCard per held file                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Limits and allow-list ([`UploadConfig`])
//! - [`types`] - Candidate files, rejections, errors
//! - [`components`] - UI components
//! - [`services`] - Classification, held-file state, event decoding

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    CandidateFile, FileId,
    // Rejections
    FileRejection, RejectionReason,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Points
// =============================================================================

/// Panic hook and console logging. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Mount a standalone upload form on a host page.
///
/// `config` is a JS object such as `{ maxFiles: 3, acceptedMimeTypes: ["image/*"] }`;
/// omitted keys keep their defaults.
#[wasm_bindgen]
pub fn mount_file_upload(config: JsValue) -> Result<(), JsValue> {
    init_logging();

    let config = UploadConfig::from_js(config).map_err(|e| {
        log::error!("❌ {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    log::info!(
        "🦀 Mounting file upload (max {} files, {} bytes each)",
        config.max_files,
        config.max_size_in_bytes
    );

    mount_to_body(move || view! { <FileUpload config=config/> });
    Ok(())
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    let on_change = Callback::new(|files: Vec<CandidateFile>| {
        log::debug!("Accepted files: {}", files.len());
    });

    view! {
        <FileUpload on_change=on_change/>
    }
}
