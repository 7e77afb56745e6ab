//! Blodinary - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget that uploads images straight from the browser to
//! Cloudinary, using an API key kept in local storage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, tagline)                                  │
//! │  └── UploadSection                                          │
//! │      ├── drop zone + hidden file input                      │
//! │      ├── CredentialForm (when no API key is stored)         │
//! │      ├── FileRow × n                                        │
//! │      └── PreviewDialog                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack                                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Toast, UploadedAsset, AppError)
//! - [`file_list`] - Upload list state, keyed by entry id
//! - [`format`] - Byte count and URL display helpers
//! - [`components`] - UI components (Upload, FileRow, PreviewDialog, etc.)
//! - [`services`] - Browser and Cloudinary access (key store, upload, preview, clipboard)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod file_list;
pub mod format;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Toasts
    Toast, ToastLevel, Toasts,
    // API
    UploadedAsset,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the app on `<body>`. Called from the binary.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Blodinary - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Blodinary"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let toasts = create_rw_signal(Toasts::new());

    let stored_key = match LocalStorageKeyStore::default().get() {
        Ok(key) => key.filter(|key| !key.trim().is_empty()),
        Err(e) => {
            log::warn!("⚠️ Could not read stored API key: {}", e);
            None
        }
    };
    let credential = create_rw_signal(stored_key);

    view! {
        <div class="backdrop"></div>
        <div class="container">
            <Hero/>
            <UploadSection credential=credential toasts=toasts/>
        </div>

        <Footer/>
        <ToastStack toasts=toasts/>
    }
}
