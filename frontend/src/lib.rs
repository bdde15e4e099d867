//! NovaCard - Frontend Rust/Leptos Application
//!
//! A WebAssembly page collecting personal details and two images, validated
//! in the browser and relayed to a webhook by the backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── DataForm                                               │
//! │  │   ├── TextField × 3 (name, phone, birth date)            │
//! │  │   └── FileUploadField × 2 (profile picture, signature)   │
//! │  └── ToastHost (notifications)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Toast, AppError)
//! - [`components`] - UI components (Hero, DataForm, FileUploadField, ...)
//! - [`services`] - File reading and backend communication

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
    // Notifications
    Toast, ToastVariant,
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

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 NovaCard - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
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
    let toasts = create_rw_signal(Vec::<Toast>::new());

    view! {
        <div class="container">
            <Hero/>
            <DataForm toasts=toasts/>
        </div>

        <ToastHost toasts=toasts/>

        <Footer/>
    }
}
