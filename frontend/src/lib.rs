//! mediadrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page client for sending documents, media files,
//! pasted text, and YouTube links to Google Drive storage and n8n
//! ingestion workflows.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AuthContext (token verification, login/logout)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Router                                                      │
//! │  ├── /login          Login                                   │
//! │  ├── /               Home (DriveConnect + navigation)        │
//! │  ├── /upload-*       UploadPage (one component, five kinds)  │
//! │  ├── /paste-text     PasteTextPage                           │
//! │  └── /youtube-link   YoutubeLinkPage                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (MediaKind, MetadataForm, wire types, etc.)
//! - [`auth`] - Token storage and session context
//! - [`components`] - Shared UI components (modal, file list, Drive widget)
//! - [`pages`] - Routed pages
//! - [`services`] - Backend communication (auth, upload, n8n, Drive)

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod auth;
pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Media
    FileStatus, MediaKind, MetadataForm, PendingFile,
    // API
    DriveStatus, UploadManifest, UploadResponse, WorkflowResponse,
    // Errors
    AppError, AppResult,
};

// Auth
pub use auth::{provide_auth, use_auth, AuthContext};

// Components
pub use components::*;

// Services
pub use services::*;

// Pages
pub use pages::*;

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

    log::info!("🦀 mediadrop - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The HTTP client is the auth context's constructor dependency and is
    // also provided directly for the pages and the Drive widget.
    let api = ApiClient::new(config::api_url());
    provide_context(api.clone());
    provide_auth(api);

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route
                        path="/"
                        view=|| view! { <RequireAuth><HomePage/></RequireAuth> }
                    />
                    <Route
                        path="/upload-pdf"
                        view=|| view! { <RequireAuth><UploadPage kind=MediaKind::Pdf/></RequireAuth> }
                    />
                    <Route
                        path="/upload-text"
                        view=|| view! { <RequireAuth><UploadPage kind=MediaKind::Text/></RequireAuth> }
                    />
                    <Route
                        path="/upload-image"
                        view=|| view! { <RequireAuth><UploadPage kind=MediaKind::Image/></RequireAuth> }
                    />
                    <Route
                        path="/upload-video"
                        view=|| view! { <RequireAuth><UploadPage kind=MediaKind::Video/></RequireAuth> }
                    />
                    <Route
                        path="/upload-audio"
                        view=|| view! { <RequireAuth><UploadPage kind=MediaKind::Audio/></RequireAuth> }
                    />
                    <Route
                        path="/paste-text"
                        view=|| view! { <RequireAuth><PasteTextPage/></RequireAuth> }
                    />
                    <Route
                        path="/youtube-link"
                        view=|| view! { <RequireAuth><YoutubeLinkPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
