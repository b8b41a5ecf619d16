//! Backend communication services.
//!
//! This module provides the HTTP plumbing and the per-feature calls:
//!
//! # Services
//!
//! - [`api`] - bearer-authenticated HTTP client wrapper
//! - [`upload`] - multipart batch upload with metadata sidecar
//! - [`workflow`] - n8n forwarding (paste-text, YouTube link)
//! - [`drive`] - Google Drive connection status and OAuth plumbing

pub mod api;
pub mod drive;
pub mod upload;
pub mod workflow;

pub use api::*;
pub use drive::*;
pub use upload::*;
pub use workflow::*;

/// Current time as an ISO 8601 string, via the browser clock.
pub fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}
