//! Application configuration.
//!
//! Centralized configuration for the mediadrop frontend.
//! In development, these are hardcoded. The API base URL can be
//! overridden at build time via the `MEDIADROP_API_URL` environment
//! variable.

/// Default backend API base URL.
///
/// All REST paths (`/auth/*`, `/upload`, `/n8n/*`) hang off this base.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Backend API base URL, honoring a build-time override.
pub fn api_url() -> String {
    option_env!("MEDIADROP_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

/// Storage key for the bearer token.
///
/// The same key is used in both local (persistent) and session storage;
/// only one of the two scopes holds a value at any time.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Maximum file size shown in the upload hint (in bytes).
///
/// 50 MB. Display only; the backend enforces the actual limit.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// OAuth popup window dimensions.
pub const POPUP_WIDTH: i32 = 600;
pub const POPUP_HEIGHT: i32 = 700;

/// Interval between checks of the OAuth popup's closed state (ms).
pub const POPUP_POLL_INTERVAL_MS: u32 = 500;

/// Delay between the popup closing and the status re-query (ms).
///
/// Gives the backend time to persist the freshly exchanged token.
pub const STATUS_RECHECK_DELAY_MS: u32 = 1_000;

/// Delay before a successful paste/link submission clears its input (ms).
pub const SUCCESS_CLEAR_DELAY_MS: u32 = 3_000;

/// Marker posted by the OAuth popup when authorization completes.
pub const DRIVE_AUTH_COMPLETE_MESSAGE: &str = "drive-auth-complete";
