//! Google Drive connection endpoints.
//!
//! The client holds no independent source of truth about the Drive
//! connection: everything renders from the most recent `/auth/status`
//! answer.

use crate::services::ApiClient;
use crate::types::{AppResult, AuthUrlResponse, DriveStatus};

/// Queries the current Drive connection state.
pub async fn fetch_status(api: &ApiClient) -> AppResult<DriveStatus> {
    api.get_json("/auth/status").await
}

/// Fetches the Google authorization URL to open in the popup.
pub async fn fetch_auth_url(api: &ApiClient) -> AppResult<String> {
    let response: AuthUrlResponse = api.get_json("/auth/url").await?;
    Ok(response.auth_url)
}

/// Revokes the stored Drive token server-side.
///
/// Callers treat this as best-effort before a reconnect; a failure is
/// logged and the popup flow proceeds regardless.
pub async fn revoke_token(api: &ApiClient) -> AppResult<()> {
    api.post_ok("/auth/revoke").await
}
