//! Application pages.
//!
//! # Pages
//!
//! - [`LoginPage`] - credential form, the only unguarded route
//! - [`HomePage`] - Drive status widget plus navigation cards
//! - [`UploadPage`] - the parameterized per-media upload workflow
//! - [`PasteTextPage`] - raw text submission to n8n
//! - [`YoutubeLinkPage`] - YouTube URL submission to n8n

mod home;
mod login;
mod paste_text;
mod upload;
mod youtube_link;

pub use home::*;
pub use login::*;
pub use paste_text::*;
pub use upload::*;
pub use youtube_link::*;

use crate::types::AppError;

/// Blocking browser alert, the upload pages' result channel.
pub(crate) fn alert(message: &str) {
    let _ = leptos::window().alert_with_message(message);
}

/// User-facing message for a failed n8n submission.
pub(crate) fn workflow_error_message(error: &AppError) -> String {
    match error {
        AppError::Workflow(message) => message.clone(),
        _ => "Failed to send to n8n. Please check if the backend server is running.".to_string(),
    }
}
