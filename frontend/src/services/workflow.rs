//! Forwarding to the n8n workflow engine.
//!
//! Pasted text and YouTube links are posted as JSON, not multipart. The
//! backend proxies them to n8n and relays the workflow's answer; a
//! `success: false` body is an error here even though the HTTP status
//! was 2xx.

use crate::services::{now_iso, ApiClient};
use crate::types::{
    field_or_na, AppError, AppResult, MetadataForm, PasteTextMetadata, PasteTextPayload,
    WorkflowResponse, YoutubeLinkPayload,
};

/// Words in a text blob, whitespace-separated.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sends a pasted text blob with its metadata to n8n.
pub async fn submit_paste_text(
    api: &ApiClient,
    content: &str,
    metadata: &MetadataForm,
) -> AppResult<WorkflowResponse> {
    let payload = PasteTextPayload {
        content: content.to_string(),
        metadata: PasteTextMetadata {
            title: field_or_na(&metadata.title),
            speaker: field_or_na(&metadata.speaker),
            url: field_or_na(&metadata.url),
            published_date: field_or_na(&metadata.published_date),
            timestamp: now_iso(),
            word_count: word_count(content),
            character_count: content.chars().count(),
        },
    };

    let response: WorkflowResponse = api.post_json("/n8n/paste-text", &payload).await?;
    if !response.success {
        return Err(AppError::Workflow(response.failure_message()));
    }
    Ok(response)
}

/// Sends a validated YouTube URL to n8n.
pub async fn submit_youtube_link(api: &ApiClient, url: &str) -> AppResult<WorkflowResponse> {
    let payload = YoutubeLinkPayload {
        url: url.to_string(),
    };

    let response: WorkflowResponse = api.post_json("/n8n/youtube-link", &payload).await?;
    if !response.success {
        return Err(AppError::Workflow(response.failure_message()));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  spread   across \n lines\t"), 3);
    }
}
