//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across pages and services.
//!
//! # Categories
//!
//! - **Media Kinds** - the five upload page variants
//! - **Metadata** - the optional descriptive fields collected per submission
//! - **Pending Files** - the per-page upload queue
//! - **API Types** - backend request/response structures
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Media Kinds
// =============================================================================

/// The media variants served by the parameterized upload page.
///
/// Each kind carries its own route, copy, file-input `accept` attribute
/// and type predicate; everything else about the upload workflow is shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Pdf,
    Text,
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Short tag embedded in the metadata sidecar (`mediaType`).
    pub fn tag(&self) -> &'static str {
        match self {
            MediaKind::Pdf => "pdf",
            MediaKind::Text => "text",
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }

    /// Route path for this kind's upload page.
    pub fn route(&self) -> String {
        format!("/upload-{}", self.tag())
    }

    /// Human label used in warnings and hints.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Pdf => "PDF",
            MediaKind::Text => "text",
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }

    /// Page heading.
    pub fn page_title(&self) -> &'static str {
        match self {
            MediaKind::Pdf => "Upload PDF Documents",
            MediaKind::Text => "Upload Text Files",
            MediaKind::Image => "Upload Image Files",
            MediaKind::Video => "Upload Video Files",
            MediaKind::Audio => "Upload Audio Files",
        }
    }

    /// Page subheading.
    pub fn page_subtitle(&self) -> &'static str {
        match self {
            MediaKind::Pdf => "Upload multiple PDF files to Google Drive",
            MediaKind::Text => "Upload multiple text files to Google Drive",
            MediaKind::Image => "Upload multiple image files to Google Drive",
            MediaKind::Video => "Upload multiple video files to Google Drive",
            MediaKind::Audio => "Upload multiple audio files to Google Drive",
        }
    }

    /// Icon shown in the page header and file rows.
    pub fn icon(&self) -> &'static str {
        match self {
            MediaKind::Pdf => "📄",
            MediaKind::Text => "📝",
            MediaKind::Image => "🖼️",
            MediaKind::Video => "🎬",
            MediaKind::Audio => "🎵",
        }
    }

    /// Accent CSS class applied to the page container.
    pub fn accent_class(&self) -> &'static str {
        match self {
            MediaKind::Pdf => "accent-red",
            MediaKind::Text => "accent-blue",
            MediaKind::Image => "accent-purple",
            MediaKind::Video => "accent-green",
            MediaKind::Audio => "accent-amber",
        }
    }

    /// `accept` attribute for the hidden file input.
    pub fn accept_attr(&self) -> &'static str {
        match self {
            MediaKind::Pdf => ".pdf",
            MediaKind::Text => ".txt",
            MediaKind::Image => "image/*",
            MediaKind::Video => "video/*",
            MediaKind::Audio => "audio/*",
        }
    }

    /// Type predicate applied to every candidate file.
    ///
    /// Exact MIME or extension for PDF/text, MIME prefix for the rest.
    pub fn accepts(&self, mime: &str, name: &str) -> bool {
        match self {
            MediaKind::Pdf => mime == "application/pdf" || name.ends_with(".pdf"),
            MediaKind::Text => mime == "text/plain" || name.ends_with(".txt"),
            MediaKind::Image => mime.starts_with("image/"),
            MediaKind::Video => mime.starts_with("video/"),
            MediaKind::Audio => mime.starts_with("audio/"),
        }
    }

    /// Warning shown when a selection contained non-matching files.
    pub fn skipped_warning(&self) -> String {
        format!("Some files were skipped. Only {} files are allowed.", self.label())
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// Optional descriptive fields collected by the metadata dialog.
///
/// All fields are free-form strings; nothing is required. Blank fields
/// become the literal `"N/A"` at transmission time, never earlier, so the
/// dialog can keep showing what the user actually typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataForm {
    pub title: String,
    pub speaker: String,
    pub url: String,
    pub published_date: String,
}

/// Trims a metadata field, substituting `"N/A"` when blank.
pub fn field_or_na(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "N/A".to_string()
    } else {
        trimmed.to_string()
    }
}

// =============================================================================
// Pending Files
// =============================================================================

/// Lifecycle of a queued file during submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileStatus {
    Queued,
    Uploading,
    Done,
    Error,
}

impl FileStatus {
    /// CSS class for the file row.
    pub fn css_class(&self) -> &'static str {
        match self {
            FileStatus::Queued => "file-queued",
            FileStatus::Uploading => "file-uploading",
            FileStatus::Done => "file-done",
            FileStatus::Error => "file-error",
        }
    }

    /// Status glyph, empty while queued (the remove button shows instead).
    pub fn glyph(&self) -> &'static str {
        match self {
            FileStatus::Queued => "",
            FileStatus::Uploading => "⏳",
            FileStatus::Done => "✅",
            FileStatus::Error => "⚠️",
        }
    }
}

/// A file selected for upload, plus its display info and status.
#[derive(Clone, Debug)]
pub struct PendingFile {
    /// Browser file handle, appended verbatim to the multipart body.
    pub file: web_sys::File,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub status: FileStatus,
}

impl PendingFile {
    pub fn new(file: web_sys::File) -> Self {
        let name = file.name();
        let size = file.size() as u64;
        let mime = file.type_();
        Self {
            file,
            name,
            size,
            mime,
            status: FileStatus::Queued,
        }
    }
}

/// Formats a byte count the way the file list displays it.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = (bytes as f64 / 1024_f64.powi(exponent as i32) * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[exponent])
}

// =============================================================================
// API Request/Response Types
// =============================================================================

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

/// Response from `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Response from `GET /auth/verify`.
#[derive(Clone, Debug, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// Google Drive connection state, from `GET /auth/status`.
///
/// Derived entirely from the backend; never cached across reloads.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveStatus {
    pub authenticated: bool,
    /// Epoch millis or ISO string, whichever the backend sends.
    #[serde(default)]
    pub expires_at: Option<serde_json::Value>,
    #[serde(default)]
    pub is_expired: bool,
    #[serde(default)]
    pub has_refresh_token: bool,
}

/// Response from `GET /auth/url`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

/// A file stored by the backend, echoed in the upload response.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadedFile {
    pub name: String,
}

/// Response from `POST /upload`.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    pub count: usize,
    pub files: Vec<UploadedFile>,
}

/// Per-file entry in the metadata sidecar manifest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ManifestFile {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
}

/// The generated metadata sidecar describing an upload batch.
///
/// Serialized pretty-printed into `<first-file-stem>_metadata.json` and
/// sent alongside the files in the same multipart request.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadManifest {
    pub title: String,
    pub speaker: String,
    pub url: String,
    pub published_date: String,
    pub upload_date: String,
    pub media_type: String,
    pub file_count: usize,
    pub files: Vec<ManifestFile>,
}

impl UploadManifest {
    pub fn new(
        kind: MediaKind,
        metadata: &MetadataForm,
        files: Vec<ManifestFile>,
        upload_date: String,
    ) -> Self {
        Self {
            title: field_or_na(&metadata.title),
            speaker: field_or_na(&metadata.speaker),
            url: field_or_na(&metadata.url),
            published_date: field_or_na(&metadata.published_date),
            upload_date,
            media_type: kind.tag().to_string(),
            file_count: files.len(),
            files,
        }
    }
}

/// Metadata block attached to a paste-text submission.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteTextMetadata {
    pub title: String,
    pub speaker: String,
    pub url: String,
    pub published_date: String,
    pub timestamp: String,
    pub word_count: usize,
    pub character_count: usize,
}

/// Body for `POST /n8n/paste-text`.
#[derive(Clone, Debug, Serialize)]
pub struct PasteTextPayload {
    pub content: String,
    pub metadata: PasteTextMetadata,
}

/// Body for `POST /n8n/youtube-link`.
#[derive(Clone, Debug, Serialize)]
pub struct YoutubeLinkPayload {
    pub url: String,
}

/// Response from the n8n forwarding endpoints.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    pub success: bool,
    #[serde(default)]
    pub n8n_response: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl WorkflowResponse {
    /// Failure message for a `success == false` response.
    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Failed to send to n8n".to_string())
    }
}

// =============================================================================
// Notices
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Result banner shown under the paste-text and YouTube forms.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "✅",
            NoticeKind::Error => "⚠️",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Transport failure before a response arrived.
    Network(String),
    /// Non-2xx response, with the server's error message when present.
    Api { status: u16, message: String },
    /// Response body did not match the expected shape.
    Decode(String),
    /// A browser API call failed.
    Browser(String),
    /// The n8n endpoint answered but reported a workflow failure.
    Workflow(String),
    /// Client-side rejection; nothing was sent.
    Validation(String),
}

impl AppError {
    /// Wraps a failed `JsValue`-returning browser call.
    pub fn from_js(context: &str, value: wasm_bindgen::JsValue) -> Self {
        AppError::Browser(format!("{}: {:?}", context, value))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Api { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AppError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
            AppError::Workflow(msg) => write!(f, "{}", msg),
            AppError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_predicate_exact_mime_or_extension() {
        let kind = MediaKind::Pdf;
        assert!(kind.accepts("application/pdf", "report.pdf"));
        assert!(kind.accepts("", "scanned.pdf"));
        assert!(!kind.accepts("text/plain", "notes.txt"));
        assert!(!kind.accepts("image/png", "photo.png"));
    }

    #[test]
    fn test_text_predicate_mime_or_txt_extension() {
        let kind = MediaKind::Text;
        assert!(kind.accepts("text/plain", "notes.txt"));
        assert!(kind.accepts("application/octet-stream", "dump.txt"));
        assert!(!kind.accepts("application/pdf", "report.pdf"));
    }

    #[test]
    fn test_prefix_predicates() {
        assert!(MediaKind::Image.accepts("image/png", "photo.png"));
        assert!(MediaKind::Image.accepts("image/webp", "photo"));
        assert!(!MediaKind::Image.accepts("text/plain", "photo.txt"));
        assert!(MediaKind::Video.accepts("video/mp4", "clip.mp4"));
        assert!(!MediaKind::Video.accepts("audio/mpeg", "song.mp3"));
        assert!(MediaKind::Audio.accepts("audio/mpeg", "song.mp3"));
        assert!(!MediaKind::Audio.accepts("video/mp4", "clip.mp4"));
    }

    #[test]
    fn test_field_or_na() {
        assert_eq!(field_or_na(""), "N/A");
        assert_eq!(field_or_na("   "), "N/A");
        assert_eq!(field_or_na("  Quarterly Review  "), "Quarterly Review");
        assert_eq!(field_or_na("N/A"), "N/A");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }

    #[test]
    fn test_manifest_blank_fields_become_na() {
        let manifest = UploadManifest::new(
            MediaKind::Pdf,
            &MetadataForm::default(),
            vec![ManifestFile {
                name: "report.pdf".to_string(),
                size: 1024,
                mime: "application/pdf".to_string(),
            }],
            "2025-06-01T12:00:00.000Z".to_string(),
        );

        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["title"], "N/A");
        assert_eq!(json["speaker"], "N/A");
        assert_eq!(json["url"], "N/A");
        assert_eq!(json["publishedDate"], "N/A");
        assert_eq!(json["mediaType"], "pdf");
        assert_eq!(json["fileCount"], 1);
        assert_eq!(json["files"][0]["name"], "report.pdf");
        assert_eq!(json["files"][0]["size"], 1024);
        assert_eq!(json["files"][0]["type"], "application/pdf");
    }

    #[test]
    fn test_manifest_trims_non_blank_fields() {
        let metadata = MetadataForm {
            title: "  Allocation Talk ".to_string(),
            speaker: "Jane Doe".to_string(),
            url: String::new(),
            published_date: "2025-05-20".to_string(),
        };
        let manifest = UploadManifest::new(MediaKind::Audio, &metadata, Vec::new(), String::new());
        assert_eq!(manifest.title, "Allocation Talk");
        assert_eq!(manifest.speaker, "Jane Doe");
        assert_eq!(manifest.url, "N/A");
        assert_eq!(manifest.published_date, "2025-05-20");
    }

    #[test]
    fn test_drive_status_deserialization() {
        let json = r#"{
            "authenticated": true,
            "expiresAt": 1750000000000,
            "isExpired": false,
            "hasRefreshToken": true
        }"#;
        let status: DriveStatus = serde_json::from_str(json).unwrap();
        assert!(status.authenticated);
        assert!(!status.is_expired);
        assert!(status.has_refresh_token);
        assert!(status.expires_at.is_some());

        // Minimal body, optional fields absent
        let status: DriveStatus = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert!(!status.authenticated);
        assert!(status.expires_at.is_none());
        assert!(!status.is_expired);
    }

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{
            "count": 2,
            "files": [
                {"name": "report.pdf", "id": "drive-id-1"},
                {"name": "report_metadata.json", "id": "drive-id-2"}
            ]
        }"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.files[0].name, "report.pdf");
    }

    #[test]
    fn test_workflow_response_failure_message() {
        let json = r#"{"success": false, "error": "webhook unreachable"}"#;
        let response: WorkflowResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.failure_message(), "webhook unreachable");

        let json = r#"{"success": false, "message": "workflow disabled"}"#;
        let response: WorkflowResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.failure_message(), "workflow disabled");

        let json = r#"{"success": true, "n8nResponse": [{"ok": true}]}"#;
        let response: WorkflowResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert!(response.n8n_response.is_some());
    }
}
