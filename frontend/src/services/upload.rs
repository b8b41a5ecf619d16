//! Multipart batch upload to the backend's `/upload` endpoint.
//!
//! Every pending file is appended under the shared `files` field, followed
//! by one generated JSON sidecar under `metadata` describing the batch.
//! Failure is all-or-nothing: there is no chunking and no partial retry.

use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::services::{now_iso, ApiClient};
use crate::types::{
    AppError, AppResult, ManifestFile, MediaKind, MetadataForm, PendingFile, UploadManifest,
    UploadResponse,
};

/// Derives the sidecar name from the first uploaded file.
///
/// `report.pdf` becomes `report_metadata.json`; a name without a usable
/// stem keeps the full name as the base.
pub fn sidecar_file_name(first_file_name: &str) -> String {
    let stem = first_file_name
        .rfind('.')
        .map(|i| &first_file_name[..i])
        .filter(|s| !s.is_empty())
        .unwrap_or(first_file_name);
    format!("{}_metadata.json", stem)
}

/// Uploads the pending files plus their metadata sidecar in one request.
pub async fn upload_batch(
    api: &ApiClient,
    kind: MediaKind,
    files: &[PendingFile],
    metadata: &MetadataForm,
) -> AppResult<UploadResponse> {
    let first = files
        .first()
        .ok_or_else(|| AppError::Validation("Please select at least one file".to_string()))?;

    let form = FormData::new().map_err(|e| AppError::from_js("Failed to create FormData", e))?;
    for pending in files {
        form.append_with_blob("files", &pending.file)
            .map_err(|e| AppError::from_js("Failed to append file", e))?;
    }

    let manifest = UploadManifest::new(
        kind,
        metadata,
        files
            .iter()
            .map(|f| ManifestFile {
                name: f.name.clone(),
                size: f.size,
                mime: f.mime.clone(),
            })
            .collect(),
        now_iso(),
    );
    let sidecar = build_sidecar(&manifest, &sidecar_file_name(&first.name))?;
    form.append_with_blob("metadata", &sidecar)
        .map_err(|e| AppError::from_js("Failed to append metadata", e))?;

    api.post_form("/upload", form).await
}

/// Materializes the manifest as a JSON `File` carrying the sidecar name.
fn build_sidecar(manifest: &UploadManifest, name: &str) -> AppResult<web_sys::File> {
    let json = serde_json::to_string_pretty(manifest).map_err(|e| AppError::Decode(e.to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = web_sys::FilePropertyBag::new();
    options.set_type("application/json");
    web_sys::File::new_with_str_sequence_and_options(&parts, name, &options)
        .map_err(|e| AppError::from_js("Failed to create metadata file", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_file_name() {
        assert_eq!(sidecar_file_name("report.pdf"), "report_metadata.json");
        assert_eq!(sidecar_file_name("talk.final.mp3"), "talk.final_metadata.json");
        assert_eq!(sidecar_file_name("README"), "README_metadata.json");
        // A leading dot leaves no stem; the full name is kept as the base.
        assert_eq!(sidecar_file_name(".gitignore"), ".gitignore_metadata.json");
    }
}
