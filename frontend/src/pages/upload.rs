//! The parameterized upload page.
//!
//! One component serves all five media kinds; [`MediaKind`] supplies the
//! route copy, accept attribute, and type predicate. The workflow is:
//! intake (picker or drag & drop, filtered per kind) → metadata dialog →
//! one multipart submission for the whole batch. Status flips are atomic
//! across the batch: all uploading on start, all done or all error at the
//! end. A failed batch keeps the queue so the user can retry without
//! reselecting; duplicate filenames across selections are allowed.

use leptos::*;
use leptos_meta::Title;
use web_sys::HtmlInputElement;

use crate::components::{FileList, MetadataModal};
use crate::config::MAX_FILE_SIZE;
use crate::pages::alert;
use crate::services::{upload_batch, ApiClient};
use crate::types::{format_file_size, FileStatus, MediaKind, MetadataForm, PendingFile};

#[component]
pub fn UploadPage(kind: MediaKind) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let files = create_rw_signal(Vec::<PendingFile>::new());
    let metadata = create_rw_signal(MetadataForm::default());
    let (is_dragging, set_is_dragging) = create_signal(false);
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (show_modal, set_show_modal) = create_signal(false);

    // Filters a candidate list, appends the matches (never replaces), and
    // opens the metadata dialog when anything was accepted.
    let intake = move |list: web_sys::FileList| {
        let mut accepted = Vec::new();
        let mut skipped = false;
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                if kind.accepts(&file.type_(), &file.name()) {
                    accepted.push(PendingFile::new(file));
                } else {
                    skipped = true;
                }
            }
        }
        if skipped {
            log::warn!("Rejected files outside the {} predicate", kind.label());
            alert(&kind.skipped_warning());
        }
        if !accepted.is_empty() {
            files.update(|queue| queue.extend(accepted));
            set_show_modal.set(true);
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            intake(list);
        }
        // Allow re-selecting the same file later.
        input.set_value("");
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };
    let on_drag_leave = move |_: ev::DragEvent| set_is_dragging.set(false);
    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        if let Some(list) = ev.data_transfer().and_then(|transfer| transfer.files()) {
            intake(list);
        }
    };

    let on_modal_close = Callback::new(move |_| {
        if !is_uploading.get_untracked() {
            set_show_modal.set(false);
        }
    });

    let on_modal_submit = Callback::new(move |_| {
        let pending = files.get_untracked();
        if pending.is_empty() {
            alert("Please select at least one file");
            return;
        }

        set_show_modal.set(false);
        set_is_uploading.set(true);
        files.update(|queue| {
            for file in queue.iter_mut() {
                file.status = FileStatus::Uploading;
            }
        });

        let api = api.clone();
        spawn_local(async move {
            log::info!("📤 Uploading {} {} file(s)", pending.len(), kind.label());
            match upload_batch(&api, kind, &pending, &metadata.get_untracked()).await {
                Ok(response) => {
                    files.update(|queue| {
                        for file in queue.iter_mut() {
                            file.status = FileStatus::Done;
                        }
                    });
                    log::info!("✅ Upload complete: {} file(s) stored", response.count);
                    let names = response
                        .files
                        .iter()
                        .map(|file| format!("- {}", file.name))
                        .collect::<Vec<_>>()
                        .join("\n");
                    alert(&format!(
                        "✅ Successfully uploaded {} file(s) to Google Drive!\n\nFiles:\n{}",
                        response.count, names
                    ));
                    files.set(Vec::new());
                    metadata.set(MetadataForm::default());
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    files.update(|queue| {
                        for file in queue.iter_mut() {
                            file.status = FileStatus::Error;
                        }
                    });
                    alert("❌ Failed to upload files. Please check your backend server and try again.");
                }
            }
            set_is_uploading.set(false);
        });
    });

    let on_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    let input_id = format!("file-input-{}", kind.tag());
    let input_label_id = input_id.clone();

    view! {
        <Title text=format!("{} - mediadrop", kind.page_title())/>
        <div class=format!("upload-page {}", kind.accent_class())>
            <button class="back-button" on:click=on_back>
                "← Back to Home"
            </button>

            <div class="page-header">
                <div class="page-icon">{kind.icon()}</div>
                <h1>{kind.page_title()}</h1>
                <p class="page-subtitle">{kind.page_subtitle()}</p>
            </div>

            <div
                class="upload-zone"
                class:dragging=move || is_dragging.get()
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-zone-icon">"📤"</div>
                <h3>
                    {move || {
                        let count = files.with(|queue| queue.len());
                        if count > 0 {
                            format!("{} file(s) selected", count)
                        } else {
                            format!("Drop {} files here", kind.label())
                        }
                    }}
                </h3>
                <p class="upload-hint">"or click to browse"</p>

                <input
                    type="file"
                    id=input_id
                    accept=kind.accept_attr()
                    multiple=true
                    style="display:none"
                    on:change=on_file_change
                    disabled=move || is_uploading.get()
                />
                <label for=input_label_id class="upload-button">
                    "Choose Files"
                </label>
                <p class="upload-limit">
                    {format!("Max {} each", format_file_size(MAX_FILE_SIZE))}
                </p>
            </div>

            <FileList kind=kind files=files busy=is_uploading/>

            <MetadataModal
                open=show_modal
                metadata=metadata
                busy=is_uploading
                on_close=on_modal_close
                on_submit=on_modal_submit
            />
        </div>
    }
}
