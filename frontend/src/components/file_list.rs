//! Pending upload queue.
//!
//! Lists the selected files with their status, supports per-file removal
//! and clear-all until a submission begins. Removing a file discards its
//! status entry with it.

use leptos::*;

use crate::types::{format_file_size, FileStatus, MediaKind, PendingFile};

#[component]
pub fn FileList(
    kind: MediaKind,
    files: RwSignal<Vec<PendingFile>>,
    /// True while an upload is in flight; removal controls are disabled.
    busy: ReadSignal<bool>,
) -> impl IntoView {
    let total_size = create_memo(move |_| {
        files.with(|list| list.iter().map(|file| file.size).sum::<u64>())
    });

    view! {
        <Show when=move || files.with(|list| !list.is_empty()) fallback=|| view! {}>
            <div class="file-list">
                <div class="file-list-header">
                    <div>
                        <span class="file-count">
                            {move || {
                                let count = files.with(|list| list.len());
                                format!("{} file{}", count, if count > 1 { "s" } else { "" })
                            }}
                        </span>
                        <span class="file-total">
                            {move || format!("({})", format_file_size(total_size.get()))}
                        </span>
                    </div>
                    <button
                        class="file-clear"
                        disabled=move || busy.get()
                        on:click=move |_| files.set(Vec::new())
                    >
                        "Clear All"
                    </button>
                </div>

                <div class="file-rows">
                    <For
                        each=move || files.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        children=move |(index, file)| {
                            let status = file.status;
                            view! {
                                <div class=format!("file-row {}", status.css_class())>
                                    <span class="file-icon">{kind.icon()}</span>
                                    <div class="file-info">
                                        <p class="file-name">{file.name.clone()}</p>
                                        <p class="file-size">{format_file_size(file.size)}</p>
                                    </div>
                                    {if status == FileStatus::Queued {
                                        view! {
                                            <button
                                                class="file-remove"
                                                disabled=move || busy.get()
                                                on:click=move |_| {
                                                    files.update(|list| {
                                                        if index < list.len() {
                                                            list.remove(index);
                                                        }
                                                    })
                                                }
                                            >
                                                "✕"
                                            </button>
                                        }
                                            .into_view()
                                    } else {
                                        view! {
                                            <span class="file-status">{status.glyph()}</span>
                                        }
                                            .into_view()
                                    }}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
