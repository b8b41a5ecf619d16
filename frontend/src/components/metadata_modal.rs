//! Metadata collection dialog.
//!
//! A controlled form over [`MetadataForm`]. Opening does not reset the
//! fields, so edits survive repeated opens within one submission cycle;
//! cancel leaves them untouched. Submit never validates (blank fields
//! become `"N/A"` at transmission time) and immediately hands control
//! back to the caller, which performs the actual network action.

use leptos::*;
use wasm_bindgen::JsValue;

use crate::types::MetadataForm;

#[component]
pub fn MetadataModal(
    /// Whether the dialog is visible.
    open: ReadSignal<bool>,
    /// Shared form state, owned by the calling page.
    metadata: RwSignal<MetadataForm>,
    /// True while the caller's submission is in flight; disables every
    /// input and the close affordances.
    busy: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    // Backdrop click dismisses, but only outside the dialog box itself.
    let on_backdrop_click = move |ev: ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        let hit_backdrop = ev
            .target()
            .zip(ev.current_target())
            .map(|(target, current)| JsValue::from(target) == JsValue::from(current))
            .unwrap_or(false);
        if hit_backdrop {
            on_close.call(());
        }
    };

    view! {
        <Show when=move || open.get() fallback=|| view! {}>
            <div class="modal-backdrop" on:click=on_backdrop_click>
                <div class="modal">
                    <button
                        class="modal-close"
                        disabled=move || busy.get()
                        on:click=move |_| on_close.call(())
                    >
                        "✕"
                    </button>

                    <h2>"Content Details"</h2>
                    <p class="modal-subtitle">
                        "Please provide information about the content (all fields are optional)"
                    </p>

                    <div class="modal-fields">
                        <div class="modal-field">
                            <label>"Title"</label>
                            <input
                                type="text"
                                placeholder="Enter title or N/A"
                                prop:value=move || metadata.with(|m| m.title.clone())
                                on:input=move |ev| {
                                    metadata.update(|m| m.title = event_target_value(&ev))
                                }
                                disabled=move || busy.get()
                            />
                        </div>

                        <div class="modal-field">
                            <label>"Speaker"</label>
                            <input
                                type="text"
                                placeholder="Enter speaker name or N/A"
                                prop:value=move || metadata.with(|m| m.speaker.clone())
                                on:input=move |ev| {
                                    metadata.update(|m| m.speaker = event_target_value(&ev))
                                }
                                disabled=move || busy.get()
                            />
                        </div>

                        <div class="modal-field">
                            <label>"URL"</label>
                            <input
                                type="text"
                                placeholder="Enter URL or N/A"
                                prop:value=move || metadata.with(|m| m.url.clone())
                                on:input=move |ev| {
                                    metadata.update(|m| m.url = event_target_value(&ev))
                                }
                                disabled=move || busy.get()
                            />
                        </div>

                        <div class="modal-field">
                            <label>"Published Date"</label>
                            <input
                                type="date"
                                prop:value=move || metadata.with(|m| m.published_date.clone())
                                on:input=move |ev| {
                                    metadata.update(|m| m.published_date = event_target_value(&ev))
                                }
                                disabled=move || busy.get()
                            />
                            <p class="modal-hint">"Leave empty if date is not applicable"</p>
                        </div>
                    </div>

                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            disabled=move || busy.get()
                            on:click=move |_| on_close.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || busy.get()
                            on:click=move |_| on_submit.call(())
                        >
                            {move || if busy.get() { "Uploading..." } else { "Submit & Upload" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
