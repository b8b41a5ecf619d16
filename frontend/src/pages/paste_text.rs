//! Paste-text page.
//!
//! Single-item variant of the upload workflow: a raw text blob posted as
//! JSON to the n8n forwarding endpoint, with live word/character counts.
//! A success notice auto-clears the form a few seconds later; an error
//! keeps the text so the user can retry.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::Title;

use crate::components::MetadataModal;
use crate::config::SUCCESS_CLEAR_DELAY_MS;
use crate::pages::{alert, workflow_error_message};
use crate::services::{submit_paste_text, word_count, ApiClient};
use crate::types::{MetadataForm, Notice};

#[component]
pub fn PasteTextPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (text, set_text) = create_signal(String::new());
    let metadata = create_rw_signal(MetadataForm::default());
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (status, set_status) = create_signal(None::<Notice>);
    let (show_modal, set_show_modal) = create_signal(false);

    let words = create_memo(move |_| text.with(|t| word_count(t)));
    let characters = create_memo(move |_| text.with(|t| t.chars().count()));
    let has_text = create_memo(move |_| text.with(|t| !t.trim().is_empty()));

    let clear_form = move || {
        set_text.set(String::new());
        set_status.set(None);
        metadata.set(MetadataForm::default());
    };

    let on_process_click = move |_| {
        if !has_text.get_untracked() {
            alert("Please enter some text");
            return;
        }
        set_show_modal.set(true);
    };

    let on_modal_close = Callback::new(move |_| {
        if !is_submitting.get_untracked() {
            set_show_modal.set(false);
        }
    });

    let on_modal_submit = Callback::new(move |_| {
        set_show_modal.set(false);
        set_is_submitting.set(true);
        set_status.set(None);

        let api = api.clone();
        spawn_local(async move {
            match submit_paste_text(&api, &text.get_untracked(), &metadata.get_untracked()).await {
                Ok(_) => {
                    set_is_submitting.set(false);
                    set_status.set(Some(Notice::success(
                        "Text and metadata sent successfully to n8n!",
                    )));
                    TimeoutFuture::new(SUCCESS_CLEAR_DELAY_MS).await;
                    clear_form();
                }
                Err(e) => {
                    log::error!("Error sending to n8n: {}", e);
                    set_is_submitting.set(false);
                    set_status.set(Some(Notice::error(workflow_error_message(&e))));
                }
            }
        });
    });

    let on_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <Title text="Paste Text - mediadrop"/>
        <div class="paste-page accent-violet">
            <button class="back-button" on:click=on_back>
                "← Back to Home"
            </button>

            <div class="page-header">
                <div class="page-icon">"📋"</div>
                <h1>"Paste Text"</h1>
                <p class="page-subtitle">"Paste or type your text to analyze with AI"</p>
            </div>

            <div class="paste-editor">
                <div class="paste-editor-header">
                    <span>"Enter your text"</span>
                    <span class="paste-count">
                        {move || format!("{} characters", characters.get())}
                    </span>
                </div>
                <textarea
                    placeholder="Type or paste your text here..."
                    prop:value=text
                    on:input=move |ev| {
                        set_text.set(event_target_value(&ev));
                        set_status.set(None);
                    }
                    disabled=move || is_submitting.get()
                ></textarea>
                <Show
                    when=move || has_text.get() && !is_submitting.get()
                    fallback=|| view! {}
                >
                    <button class="paste-clear" on:click=move |_| clear_form()>
                        "Clear"
                    </button>
                </Show>
            </div>

            <Show when=move || status.get().is_some() fallback=|| view! {}>
                {move || {
                    status
                        .get()
                        .map(|notice| {
                            view! {
                                <div class=format!("notice {}", notice.css_class())>
                                    <span>{notice.glyph()}</span>
                                    <p>{notice.message.clone()}</p>
                                </div>
                            }
                        })
                }}
            </Show>

            <Show
                when=move || has_text.get() && status.get().is_none()
                fallback=|| view! {}
            >
                <div class="paste-ready">
                    {move || format!("Text ready to process • {} words", words.get())}
                </div>
            </Show>

            <button
                class="btn btn-primary paste-submit"
                disabled=move || !has_text.get() || is_submitting.get()
                on:click=on_process_click
            >
                {move || {
                    if is_submitting.get() {
                        "Sending to n8n..."
                    } else if has_text.get() {
                        "Process Text"
                    } else {
                        "Enter text to continue"
                    }
                }}
            </button>

            <MetadataModal
                open=show_modal
                metadata=metadata
                busy=is_submitting
                on_close=on_modal_close
                on_submit=on_modal_submit
            />
        </div>
    }
}
