//! YouTube link page.
//!
//! Accepts `watch?v=`, `youtu.be/`, `embed/`, and `v/` URL forms, shows a
//! thumbnail preview from the extracted 11-character video id, and keeps
//! submission disabled until the pattern matches.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::Title;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SUCCESS_CLEAR_DELAY_MS;
use crate::pages::{alert, workflow_error_message};
use crate::services::{submit_youtube_link, ApiClient};
use crate::types::Notice;

static YOUTUBE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?(youtube\.com/(watch\?v=|embed/|v/)|youtu\.be/)[A-Za-z0-9_-]{11}",
    )
    .expect("valid regex")
});

static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})")
        .expect("valid regex")
});

/// Whether the input looks like a YouTube video URL.
pub fn is_valid_youtube_url(url: &str) -> bool {
    YOUTUBE_URL_RE.is_match(url)
}

/// Extracts the 11-character video identifier.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(url)
        .map(|captures| captures[1].to_string())
}

#[component]
pub fn YoutubeLinkPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (url, set_url) = create_signal(String::new());
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (status, set_status) = create_signal(None::<Notice>);

    // None while the field is blank, so no verdict is shown yet.
    let validity = create_memo(move |_| {
        url.with(|u| {
            if u.trim().is_empty() {
                None
            } else {
                Some(is_valid_youtube_url(u))
            }
        })
    });
    let video_id = create_memo(move |_| {
        if validity.get() == Some(true) {
            url.with(|u| extract_video_id(u))
        } else {
            None
        }
    });

    let clear_form = move || {
        set_url.set(String::new());
        set_status.set(None);
    };

    let on_submit = move |_| {
        if validity.get_untracked() != Some(true) {
            alert("Please enter a valid YouTube URL");
            return;
        }

        set_is_submitting.set(true);
        set_status.set(None);

        let api = api.clone();
        spawn_local(async move {
            match submit_youtube_link(&api, &url.get_untracked()).await {
                Ok(_) => {
                    set_is_submitting.set(false);
                    set_status.set(Some(Notice::success(
                        "YouTube link sent successfully to n8n!",
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
    };

    let on_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <Title text="YouTube Link - mediadrop"/>
        <div class="youtube-page accent-rose">
            <button class="back-button" on:click=on_back>
                "← Back to Home"
            </button>

            <div class="page-header">
                <div class="page-icon">"▶️"</div>
                <h1>"YouTube Link"</h1>
                <p class="page-subtitle">"Submit a YouTube video for processing"</p>
            </div>

            <div class="youtube-input">
                <input
                    type="text"
                    placeholder="https://www.youtube.com/watch?v=..."
                    prop:value=url
                    on:input=move |ev| {
                        set_url.set(event_target_value(&ev));
                        set_status.set(None);
                    }
                    disabled=move || is_submitting.get()
                />
                <Show
                    when=move || !url.with(|u| u.is_empty()) && !is_submitting.get()
                    fallback=|| view! {}
                >
                    <button class="youtube-clear" on:click=move |_| clear_form()>
                        "✕"
                    </button>
                </Show>
            </div>

            {move || match validity.get() {
                Some(true) => view! {
                    <p class="url-verdict url-valid">"Valid YouTube URL"</p>
                }
                .into_view(),
                Some(false) => view! {
                    <p class="url-verdict url-invalid">"Invalid YouTube URL"</p>
                }
                .into_view(),
                None => ().into_view(),
            }}

            <Show when=move || video_id.get().is_some() fallback=|| view! {}>
                <div class="youtube-preview">
                    <img
                        src=move || {
                            format!(
                                "https://img.youtube.com/vi/{}/mqdefault.jpg",
                                video_id.get().unwrap_or_default(),
                            )
                        }
                        alt="Video thumbnail"
                    />
                </div>
            </Show>

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

            <button
                class="btn btn-primary youtube-submit"
                disabled=move || validity.get() != Some(true) || is_submitting.get()
                on:click=on_submit
            >
                {move || if is_submitting.get() { "Sending to n8n..." } else { "Send to n8n" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_watch_urls() {
        assert!(is_valid_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_youtube_url("http://youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_youtube_url("www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_accepts_short_and_embed_urls() {
        assert!(is_valid_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(is_valid_youtube_url("https://www.youtube.com/embed/dQw4w9WgXcQ"));
        assert!(is_valid_youtube_url("https://www.youtube.com/v/dQw4w9WgXcQ"));
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_rejects_urls_without_an_id() {
        assert!(!is_valid_youtube_url("https://www.youtube.com/watch?v=short"));
        assert!(!is_valid_youtube_url("https://youtu.be/"));
        assert!(!is_valid_youtube_url("https://vimeo.com/123456789"));
        assert!(!is_valid_youtube_url("not a url"));
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
    }

    #[test]
    fn test_ignores_trailing_query_parameters() {
        assert!(is_valid_youtube_url(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"
        ));
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }
}
