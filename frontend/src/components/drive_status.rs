//! Google Drive connection status widget.
//!
//! Fetches `/auth/status` on mount and renders one of: checking, error,
//! expired, connected, disconnected. Connecting opens a centered popup
//! to the backend-provided authorization URL. Completion is detected two
//! ways: the popup may post an explicit completion message to its opener,
//! and as a portable fallback the widget polls the popup's closed flag,
//! re-querying status shortly after it closes. The poll loop terminates
//! on its first closed observation, so no repeating timer is left behind.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use crate::config::{
    api_url, DRIVE_AUTH_COMPLETE_MESSAGE, POPUP_HEIGHT, POPUP_POLL_INTERVAL_MS, POPUP_WIDTH,
    STATUS_RECHECK_DELAY_MS,
};
use crate::services::{fetch_auth_url, fetch_status, revoke_token, ApiClient};
use crate::types::DriveStatus;

/// Widget-local view of the connection, derived from the last status call.
#[derive(Clone, Debug, PartialEq)]
enum DriveConnection {
    Checking,
    Error(String),
    Ready(DriveStatus),
}

fn refresh_status(api: ApiClient, set_state: WriteSignal<DriveConnection>) {
    set_state.set(DriveConnection::Checking);
    spawn_local(async move {
        match fetch_status(&api).await {
            Ok(status) => set_state.set(DriveConnection::Ready(status)),
            Err(e) => {
                log::error!("Drive status check failed: {}", e);
                set_state.set(DriveConnection::Error(e.to_string()));
            }
        }
    });
}

/// Opens the authorization popup centered on the screen.
fn open_centered_popup(url: &str) -> Option<web_sys::Window> {
    let window = window();
    let (left, top) = window
        .screen()
        .ok()
        .map(|screen| {
            let width = screen.width().unwrap_or(0);
            let height = screen.height().unwrap_or(0);
            ((width - POPUP_WIDTH) / 2, (height - POPUP_HEIGHT) / 2)
        })
        .unwrap_or((0, 0));
    let features = format!(
        "width={},height={},left={},top={}",
        POPUP_WIDTH, POPUP_HEIGHT, left, top
    );
    window
        .open_with_url_and_target_and_features(url, "Drive Authorization", &features)
        .ok()
        .flatten()
}

/// Runs the popup authorization flow.
///
/// `revoke_first` forces a fresh token: the old one is revoked
/// best-effort, and a revoke failure never blocks the reconnect.
fn connect(api: ApiClient, set_state: WriteSignal<DriveConnection>, revoke_first: bool) {
    set_state.set(DriveConnection::Checking);
    spawn_local(async move {
        if revoke_first {
            log::info!("Revoking old Drive token before reconnect");
            if let Err(e) = revoke_token(&api).await {
                log::warn!("Could not revoke token: {}", e);
            }
        }

        let auth_url = match fetch_auth_url(&api).await {
            Ok(url) => url,
            Err(e) => {
                log::error!("Could not fetch authorization URL: {}", e);
                set_state.set(DriveConnection::Error(e.to_string()));
                return;
            }
        };

        let Some(popup) = open_centered_popup(&auth_url) else {
            set_state.set(DriveConnection::Error(
                "Authorization popup was blocked".to_string(),
            ));
            return;
        };

        // Portable fallback: watch the popup's closed flag. The explicit
        // completion message (below) may have refreshed the status already;
        // re-querying again after close is harmless.
        loop {
            TimeoutFuture::new(POPUP_POLL_INTERVAL_MS).await;
            if popup.closed().unwrap_or(true) {
                break;
            }
        }
        TimeoutFuture::new(STATUS_RECHECK_DELAY_MS).await;
        refresh_status(api, set_state);
    });
}

/// Listens for the popup's explicit completion message.
///
/// Only messages from the API origin carrying the agreed marker count.
/// The listener lives for the page's lifetime.
fn listen_for_completion(api: ApiClient, set_state: WriteSignal<DriveConnection>) {
    let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
        if !api_url().starts_with(&event.origin()) {
            return;
        }
        if event.data().as_string().as_deref() == Some(DRIVE_AUTH_COMPLETE_MESSAGE) {
            log::info!("📡 Drive authorization completed");
            refresh_status(api.clone(), set_state);
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Err(e) =
        window().add_event_listener_with_callback("message", onmessage.as_ref().unchecked_ref())
    {
        log::error!("Failed to attach message listener: {:?}", e);
    }
    onmessage.forget();
}

/// Renders a backend expiry value (epoch millis or ISO string).
fn format_expiry(value: &serde_json::Value) -> String {
    let date = match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(|millis| js_sys::Date::new(&JsValue::from_f64(millis))),
        serde_json::Value::String(s) => Some(js_sys::Date::new(&JsValue::from_str(s))),
        _ => None,
    };
    date.and_then(|d| {
        d.to_locale_string("en-US", &JsValue::UNDEFINED)
            .as_string()
    })
    .unwrap_or_else(|| "Unknown".to_string())
}

#[component]
pub fn DriveConnect() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let (state, set_state) = create_signal(DriveConnection::Checking);

    listen_for_completion(api.clone(), set_state);
    refresh_status(api.clone(), set_state);

    let status_text = move || match state.get() {
        DriveConnection::Checking => "Checking...".to_string(),
        DriveConnection::Error(_) => "Connection Error".to_string(),
        DriveConnection::Ready(s) if s.is_expired => {
            "⚠️ Token Expired - Reconnect Required".to_string()
        }
        DriveConnection::Ready(s) if s.authenticated => "Connected to Google Drive".to_string(),
        DriveConnection::Ready(_) => "Not Connected".to_string(),
    };
    let status_class = move || match state.get() {
        DriveConnection::Checking => "drive-status status-checking",
        DriveConnection::Error(_) => "drive-status status-error",
        DriveConnection::Ready(s) if s.is_expired => "drive-status status-expired",
        DriveConnection::Ready(s) if s.authenticated => "drive-status status-connected",
        DriveConnection::Ready(_) => "drive-status status-disconnected",
    };

    let connect_api = api.clone();
    let reconnect_api = api.clone();
    let refresh_api = api.clone();

    let actions = move || match state.get() {
        DriveConnection::Checking => ().into_view(),
        DriveConnection::Ready(s) if s.is_expired => {
            let api = reconnect_api.clone();
            view! {
                <button class="btn btn-warning" on:click=move |_| connect(api.clone(), set_state, true)>
                    "🔄 Get New Token"
                </button>
            }
            .into_view()
        }
        DriveConnection::Ready(s) if s.authenticated => {
            let api = refresh_api.clone();
            view! {
                <button class="btn btn-secondary" on:click=move |_| refresh_status(api.clone(), set_state)>
                    "Refresh"
                </button>
            }
            .into_view()
        }
        _ => {
            let api = connect_api.clone();
            view! {
                <button class="btn btn-primary" on:click=move |_| connect(api.clone(), set_state, false)>
                    "Connect Google Drive"
                </button>
            }
            .into_view()
        }
    };

    let details = move || match state.get() {
        DriveConnection::Ready(status) => {
            let is_expired = status.is_expired;
            let has_refresh_token = status.has_refresh_token;
            let Some(expires_at) = status.expires_at.as_ref() else {
                return ().into_view();
            };
            let panel_class = if is_expired {
                "drive-expiry expired"
            } else {
                "drive-expiry"
            };
            let label = if is_expired {
                "Token expired on:"
            } else {
                "Token expires on:"
            };
            let expiry = format_expiry(expires_at);
            view! {
                <div class=panel_class>
                    <p><strong>{label}</strong> " " {expiry}</p>
                    <Show when=move || is_expired fallback=|| view! {}>
                        <p class="drive-expiry-hint">
                            "⚠️ Click \"Get New Token\" above to reconnect"
                        </p>
                    </Show>
                    <Show
                        when=move || has_refresh_token && !is_expired
                        fallback=|| view! {}
                    >
                        <p class="drive-expiry-hint">"✓ Auto-refresh enabled"</p>
                    </Show>
                </div>
            }
            .into_view()
        }
        DriveConnection::Error(message) => view! {
            <div class="drive-error">
                <strong>"Error: "</strong> {message}
            </div>
        }
        .into_view(),
        DriveConnection::Checking => ().into_view(),
    };

    view! {
        <div class="drive-connect">
            <div class="drive-connect-header">
                <div class=status_class>
                    <h3>"Google Drive Status"</h3>
                    <p>{status_text}</p>
                </div>
                {actions}
            </div>
            {details}
        </div>
    }
}
