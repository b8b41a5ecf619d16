//! Login page.

use leptos::*;
use leptos_meta::Title;
use leptos_router::use_navigate;

use crate::auth::use_auth;
use crate::types::AppError;

/// Server message when the API supplied one, generic fallback otherwise.
fn login_error_message(error: &AppError) -> String {
    match error {
        AppError::Api { message, .. } if !message.is_empty() => message.clone(),
        _ => "Login failed".to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (remember, set_remember) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_loading.set(true);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = auth
                .login(
                    &username.get_untracked(),
                    &password.get_untracked(),
                    remember.get_untracked(),
                )
                .await;
            match result {
                Ok(()) => navigate("/", Default::default()),
                Err(e) => set_error.set(Some(login_error_message(&e))),
            }
            set_loading.set(false);
        });
    };

    view! {
        <Title text="Sign In - mediadrop"/>
        <div class="login-page">
            <div class="login-card">
                <div class="login-icon">"🔐"</div>
                <h2>"Welcome Back"</h2>
                <p class="login-subtitle">"Sign in to access your dashboard"</p>

                <form on:submit=on_submit>
                    <Show when=move || error.get().is_some() fallback=|| view! {}>
                        <div class="login-error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="login-field">
                        <label>"Username"</label>
                        <input
                            type="text"
                            placeholder="Enter your username"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required=true
                        />
                    </div>

                    <div class="login-field">
                        <label>"Password"</label>
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required=true
                        />
                    </div>

                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=remember
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>

                    <button class="btn btn-primary login-submit" type="submit" disabled=loading>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
