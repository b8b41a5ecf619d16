//! Route guard for authenticated pages.

use leptos::*;
use leptos_router::Redirect;

use crate::auth::use_auth;

/// Renders its children only for an authenticated session.
///
/// While the initial token verification is pending, a neutral placeholder
/// is shown so protected content never flashes. An unauthenticated
/// session is redirected to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let verifying = auth.verifying;
    let authenticated = auth.authenticated;
    let children = store_value(children);

    view! {
        <Show
            when=move || !verifying.get()
            fallback=|| view! { <div class="auth-pending"></div> }
        >
            <Show
                when=move || authenticated.get()
                fallback=|| view! { <Redirect path="/login"/> }
            >
                {children.with_value(|children| children())}
            </Show>
        </Show>
    }
}
