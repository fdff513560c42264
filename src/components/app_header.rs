//! Top bar for signed-in pages: navigation and sign-out.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pwa_head::APP_ICON;
use crate::state::auth::AuthSession;
use crate::util::asset_path::use_asset;

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let icon = use_asset(&APP_ICON);
    let display_name = move || auth.get().display_name().unwrap_or_default().to_owned();

    // Clearing the session hands the redirect to the auth gate.
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.set(AuthSession::signed_out());
        });
        #[cfg(not(feature = "hydrate"))]
        auth.set(AuthSession::signed_out());
    };

    view! {
        <header class="app-header">
            <img class="app-header__logo" src=icon alt="pora" width="32" height="32"/>
            <nav class="app-header__nav">
                <A href="/">"Feed"</A>
                <A href="/messages">"Messages"</A>
            </nav>
            <span class="app-header__user">{display_name}</span>
            <button class="app-header__logout" on:click=on_logout>
                "Sign out"
            </button>
        </header>
    }
}
