//! Route guard for protected pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::pwa_head::APP_ICON;
use crate::state::auth::AuthSession;
use crate::util::asset_path::use_asset;
use crate::util::auth::{GateRender, GateState, install_unauth_redirect};

/// Render `children` only for a signed-in session.
///
/// Shows [`GateLoading`] until the session resolves and renders nothing while
/// redirecting an unauthenticated viewer to `/login`.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    install_unauth_redirect(auth, use_navigate());

    move || match GateState::classify(&auth.get()).render(children.clone()) {
        GateRender::Loading => view! { <GateLoading/> }.into_any(),
        GateRender::Nothing => ().into_any(),
        GateRender::Children(children) => children().into_any(),
    }
}

/// Neutral loading indicator shown while the session is unresolved.
#[component]
pub fn GateLoading() -> impl IntoView {
    let icon = use_asset(&APP_ICON);

    view! {
        <div class="gate-loading" role="status" aria-live="polite">
            <img class="gate-loading__logo" src=icon alt="" width="64" height="64"/>
            <div class="gate-loading__spinner"></div>
            <p class="gate-loading__label">"Loading..."</p>
        </div>
    }
}
